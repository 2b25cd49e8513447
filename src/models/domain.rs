use serde::{Deserialize, Serialize};

/// Shelter record with capacity and location data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shelter {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(rename = "bedsAvailable", default)]
    pub beds_available: i32,
    #[serde(rename = "waitlistLength", default)]
    pub waitlist_length: i32,
    #[serde(rename = "averageStayDays", default)]
    pub average_stay_days: f64,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Shelter {
    /// Helper to get the name, defaulting to an empty string when absent
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

/// Geographic position in degrees
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// Ranked shelter result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedShelter {
    pub name: String,
    #[serde(rename = "distanceKm")]
    pub distance_km: f64,
    #[serde(rename = "priorityScore")]
    pub priority_score: f64,
    #[serde(rename = "bedsAvailable")]
    pub beds_available: i32,
}
