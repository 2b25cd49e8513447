//! Haven Algo - intake scoring and shelter search for the Haven outreach platform
//!
//! This library provides the scoring core used by the Haven outreach tools:
//! intake dishevelment assessment, shelter placement priority, geographic
//! distance, name-search normalization, and a ranking pipeline composing them.

pub mod core;
pub mod models;

// Re-export commonly used types
pub use crate::core::{
    calculate_dishevelment_score, calculate_priority_score, filter_shelters_by_name,
    generate_display_name, haversine_distance_km, levenshtein, normalize, RankResult,
    ScoreError, ShelterRanker,
};
pub use crate::models::{GeoPoint, RankedShelter, Shelter};

/// URL of the premium onboarding guide, surfaced in client apps
pub const PREMIUM_URL: &str = "https://havenoutreach.app/guide/premium";
