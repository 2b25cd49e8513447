use crate::core::{
    distance::haversine_distance_km,
    filters::filter_shelters_by_name,
    priority::calculate_priority_score,
    text::{levenshtein, normalize},
};
use crate::models::{GeoPoint, RankedShelter, Shelter};

/// Maximum edit distance at which a preferred name resolves to a result
pub const NAME_MATCH_MAX_DISTANCE: usize = 3;

/// Result of ranking shelters for a client
#[derive(Debug)]
pub struct RankResult {
    pub shelters: Vec<RankedShelter>,
    pub total_candidates: usize,
}

/// Shelter ranking pipeline
///
/// # Pipeline Stages
/// 1. Name filter (optional search term)
/// 2. Priority scoring and distance from the client's position
/// 3. Distance cutoff (optional)
/// 4. Ranking by priority, then proximity
#[derive(Debug, Clone)]
pub struct ShelterRanker {
    max_distance_km: Option<f64>,
}

impl ShelterRanker {
    /// Rank only shelters within `max_distance_km` of the client
    pub fn new(max_distance_km: f64) -> Self {
        Self {
            max_distance_km: Some(max_distance_km),
        }
    }

    /// Rank every candidate regardless of distance
    pub fn unbounded() -> Self {
        Self {
            max_distance_km: None,
        }
    }

    /// Rank candidate shelters for a client position
    ///
    /// # Arguments
    /// * `origin` - The client's position
    /// * `shelters` - All candidate shelters
    /// * `search_term` - Optional name filter, matched like [`filter_shelters_by_name`]
    /// * `limit` - Maximum number of results to return
    ///
    /// # Returns
    /// RankResult with shelters sorted by priority score (descending) and
    /// distance (ascending) as the tiebreak.
    pub fn rank(
        &self,
        origin: &GeoPoint,
        shelters: Vec<Shelter>,
        search_term: Option<&str>,
        limit: usize,
    ) -> RankResult {
        let total_candidates = shelters.len();

        // Stage 1: name filter
        let candidates = match search_term {
            Some(term) => filter_shelters_by_name(shelters, term),
            None => shelters,
        };

        // Stages 2 & 3: score, measure, cut off
        let mut ranked: Vec<RankedShelter> = candidates
            .into_iter()
            .filter_map(|shelter| {
                let distance_km = haversine_distance_km(
                    origin.latitude,
                    origin.longitude,
                    shelter.latitude,
                    shelter.longitude,
                );

                if let Some(max) = self.max_distance_km {
                    if distance_km > max {
                        return None;
                    }
                }

                let priority_score = calculate_priority_score(
                    shelter.beds_available,
                    shelter.waitlist_length,
                    shelter.average_stay_days,
                );

                Some(RankedShelter {
                    name: shelter.display_name().to_string(),
                    distance_km,
                    priority_score,
                    beds_available: shelter.beds_available,
                })
            })
            .collect();

        // Stage 4: sort by priority (descending), then by distance (ascending)
        ranked.sort_by(|a, b| {
            b.priority_score
                .partial_cmp(&a.priority_score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| {
                    a.distance_km
                        .partial_cmp(&b.distance_km)
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
        });

        ranked.truncate(limit);

        tracing::debug!(
            "Ranked {} of {} candidate shelters",
            ranked.len(),
            total_candidates
        );

        RankResult {
            shelters: ranked,
            total_candidates,
        }
    }

    /// Promote the shelter whose name is closest to `preferred_name`
    ///
    /// Convenience for intake workers with a half-remembered shelter name:
    /// ranks as [`rank`](Self::rank) does, then moves the result whose
    /// normalized name has the smallest edit distance to the preferred name
    /// to the front. Names further than [`NAME_MATCH_MAX_DISTANCE`] edits
    /// away are not considered and the ranking order stands.
    pub fn rank_with_preference(
        &self,
        origin: &GeoPoint,
        shelters: Vec<Shelter>,
        preferred_name: &str,
        limit: usize,
    ) -> RankResult {
        let normalized = normalize(preferred_name);

        let mut result = self.rank(origin, shelters, None, limit);

        let closest = result
            .shelters
            .iter()
            .enumerate()
            .map(|(idx, s)| (idx, levenshtein(&normalize(&s.name), &normalized)))
            .filter(|(_, dist)| *dist <= NAME_MATCH_MAX_DISTANCE)
            .min_by_key(|(_, dist)| *dist);

        if let Some((idx, dist)) = closest {
            tracing::debug!(
                "Preferred name {:?} resolved to {:?} (edit distance {})",
                preferred_name,
                result.shelters[idx].name,
                dist
            );
            let preferred = result.shelters.remove(idx);
            result.shelters.insert(0, preferred);
        }

        result
    }
}

impl Default for ShelterRanker {
    fn default() -> Self {
        Self::unbounded()
    }
}
