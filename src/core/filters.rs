use crate::core::text::normalize;
use crate::models::Shelter;

/// Check if a shelter's normalized name contains the normalized search term
///
/// `normalized_term` must already be passed through [`normalize`]; the
/// shelter name is normalized here. An empty term matches every shelter.
#[inline]
pub fn matches_name(shelter: &Shelter, normalized_term: &str) -> bool {
    normalize(shelter.display_name()).contains(normalized_term)
}

/// Filter shelters by a search term on the name field
///
/// Matching is case- and punctuation-insensitive on both sides. The result
/// preserves input order and is densely indexed. Shelters without a name are
/// treated as having an empty name, so they match only the empty term.
pub fn filter_shelters_by_name(shelters: Vec<Shelter>, search_term: &str) -> Vec<Shelter> {
    let normalized_term = normalize(search_term);
    let total = shelters.len();

    let filtered: Vec<Shelter> = shelters
        .into_iter()
        .filter(|shelter| matches_name(shelter, &normalized_term))
        .collect();

    tracing::debug!(
        "Name filter {:?} matched {} of {} shelters",
        normalized_term,
        filtered.len(),
        total
    );

    filtered
}
