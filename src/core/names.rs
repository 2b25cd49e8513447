use rand::seq::IndexedRandom;

/// First-name pool for anonymized display names
const FIRST_NAMES: [&str; 10] = [
    "Dusty", "Rusty", "Patches", "Shadow", "Whisper", "Ashes", "Gravel", "River", "Stone",
    "Zephyr",
];

/// Last-name pool for anonymized display names
const LAST_NAMES: [&str; 10] = [
    "Holloway", "Creek", "Ford", "Woods", "Crossing", "Vale", "Ridge", "Glen", "Meadows",
    "Springs",
];

/// Generate an anonymized display name for an intake record
///
/// Picks one entry from each pool uniformly at random and joins them with a
/// space. Used when a client declines to give a name. No seeding surface;
/// output is not reproducible across calls.
pub fn generate_display_name() -> String {
    let mut rng = rand::rng();

    // The pools are non-empty const arrays, so choose() cannot return None.
    let first = FIRST_NAMES.choose(&mut rng).copied().unwrap_or(FIRST_NAMES[0]);
    let last = LAST_NAMES.choose(&mut rng).copied().unwrap_or(LAST_NAMES[0]);

    format!("{} {}", first, last)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_from_pools() {
        for _ in 0..32 {
            let name = generate_display_name();
            let (first, last) = name.split_once(' ').expect("name should have two parts");
            assert!(FIRST_NAMES.contains(&first));
            assert!(LAST_NAMES.contains(&last));
        }
    }

    #[test]
    fn test_display_name_varies() {
        // 100 draws over a 100-name space collide with all-equal probability ~1e-200
        let first = generate_display_name();
        let varied = (0..100).any(|_| generate_display_name() != first);
        assert!(varied);
    }
}
