use thiserror::Error;

/// Errors raised when an assessment input falls outside its valid range
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoreError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Weight of the clothing-disrepair band
const CLOTHING_WEIGHT: f64 = 0.30;
/// Weight of the hair-disorder band
const HAIR_WEIGHT: f64 = 0.25;
/// Weight of the facial-hair band
const FACIAL_HAIR_WEIGHT: f64 = 0.15;
/// Weight of the elapsed-days band
const DAYS_WEIGHT: f64 = 0.30;

/// Facial hair length at which the band saturates, in millimeters
const FACIAL_HAIR_CAP_MM: f64 = 30.0;
/// Days-since-shower value at which the band saturates
const DAYS_CAP: f64 = 14.0;

/// Calculate a dishevelment score (0-100) from an intake assessment
///
/// Scoring formula:
/// score = clothing_disrepair * 0.30
///       + hair_disorder      * 0.25
///       + min(facial_hair_mm, 30) / 30 * 0.15 * 100
///       + min(days_since_shower, 14) / 14 * 0.30 * 100
///
/// The facial-hair and elapsed-days bands saturate at 30mm and 14 days, so
/// the weighted sum is already bounded at 100 before the final clamp.
///
/// # Arguments
/// * `clothing_disrepair` - Condition of clothing, 0 (intact) to 100 (severely damaged)
/// * `hair_disorder` - State of hair, 0 (kept) to 100 (unkempt)
/// * `facial_hair_mm` - Facial hair length in millimeters
/// * `days_since_shower` - Days since the client last had access to a shower
///
/// # Returns
/// The score rounded to 2 decimal places, or `ScoreError::InvalidArgument`
/// if any input is outside its stated range.
pub fn calculate_dishevelment_score(
    clothing_disrepair: i32,
    hair_disorder: i32,
    facial_hair_mm: f64,
    days_since_shower: f64,
) -> Result<f64, ScoreError> {
    if !(0..=100).contains(&clothing_disrepair) {
        return Err(ScoreError::InvalidArgument(
            "clothing disrepair must be between 0 and 100".to_string(),
        ));
    }
    if !(0..=100).contains(&hair_disorder) {
        return Err(ScoreError::InvalidArgument(
            "hair disorder must be between 0 and 100".to_string(),
        ));
    }
    if facial_hair_mm < 0.0 {
        return Err(ScoreError::InvalidArgument(
            "facial hair length cannot be negative".to_string(),
        ));
    }
    if days_since_shower < 0.0 {
        return Err(ScoreError::InvalidArgument(
            "days since shower cannot be negative".to_string(),
        ));
    }

    let score = f64::from(clothing_disrepair) * CLOTHING_WEIGHT
        + f64::from(hair_disorder) * HAIR_WEIGHT
        + facial_hair_band(facial_hair_mm) * FACIAL_HAIR_WEIGHT * 100.0
        + elapsed_days_band(days_since_shower) * DAYS_WEIGHT * 100.0;

    Ok(((score.min(100.0)) * 100.0).round() / 100.0)
}

/// Facial-hair band ratio (0-1), saturating at the cap length
#[inline]
fn facial_hair_band(facial_hair_mm: f64) -> f64 {
    facial_hair_mm.min(FACIAL_HAIR_CAP_MM) / FACIAL_HAIR_CAP_MM
}

/// Elapsed-days band ratio (0-1), saturating at the cap
#[inline]
fn elapsed_days_band(days_since_shower: f64) -> f64 {
    days_since_shower.min(DAYS_CAP) / DAYS_CAP
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_all_bands_saturated() {
        let score = calculate_dishevelment_score(100, 100, 30.0, 14.0).unwrap();
        assert_eq!(score, 100.0);
    }

    #[test]
    fn test_score_all_zero() {
        let score = calculate_dishevelment_score(0, 0, 0.0, 0.0).unwrap();
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_score_mid_bands() {
        // 50*0.3 + 50*0.25 + (15/30)*15 + (7/14)*30 = 15 + 12.5 + 7.5 + 15
        let score = calculate_dishevelment_score(50, 50, 15.0, 7.0).unwrap();
        assert_eq!(score, 50.0);
    }

    #[test]
    fn test_score_rounded_to_two_places() {
        // (1/14)*30 = 2.142857...
        let score = calculate_dishevelment_score(0, 0, 0.0, 1.0).unwrap();
        assert_eq!(score, 2.14);
    }

    #[test]
    fn test_bands_saturate_past_caps() {
        let at_cap = calculate_dishevelment_score(0, 0, 30.0, 14.0).unwrap();
        let past_cap = calculate_dishevelment_score(0, 0, 120.0, 365.0).unwrap();
        assert_eq!(at_cap, past_cap);
    }

    #[test]
    fn test_score_within_valid_range() {
        for clothing in [0, 25, 50, 75, 100] {
            for hair in [0, 33, 100] {
                for mm in [0.0, 10.0, 30.0, 80.0] {
                    for days in [0.0, 3.5, 14.0, 60.0] {
                        let score =
                            calculate_dishevelment_score(clothing, hair, mm, days).unwrap();
                        assert!(
                            (0.0..=100.0).contains(&score),
                            "score {} out of range",
                            score
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_clothing_out_of_range_rejected() {
        assert!(calculate_dishevelment_score(-1, 0, 0.0, 0.0).is_err());
        assert!(calculate_dishevelment_score(101, 0, 0.0, 0.0).is_err());
    }

    #[test]
    fn test_hair_out_of_range_rejected() {
        assert!(calculate_dishevelment_score(0, -1, 0.0, 0.0).is_err());
        assert!(calculate_dishevelment_score(0, 101, 0.0, 0.0).is_err());
    }

    #[test]
    fn test_negative_facial_hair_rejected() {
        let err = calculate_dishevelment_score(0, 0, -1.0, 0.0).unwrap_err();
        assert_eq!(
            err,
            ScoreError::InvalidArgument("facial hair length cannot be negative".to_string())
        );
    }

    #[test]
    fn test_negative_days_rejected() {
        assert!(calculate_dishevelment_score(0, 0, 0.0, -1.0).is_err());
    }
}
