/// Calculate a placement priority score for a shelter
///
/// Combines bed availability relative to waitlist pressure with an occupancy
/// decay: more free beds raise the score, longer average stays lower it.
///
/// priority = (beds / (waitlist + beds)) * (1 / (1 + average_stay_days))
///
/// A `beds_available` of zero or less is substituted with 1 inside the ratio
/// rather than rejected, so the function is total. `waitlist_length` is not
/// validated; a negative waitlist can push the ratio above 1.
///
/// # Returns
/// The priority score rounded to 3 decimal places, in (0, 1] for
/// non-negative inputs.
#[inline]
pub fn calculate_priority_score(
    beds_available: i32,
    waitlist_length: i32,
    average_stay_days: f64,
) -> f64 {
    let effective_beds = if beds_available > 0 { beds_available } else { 1 };

    let availability_ratio =
        f64::from(effective_beds) / f64::from(waitlist_length + effective_beds);
    let duration_weight = 1.0 / (1.0 + average_stay_days);

    let priority = availability_ratio * duration_weight;
    (priority * 1000.0).round() / 1000.0
}
