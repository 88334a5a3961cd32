/// Floor applied to effort before dividing, so a zero estimate cannot panic
/// or produce an infinite score.
pub const MIN_EFFORT: f64 = 1e-4;

/// Compute a RICE score from the four raw inputs.
///
/// Confidence is a percentage and is clamped to `[0, 100]` before being
/// applied as a fraction; effort is floored at [`MIN_EFFORT`]. The result is
/// rounded to two decimals, half away from zero. Any numeric input is
/// accepted, including negatives; validating business ranges is the caller's
/// job.
pub fn rice_score(reach: f64, impact: f64, confidence_pct: f64, effort: f64) -> f64 {
    let confidence = confidence_pct.clamp(0.0, 100.0) / 100.0;
    let effort = effort.max(MIN_EFFORT);
    let raw = reach * impact * confidence / effort;
    (raw * 100.0).round() / 100.0
}
