//! Easing curves

use std::time::Duration;

/// Symmetric quadratic ease-in-out over [0, 1]
#[inline]
pub fn ease_in_out_quad(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    if p < 0.5 {
        2.0 * p * p
    } else {
        1.0 - (-2.0 * p + 2.0).powi(2) / 2.0
    }
}

/// Linear progress of an animation, clamped to 1
#[inline]
pub fn linear_progress(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f64() / duration.as_secs_f64()).min(1.0)
}

/// Eased position between `start` and `target`.
/// Progress 1 returns `target` exactly.
#[inline]
pub fn interpolate(start: f64, target: f64, progress: f64) -> f64 {
    if progress >= 1.0 {
        return target;
    }
    start + (target - start) * ease_in_out_quad(progress)
}
