//! Snap target planning
//!
//! target = round(offset / pageHeight) × pageHeight, rounding halves up.
//! The page height is passed in by the caller on every call and never kept.

/// Round half toward positive infinity
#[inline]
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Nearest page boundary for an offset, None without a usable page height
pub fn snap_target(offset: f64, page_height: f64) -> Option<f64> {
    if !(page_height > 0.0) || !offset.is_finite() || !page_height.is_finite() {
        return None;
    }
    Some(round_half_up(offset / page_height) * page_height)
}

/// What a settle request should do
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SnapPlan {
    /// Animate from the current offset to a page boundary
    Animate { from: f64, to: f64 },
    /// Close enough to a boundary already
    WithinDeadZone { target: f64 },
    /// Viewport has no page height
    NoPages,
}

/// Plan a snap. Animates only if |offset − target| > dead_zone.
pub fn plan_snap(offset: f64, page_height: f64, dead_zone: f64) -> SnapPlan {
    match snap_target(offset, page_height) {
        Some(target) if (offset - target).abs() > dead_zone => SnapPlan::Animate {
            from: offset,
            to: target,
        },
        Some(target) => SnapPlan::WithinDeadZone { target },
        None => SnapPlan::NoPages,
    }
}
