//! Clock renderer: digital time, long date, analog hands

use chrono::{DateTime, FixedOffset};

use kiosk_core::{SurfaceId, SurfaceTree, SurfaceUpdate};
use kiosk_time::{display_date, DigitalTime, HandAngles};

use crate::RenderReport;

pub fn render_clock(
    tree: &mut dyn SurfaceTree,
    now: &DateTime<FixedOffset>,
    date_locale: &str,
) -> RenderReport {
    let mut report = RenderReport::new();

    let digital = DigitalTime::from_time(now);
    report.write(tree, SurfaceId::DigitalTimeMain, SurfaceUpdate::Text(digital.main));
    report.write(
        tree,
        SurfaceId::DigitalTimeSeconds,
        SurfaceUpdate::Text(digital.seconds),
    );

    report.write(
        tree,
        SurfaceId::DateDisplay,
        SurfaceUpdate::Text(display_date(now.date_naive(), date_locale)),
    );

    // Each hand independently
    let angles = HandAngles::from_time(now);
    report.write(tree, SurfaceId::SecondHand, SurfaceUpdate::Rotation(angles.second));
    report.write(tree, SurfaceId::MinuteHand, SurfaceUpdate::Rotation(angles.minute));
    report.write(tree, SurfaceId::HourHand, SurfaceUpdate::Rotation(angles.hour));

    report
}
