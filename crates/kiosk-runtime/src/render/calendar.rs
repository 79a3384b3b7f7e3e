//! Calendar renderer

use chrono::{DateTime, FixedOffset};

use kiosk_core::{SurfaceId, SurfaceTree, SurfaceUpdate};
use kiosk_time::MonthGrid;

use crate::RenderReport;

/// Header and day grid. The grid is replaced wholesale.
pub fn render_calendar(tree: &mut dyn SurfaceTree, now: &DateTime<FixedOffset>) -> RenderReport {
    let grid = MonthGrid::for_date(now.date_naive());
    let mut report = RenderReport::new();

    report.write(tree, SurfaceId::CalendarMonth, SurfaceUpdate::Text(grid.header()));
    report.write(tree, SurfaceId::CalendarDays, SurfaceUpdate::Tiles(grid.tiles()));

    report
}
