//! World-clock renderer

use chrono::{DateTime, FixedOffset};

use kiosk_core::{SurfaceTree, SurfaceUpdate};
use kiosk_time::WORLD_CITIES;

use crate::RenderReport;

pub fn render_world_clocks(tree: &mut dyn SurfaceTree, now: &DateTime<FixedOffset>) -> RenderReport {
    let mut report = RenderReport::new();
    for city in WORLD_CITIES {
        report.write(tree, city.surface, SurfaceUpdate::Text(city.label(now)));
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiosk_core::{MemoryBoard, SurfaceId};

    #[test]
    fn test_city_labels() {
        let mut board = MemoryBoard::full();
        // 12:05 UTC
        let now = DateTime::parse_from_rfc3339("2026-10-19T14:05:09+02:00").unwrap();

        let report = render_world_clocks(&mut board, &now);

        assert_eq!(report.written.len(), 4);
        assert_eq!(board.text(SurfaceId::TimeSanJuan), Some("08:05"));
        assert_eq!(board.text(SurfaceId::TimeNewYork), Some("07:05"));
        assert_eq!(board.text(SurfaceId::TimeLosAngeles), Some("04:05"));
        assert_eq!(board.text(SurfaceId::TimeDubai), Some("16:05"));
    }

    #[test]
    fn test_missing_city_skips_only_itself() {
        let mut board = MemoryBoard::without(&[SurfaceId::TimeNewYork]);
        let now = DateTime::parse_from_rfc3339("2026-10-19T23:30:00+00:00").unwrap();

        let report = render_world_clocks(&mut board, &now);

        assert_eq!(report.skipped, vec![SurfaceId::TimeNewYork]);
        assert_eq!(board.text(SurfaceId::TimeDubai), Some("03:30"));
        assert_eq!(board.text(SurfaceId::TimeLosAngeles), Some("15:30"));
    }
}
