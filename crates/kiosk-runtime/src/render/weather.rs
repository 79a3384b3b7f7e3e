//! Weather renderer

use chrono::NaiveDateTime;

use kiosk_core::{KioskError, SurfaceId, SurfaceTree, SurfaceUpdate};
use kiosk_weather::{
    condition, daily_rows, failure_summary, format_temperature, hourly_slots, WeatherSnapshot,
};

use crate::RenderReport;

/// Conditions, location and both forecast lists
pub fn render_weather(
    tree: &mut dyn SurfaceTree,
    snapshot: &WeatherSnapshot,
    now: NaiveDateTime,
    location_label: &str,
) -> RenderReport {
    let mut report = RenderReport::new();
    let current = condition(snapshot.current.weather_code);

    report.write(
        tree,
        SurfaceId::WeatherTemp,
        SurfaceUpdate::Text(format_temperature(snapshot.current.temperature)),
    );
    report.write(tree, SurfaceId::WeatherIcon, SurfaceUpdate::Text(current.icon.to_string()));
    report.write(
        tree,
        SurfaceId::WeatherDesc,
        SurfaceUpdate::Text(current.description.to_string()),
    );
    report.write(
        tree,
        SurfaceId::WeatherLocation,
        SurfaceUpdate::Text(location_label.to_string()),
    );

    let hourly = hourly_slots(&snapshot.hourly, now)
        .iter()
        .map(|slot| slot.to_tile())
        .collect();
    report.write(tree, SurfaceId::HourlyForecast, SurfaceUpdate::Tiles(hourly));

    let daily = daily_rows(&snapshot.daily, now)
        .iter()
        .map(|row| row.to_tile())
        .collect();
    report.write(tree, SurfaceId::DailyForecast, SurfaceUpdate::Tiles(daily));

    report
}

/// Status line in the summary surface; nothing else is touched
pub fn render_weather_failure(tree: &mut dyn SurfaceTree, err: &KioskError) -> RenderReport {
    let mut report = RenderReport::new();
    report.write(tree, SurfaceId::WeatherDesc, SurfaceUpdate::Text(failure_summary(err)));
    report
}
