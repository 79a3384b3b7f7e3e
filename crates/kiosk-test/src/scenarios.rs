//! End-to-end scenarios
//!
//! Whole-dashboard behavior under virtual time:
//! - Snap after scroll-settle and touch-end
//! - Debounce of scroll bursts
//! - Mutual exclusion of animations
//! - Idle return to rest
//! - Weather fetch, fallback and failure display
//! - Rendering with missing surfaces

use std::sync::Arc;
use std::time::Duration;

use kiosk_core::{Interaction, MemoryBoard, SurfaceId, TimerKind};
use kiosk_weather::HttpResponse;

use crate::{ScriptedTransport, SimConfig, Simulation};

const FORECAST: &str = include_str!("../../kiosk-weather/fixtures/forecast.json");

fn started(transport: ScriptedTransport) -> Simulation {
    let mut sim = Simulation::with_transport(Arc::new(transport)).unwrap();
    sim.start();
    sim
}

fn quiet() -> Simulation {
    started(ScriptedTransport::new())
}

// ============================================================================
// SCROLL SNAP
// ============================================================================

#[test]
fn test_scroll_settle_760_snaps_to_800() {
    let mut sim = quiet();

    sim.scroll_by(760.0);
    sim.advance(Duration::from_millis(199));
    assert!(!sim.dashboard().snap().is_animating());

    sim.advance(Duration::from_millis(1));
    assert!(sim.dashboard().snap().is_animating());

    let mut offsets = vec![sim.offset()];
    for _ in 0..30 {
        sim.advance(Duration::from_millis(16));
        offsets.push(sim.offset());
    }

    assert!(offsets.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(sim.offset(), 800.0);
    assert!(!sim.dashboard().snap().is_animating());
}

#[test]
fn test_scroll_burst_settles_once() {
    let mut sim = quiet();

    // Ten small drags, 100ms apart
    for _ in 0..10 {
        sim.scroll_by(30.0);
        sim.advance(Duration::from_millis(100));
    }
    assert_eq!(sim.dashboard().snap().stats().animations_started, 0);
    assert_eq!(sim.queue().count_kind(TimerKind::SnapDebounce), 1);

    // Last drag at 900ms, settle at 1100ms
    sim.advance(Duration::from_millis(99));
    assert_eq!(sim.dashboard().snap().stats().animations_started, 0);
    sim.advance(Duration::from_millis(1));
    assert_eq!(sim.dashboard().snap().stats().animations_started, 1);

    sim.advance(Duration::from_secs(1));
    assert_eq!(sim.offset(), 0.0);
}

#[test]
fn test_dead_zone_leaves_offset_alone() {
    let mut sim = quiet();

    sim.scroll_by(803.0);
    sim.advance(Duration::from_secs(1));

    assert_eq!(sim.offset(), 803.0);
    assert_eq!(sim.dashboard().snap().stats().animations_started, 0);
}

#[test]
fn test_touch_end_snaps_after_400ms() {
    let mut sim = quiet();
    sim.place_viewport(1300.0);

    sim.interact(Interaction::TouchEnd);
    sim.advance(Duration::from_millis(399));
    assert!(!sim.dashboard().snap().is_animating());

    sim.advance(Duration::from_millis(1));
    assert!(sim.dashboard().snap().is_animating());

    sim.advance(Duration::from_millis(500));
    assert_eq!(sim.offset(), 1600.0);
}

#[test]
fn test_request_during_animation_keeps_target() {
    let mut sim = quiet();

    sim.scroll_by(760.0);
    sim.advance(Duration::from_millis(200));
    let running = *sim.dashboard().snap().state().animation().unwrap();

    // Drag and release mid-animation
    sim.advance(Duration::from_millis(100));
    sim.scroll_by(-500.0);
    sim.interact(Interaction::TouchEnd);
    sim.advance(Duration::from_millis(50));

    assert_eq!(sim.dashboard().snap().state().animation(), Some(&running));

    sim.advance(Duration::from_secs(2));
    assert_eq!(sim.offset(), 800.0);
}

#[test]
fn test_own_scroll_events_do_not_retrigger() {
    let mut sim = quiet();

    sim.scroll_by(1150.0);
    sim.advance(Duration::from_secs(2));

    let stats = sim.dashboard().snap().stats().clone();
    assert_eq!(stats.animations_started, 1);
    assert!(stats.scrolls_ignored >= 20);
    assert_eq!(sim.offset(), 800.0);
}

// ============================================================================
// IDLE
// ============================================================================

#[test]
fn test_idle_at_120_returns_to_rest() {
    let mut sim = quiet();
    sim.place_viewport(120.0);

    sim.interact(Interaction::PointerMove);
    sim.advance(Duration::from_millis(9_999));
    assert_eq!(sim.offset(), 120.0);

    sim.advance(Duration::from_millis(1_000));
    assert_eq!(sim.offset(), 0.0);
}

#[test]
fn test_idle_at_20_does_nothing() {
    let mut sim = quiet();
    sim.place_viewport(20.0);

    sim.interact(Interaction::Click);
    sim.advance(Duration::from_secs(15));

    assert_eq!(sim.offset(), 20.0);
    assert_eq!(sim.dashboard().snap().stats().animations_started, 0);
}

#[test]
fn test_idle_uses_offset_at_fire_time() {
    let mut sim = quiet();
    sim.place_viewport(1600.0);
    sim.interact(Interaction::KeyDown);

    // Moved back near the top without any event
    sim.advance(Duration::from_secs(5));
    sim.place_viewport(10.0);
    sim.advance(Duration::from_secs(6));

    assert_eq!(sim.offset(), 10.0);
}

#[test]
fn test_idle_return_dropped_while_animating() {
    // Slow frames so the idle countdown can expire mid-animation
    let mut config = SimConfig::default();
    config.dashboard.snap.animation_duration = Duration::from_secs(5);
    config.dashboard.frame_interval = Duration::from_secs(3);
    config.dashboard.idle.timeout = Duration::from_secs(2);
    let mut sim = Simulation::new(config, Arc::new(ScriptedTransport::new())).unwrap();
    sim.start();

    sim.scroll_by(1150.0);
    // Settle at 200ms starts the animation; idle fires at 2s, before any frame
    sim.advance(Duration::from_millis(2_500));
    let animation = *sim.dashboard().snap().state().animation().unwrap();
    assert_eq!(animation.target, 800.0);
    assert_eq!(sim.dashboard().snap().stats().requests_dropped, 1);

    sim.advance(Duration::from_secs(5));
    assert_eq!(sim.offset(), 800.0);
}

// ============================================================================
// WEATHER
// ============================================================================

#[tokio::test]
async fn test_cloudy_forecast_renders() {
    let transport = ScriptedTransport::new();
    transport.push(HttpResponse::ok(FORECAST));
    let mut sim = started(transport);

    assert_eq!(sim.complete_fetches().await, 1);

    let board = sim.board();
    assert_eq!(board.text(SurfaceId::WeatherTemp), Some("12°"));
    assert_eq!(board.text(SurfaceId::WeatherIcon), Some("☁️"));
    assert_eq!(board.text(SurfaceId::WeatherDesc), Some("Bewölkt"));
    assert_eq!(board.text(SurfaceId::WeatherLocation), Some("Berlin"));

    let hourly = board.tiles(SurfaceId::HourlyForecast);
    assert_eq!(hourly.len(), 6);
    assert_eq!(hourly[0].lines, vec!["14:00", "⛅", "14°"]);

    let daily = board.tiles(SurfaceId::DailyForecast);
    assert_eq!(daily.len(), 5);
    assert_eq!(daily[0].lines, vec!["Di", "🌧️", "12° / 7°"]);
}

#[tokio::test]
async fn test_secure_failure_retries_once_over_http() {
    let transport = ScriptedTransport::new();
    transport
        .push(HttpResponse::transport_failure())
        .push(HttpResponse::ok(FORECAST));
    let mut sim = started(transport);

    sim.complete_fetches().await;

    assert_eq!(sim.transport().schemes(), vec!["https", "http"]);
    let requests = sim.transport().requests();
    assert_eq!(requests[0].query(), requests[1].query());
    assert_eq!(sim.board().text(SurfaceId::WeatherDesc), Some("Bewölkt"));
}

#[tokio::test]
async fn test_double_transport_failure_shows_status() {
    let mut sim = started(ScriptedTransport::new());

    sim.complete_fetches().await;

    assert_eq!(sim.transport().request_count(), 2);
    assert_eq!(
        sim.board().text(SurfaceId::WeatherDesc),
        Some("Keine Verbindung zum Wetterdienst")
    );
    assert_eq!(sim.board().text(SurfaceId::WeatherTemp), None);
}

#[tokio::test]
async fn test_bad_status_is_not_retried() {
    let transport = ScriptedTransport::new();
    transport.push(HttpResponse::status(502));
    let mut sim = started(transport);

    sim.complete_fetches().await;

    assert_eq!(sim.transport().schemes(), vec!["https"]);
    assert_eq!(
        sim.board().text(SurfaceId::WeatherDesc),
        Some("Wetterdienst nicht erreichbar (Status 502)")
    );
}

#[tokio::test]
async fn test_garbled_payload_reported_distinctly() {
    let transport = ScriptedTransport::new();
    transport.push(HttpResponse::ok("{\"current\": "));
    let mut sim = started(transport);

    sim.complete_fetches().await;

    assert_eq!(sim.board().text(SurfaceId::WeatherDesc), Some("Wetterdaten fehlerhaft"));
}

#[tokio::test]
async fn test_hourly_refresh_replaces_snapshot() {
    let transport = ScriptedTransport::with_fallback(HttpResponse::status(503));
    transport.push(HttpResponse::ok(FORECAST));
    let mut sim = started(transport);
    sim.complete_fetches().await;

    sim.advance(Duration::from_secs(3600));
    assert_eq!(sim.pending_fetches(), 1);
    sim.complete_fetches().await;

    // Failure shows in the summary only; the last snapshot stays
    assert_eq!(
        sim.board().text(SurfaceId::WeatherDesc),
        Some("Wetterdienst nicht erreichbar (Status 503)")
    );
    assert_eq!(sim.board().text(SurfaceId::WeatherTemp), Some("12°"));
    assert!(sim.dashboard().snapshot().is_some());
}

// ============================================================================
// RENDERING
// ============================================================================

#[test]
fn test_missing_surfaces_are_independent() {
    let mut config = SimConfig::default();
    config.board = MemoryBoard::without(&[
        SurfaceId::DigitalTimeMain,
        SurfaceId::DigitalTimeSeconds,
        SurfaceId::CalendarDays,
        SurfaceId::TimeNewYork,
    ]);
    let mut sim = Simulation::new(config, Arc::new(ScriptedTransport::new())).unwrap();
    sim.start();
    sim.advance(Duration::from_secs(61));

    let board = sim.board();
    assert!(board.rotation(SurfaceId::SecondHand).is_some());
    assert!(board.rotation(SurfaceId::HourHand).is_some());
    assert_eq!(board.text(SurfaceId::CalendarMonth), Some("Oktober 2026"));
    assert_eq!(board.text(SurfaceId::TimeDubai), Some("16:21"));
    assert_eq!(board.text(SurfaceId::DigitalTimeMain), None);
}

#[test]
fn test_same_time_same_surfaces() {
    let mut a = quiet();
    let mut b = quiet();

    a.advance(Duration::from_secs(5));
    b.advance(Duration::from_secs(2));
    b.advance(Duration::from_secs(3));

    assert!(a.board().same_content(b.board()));
    assert!(b.board().total_writes() > 0);
}

#[test]
fn test_english_locale() {
    let mut config = SimConfig::default();
    config.dashboard = config.dashboard.with_locale("en-US");
    let mut sim = Simulation::new(config, Arc::new(ScriptedTransport::new())).unwrap();
    sim.start();

    assert_eq!(
        sim.board().text(SurfaceId::DateDisplay),
        Some("Monday, October 19, 2026")
    );
}
