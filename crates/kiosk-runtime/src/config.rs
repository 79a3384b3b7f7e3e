//! Dashboard configuration

use std::time::Duration;

use kiosk_core::{KioskError, KioskResult, RenderTask, FRAME_INTERVAL};
use kiosk_scroll::{IdleConfig, SnapConfig};
use kiosk_weather::WeatherConfig;

/// Dashboard configuration
#[derive(Clone, Debug)]
pub struct DashboardConfig {
    /// Digital clock, date and analog hands
    pub clock_period: Duration,
    /// World-clock labels
    pub world_period: Duration,
    /// Calendar header and grid
    pub calendar_period: Duration,
    /// Weather refresh
    pub weather_period: Duration,
    /// Animation frame cadence of the driver
    pub frame_interval: Duration,
    /// BCP 47 tag of the long date
    pub date_locale: String,
    pub idle: IdleConfig,
    pub snap: SnapConfig,
    pub weather: WeatherConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        DashboardConfig {
            clock_period: Duration::from_secs(1),
            world_period: Duration::from_secs(1),
            calendar_period: Duration::from_secs(60),
            weather_period: Duration::from_secs(3600),
            frame_interval: FRAME_INTERVAL,
            date_locale: "de-DE".to_string(),
            idle: IdleConfig::default(),
            snap: SnapConfig::default(),
            weather: WeatherConfig::default(),
        }
    }
}

impl DashboardConfig {
    /// Refresh period of a render task
    pub fn period(&self, task: RenderTask) -> Duration {
        match task {
            RenderTask::Clock => self.clock_period,
            RenderTask::WorldClocks => self.world_period,
            RenderTask::Calendar => self.calendar_period,
            RenderTask::Weather => self.weather_period,
        }
    }

    /// Show a different place in the weather panel
    pub fn with_location(mut self, latitude: f64, longitude: f64, label: impl Into<String>) -> Self {
        self.weather.latitude = latitude;
        self.weather.longitude = longitude;
        self.weather.location_label = label.into();
        self
    }

    /// Format the long date in another locale
    pub fn with_locale(mut self, tag: impl Into<String>) -> Self {
        self.date_locale = tag.into();
        self
    }

    pub fn validate(&self) -> KioskResult<()> {
        for task in RenderTask::ALL {
            if self.period(task).is_zero() {
                return Err(KioskError::InvalidConfig(format!(
                    "{:?} period must be positive",
                    task
                )));
            }
        }

        let durations = [
            ("frame interval", self.frame_interval),
            ("idle timeout", self.idle.timeout),
            ("snap debounce", self.snap.debounce),
            ("touch settle delay", self.snap.touch_settle),
            ("animation duration", self.snap.animation_duration),
        ];
        for (name, value) in durations {
            if value.is_zero() {
                return Err(KioskError::InvalidConfig(format!("{} must be positive", name)));
            }
        }

        if !(self.idle.threshold_px > 0.0) {
            return Err(KioskError::InvalidConfig(format!(
                "idle threshold must be positive, got {}",
                self.idle.threshold_px
            )));
        }
        if !(self.snap.dead_zone_px >= 0.0) {
            return Err(KioskError::InvalidConfig(format!(
                "dead zone must not be negative, got {}",
                self.snap.dead_zone_px
            )));
        }

        self.weather.validate()
    }
}
