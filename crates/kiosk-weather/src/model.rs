//! Forecast snapshot model

use serde::{Deserialize, Serialize};

use kiosk_core::{KioskError, KioskResult};

/// Parsed response of one successful fetch.
/// Replaced wholesale on every fetch, never merged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub current: CurrentConditions,
    pub hourly: HourlySeries,
    pub daily: DailySeries,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    #[serde(rename = "temperature_2m")]
    pub temperature: f64,
    pub weather_code: u16,
}

/// Hourly series, parallel arrays indexed by slot
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HourlySeries {
    /// Local times, "YYYY-MM-DDTHH:MM"
    pub time: Vec<String>,
    #[serde(rename = "temperature_2m")]
    pub temperature: Vec<f64>,
    pub weather_code: Vec<u16>,
}

/// Daily series, parallel arrays indexed by day
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DailySeries {
    /// Local dates, "YYYY-MM-DD"
    pub time: Vec<String>,
    pub weather_code: Vec<u16>,
    #[serde(rename = "temperature_2m_max")]
    pub temp_max: Vec<f64>,
    #[serde(rename = "temperature_2m_min")]
    pub temp_min: Vec<f64>,
}

impl HourlySeries {
    /// Slots with a value in every array
    pub fn len(&self) -> usize {
        self.time
            .len()
            .min(self.temperature.len())
            .min(self.weather_code.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DailySeries {
    /// Days with a value in every array
    pub fn len(&self) -> usize {
        self.time
            .len()
            .min(self.weather_code.len())
            .min(self.temp_max.len())
            .min(self.temp_min.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl WeatherSnapshot {
    /// Parse a response body. Unknown fields are ignored.
    pub fn from_json(body: &str) -> KioskResult<Self> {
        serde_json::from_str(body).map_err(|e| KioskError::PayloadParse(e.to_string()))
    }
}

/// Temperature as displayed, rounded half up: "12°"
pub fn format_temperature(celsius: f64) -> String {
    format!("{}°", (celsius + 0.5).floor() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORECAST: &str = include_str!("../fixtures/forecast.json");

    #[test]
    fn test_parse_forecast() {
        let snapshot = WeatherSnapshot::from_json(FORECAST).unwrap();

        assert_eq!(snapshot.current.temperature, 12.4);
        assert_eq!(snapshot.current.weather_code, 3);
        assert_eq!(snapshot.hourly.len(), 12);
        assert_eq!(snapshot.hourly.time[0], "2026-10-19T12:00");
        assert_eq!(snapshot.daily.len(), 7);
        assert_eq!(snapshot.daily.temp_min[5], -0.6);
    }

    #[test]
    fn test_parse_failure_is_distinct() {
        let err = WeatherSnapshot::from_json("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, KioskError::PayloadParse(_)));

        let err = WeatherSnapshot::from_json(r#"{"current": {"temperature_2m": 1.0}}"#).unwrap_err();
        assert!(matches!(err, KioskError::PayloadParse(_)));
    }

    #[test]
    fn test_ragged_series_use_shortest_array() {
        let hourly = HourlySeries {
            time: vec!["2026-10-19T12:00".into(), "2026-10-19T13:00".into()],
            temperature: vec![10.0],
            weather_code: vec![0, 1],
        };
        assert_eq!(hourly.len(), 1);
        assert!(DailySeries::default().is_empty());
    }

    #[test]
    fn test_format_temperature() {
        assert_eq!(format_temperature(12.4), "12°");
        assert_eq!(format_temperature(12.5), "13°");
        assert_eq!(format_temperature(-0.4), "0°");
        assert_eq!(format_temperature(-0.6), "-1°");
        assert_eq!(format_temperature(-2.5), "-2°");
    }
}
