//! Two-step weather fetch
//!
//! 1. GET the forecast over https.
//! 2. If that attempt never got a response (status 0), GET the same URL once
//!    over http.
//! 3. Any other non-200 status, or a second transport failure, is reported.
//!
//! Parse failures are reported as `PayloadParse`, separate from transport
//! failures. The fetcher never retries beyond the single downgrade; the next
//! refresh cycle is the next chance.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
pub use reqwest::Url;

use kiosk_core::{KioskError, KioskResult};

use crate::WeatherSnapshot;

/// Outcome of one GET. Status 0 means no response arrived at all.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        HttpResponse {
            status: 200,
            body: body.into(),
        }
    }

    pub fn status(status: u16) -> Self {
        HttpResponse {
            status,
            body: String::new(),
        }
    }

    pub fn transport_failure() -> Self {
        Self::status(0)
    }

    pub fn is_transport_failure(&self) -> bool {
        self.status == 0
    }
}

/// HTTP GET port
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &Url) -> HttpResponse;
}

/// Which request of the strategy is running
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Attempt {
    Secure,
    Insecure,
}

impl Attempt {
    pub const SEQUENCE: [Attempt; 2] = [Attempt::Secure, Attempt::Insecure];

    /// The request URL for this attempt
    pub fn url(self, secure: &Url) -> KioskResult<Url> {
        let mut url = secure.clone();
        let scheme = match self {
            Attempt::Secure => "https",
            Attempt::Insecure => "http",
        };
        url.set_scheme(scheme)
            .map_err(|_| KioskError::InvalidConfig(format!("cannot use {} for {}", scheme, secure)))?;
        Ok(url)
    }
}

/// Decision after one attempt
#[derive(Debug)]
pub enum Assessment {
    /// 200: parse this body
    Accept(String),
    /// Secure attempt got no response: try http
    Downgrade,
    /// Report and stop
    Fail(KioskError),
}

pub fn assess(attempt: Attempt, response: HttpResponse) -> Assessment {
    match (response.status, attempt) {
        (200, _) => Assessment::Accept(response.body),
        (0, Attempt::Secure) => Assessment::Downgrade,
        (0, Attempt::Insecure) => Assessment::Fail(KioskError::TransportError(
            "no response over https or http".to_string(),
        )),
        (status, _) => Assessment::Fail(KioskError::HttpStatus(status)),
    }
}

/// Forecast request configuration
#[derive(Clone, Debug)]
pub struct WeatherConfig {
    /// Forecast endpoint, https
    pub endpoint: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Named timezone for hourly and daily series
    pub timezone: String,
    /// Fixed label shown next to the conditions
    pub location_label: String,
    /// Per-request timeout of the HTTP transport
    pub request_timeout: Duration,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        WeatherConfig {
            endpoint: "https://api.open-meteo.com/v1/forecast".to_string(),
            latitude: 52.52,
            longitude: 13.41,
            timezone: "Europe/Berlin".to_string(),
            location_label: "Berlin".to_string(),
            request_timeout: Duration::from_secs(10),
        }
    }
}

impl WeatherConfig {
    /// Secure request URL with the three field groups
    pub fn request_url(&self) -> KioskResult<Url> {
        let latitude = self.latitude.to_string();
        let longitude = self.longitude.to_string();
        Url::parse_with_params(
            &self.endpoint,
            &[
                ("latitude", latitude.as_str()),
                ("longitude", longitude.as_str()),
                ("current", "temperature_2m,weather_code"),
                ("hourly", "temperature_2m,weather_code"),
                (
                    "daily",
                    "weather_code,temperature_2m_max,temperature_2m_min",
                ),
                ("timezone", self.timezone.as_str()),
            ],
        )
        .map_err(|e| KioskError::InvalidConfig(format!("weather endpoint: {}", e)))
    }

    pub fn validate(&self) -> KioskResult<()> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(KioskError::InvalidConfig(format!(
                "latitude {} out of range",
                self.latitude
            )));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(KioskError::InvalidConfig(format!(
                "longitude {} out of range",
                self.longitude
            )));
        }
        if self.request_timeout.is_zero() {
            return Err(KioskError::InvalidConfig(
                "weather request timeout must be positive".to_string(),
            ));
        }
        self.request_url().map(|_| ())
    }
}

/// Runs the fetch strategy against a transport
#[derive(Clone)]
pub struct WeatherFetcher {
    config: WeatherConfig,
    transport: Arc<dyn Transport>,
}

impl WeatherFetcher {
    pub fn new(config: WeatherConfig, transport: Arc<dyn Transport>) -> Self {
        WeatherFetcher { config, transport }
    }

    pub fn config(&self) -> &WeatherConfig {
        &self.config
    }

    pub async fn fetch(&self) -> KioskResult<WeatherSnapshot> {
        let secure = self.config.request_url()?;

        for attempt in Attempt::SEQUENCE {
            let url = attempt.url(&secure)?;
            let response = self.transport.get(&url).await;

            match assess(attempt, response) {
                Assessment::Accept(body) => {
                    let snapshot = WeatherSnapshot::from_json(&body)?;
                    tracing::info!("weather updated over {}", url.scheme());
                    return Ok(snapshot);
                }
                Assessment::Downgrade => {
                    tracing::warn!("no response from {}, retrying over http", url);
                }
                Assessment::Fail(e) => return Err(e),
            }
        }

        Err(KioskError::TransportError("fetch attempts exhausted".to_string()))
    }
}

/// Short status line shown in place of the conditions
pub fn failure_summary(err: &KioskError) -> String {
    match err {
        KioskError::TransportError(_) => "Keine Verbindung zum Wetterdienst".to_string(),
        KioskError::HttpStatus(status) => {
            format!("Wetterdienst nicht erreichbar (Status {})", status)
        }
        KioskError::PayloadParse(_) => "Wetterdaten fehlerhaft".to_string(),
        _ => "Wetter nicht verfügbar".to_string(),
    }
}
