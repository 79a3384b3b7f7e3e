//! reqwest-backed transport

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};

use kiosk_core::{KioskError, KioskResult};

use crate::{HttpResponse, Transport};

/// HTTP transport over a shared reqwest client.
/// Connection, TLS and timeout errors all surface as status 0.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> KioskResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| KioskError::TransportError(e.to_string()))?;
        Ok(ReqwestTransport { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &Url) -> HttpResponse {
        let response = match self.client.get(url.clone()).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("weather request to {} failed: {}", url, e);
                return HttpResponse::transport_failure();
            }
        };

        let status = response.status().as_u16();
        match response.text().await {
            Ok(body) => HttpResponse { status, body },
            Err(e) => {
                tracing::warn!("weather response from {} unreadable: {}", url, e);
                HttpResponse::transport_failure()
            }
        }
    }
}
