//! Scripted weather transport

use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::Mutex;

use kiosk_weather::{HttpResponse, Transport, Url};

/// Replays queued responses in order, then answers with a fallback.
/// Every requested URL is recorded.
pub struct ScriptedTransport {
    script: Mutex<VecDeque<HttpResponse>>,
    fallback: HttpResponse,
    requests: Mutex<Vec<Url>>,
}

impl ScriptedTransport {
    /// Empty script; every request fails at the transport level
    pub fn new() -> Self {
        Self::with_fallback(HttpResponse::transport_failure())
    }

    /// Empty script with a fixed answer once it runs out
    pub fn with_fallback(fallback: HttpResponse) -> Self {
        ScriptedTransport {
            script: Mutex::new(VecDeque::new()),
            fallback,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue the next responses
    pub fn push(&self, response: HttpResponse) -> &Self {
        self.script.lock().push_back(response);
        self
    }

    pub fn requests(&self) -> Vec<Url> {
        self.requests.lock().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }

    /// Scheme of every request, in order
    pub fn schemes(&self) -> Vec<String> {
        self.requests
            .lock()
            .iter()
            .map(|url| url.scheme().to_string())
            .collect()
    }
}

impl Default for ScriptedTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn get(&self, url: &Url) -> HttpResponse {
        self.requests.lock().push(url.clone());
        let next = self.script.lock().pop_front();
        next.unwrap_or_else(|| self.fallback.clone())
    }
}
