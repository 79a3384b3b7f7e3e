//! Tokio driver loop
//!
//! One task owns the dashboard and its timer queue. It sleeps until the next
//! timer deadline, the next input, or the next weather result, and handles
//! exactly one of them at a time. Weather fetches run as spawned tasks and
//! re-enter the loop through a channel.

use tokio::sync::mpsc;
use tokio::time::Instant;

use kiosk_core::{
    Interaction, KioskError, KioskResult, MonoTime, ScrollSurface, SurfaceTree, TimerQueue,
};
use kiosk_weather::{WeatherFetcher, WeatherSnapshot};

use crate::{Dashboard, Effect};

/// Input from the front end
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Input {
    Interaction(Interaction),
    /// User gesture moving the viewport by this many pixels
    ScrollBy(f64),
    Shutdown,
}

type WeatherResult = KioskResult<WeatherSnapshot>;

pub struct Driver<B, V> {
    dashboard: Dashboard<B, V>,
    fetcher: WeatherFetcher,
    queue: TimerQueue,
    origin: Instant,
    fetch_in_flight: bool,
}

impl<B: SurfaceTree, V: ScrollSurface> Driver<B, V> {
    pub fn new(dashboard: Dashboard<B, V>, fetcher: WeatherFetcher) -> Self {
        let queue = TimerQueue::with_frame_interval(dashboard.config().frame_interval);
        Driver {
            dashboard,
            fetcher,
            queue,
            origin: Instant::now(),
            fetch_in_flight: false,
        }
    }

    /// Run until `Shutdown` or until every input sender is dropped.
    /// Returns the dashboard in its final state.
    pub async fn run(mut self, mut inputs: mpsc::Receiver<Input>) -> Dashboard<B, V> {
        let (weather_tx, mut weather_rx) = mpsc::channel::<WeatherResult>(1);

        self.sync_clock();
        if let Some(effect) = self.dashboard.start(&mut self.queue) {
            self.apply_effect(effect, &weather_tx);
        }

        loop {
            let deadline = self
                .queue
                .next_deadline()
                .map(|t| self.origin + t.as_duration());

            tokio::select! {
                _ = sleep_until(deadline) => {
                    self.fire_due(&weather_tx);
                }
                input = inputs.recv() => match input {
                    Some(Input::Interaction(event)) => {
                        self.sync_clock();
                        self.dashboard.on_interaction(event, &mut self.queue);
                    }
                    Some(Input::ScrollBy(delta)) => {
                        self.sync_clock();
                        self.dashboard.scroll_by(delta, &mut self.queue);
                    }
                    Some(Input::Shutdown) | None => break,
                },
                Some(result) = weather_rx.recv() => {
                    self.fetch_in_flight = false;
                    self.dashboard.apply_weather(result);
                }
            }
        }

        tracing::info!("driver stopped");
        self.dashboard
    }

    fn sync_clock(&mut self) {
        self.queue
            .advance_to(MonoTime::from_duration(self.origin.elapsed()));
    }

    fn fire_due(&mut self, weather_tx: &mpsc::Sender<WeatherResult>) {
        self.sync_clock();
        while let Some(fired) = self.queue.pop_due() {
            if let Some(effect) = self.dashboard.on_timer(fired, &mut self.queue) {
                self.apply_effect(effect, weather_tx);
            }
        }
    }

    fn apply_effect(&mut self, effect: Effect, weather_tx: &mpsc::Sender<WeatherResult>) {
        match effect {
            Effect::FetchWeather => self.spawn_fetch(weather_tx),
        }
    }

    fn spawn_fetch(&mut self, weather_tx: &mpsc::Sender<WeatherResult>) {
        if self.fetch_in_flight {
            tracing::debug!("weather fetch still running, refresh skipped");
            return;
        }
        self.fetch_in_flight = true;

        let fetcher = self.fetcher.clone();
        let tx = weather_tx.clone();
        tokio::spawn(async move {
            // Always send a result, panicked fetch included; only a result
            // clears `fetch_in_flight`.
            let result = match tokio::spawn(async move { fetcher.fetch().await }).await {
                Ok(result) => result,
                Err(e) => {
                    tracing::error!("weather fetch task failed: {}", e);
                    Err(KioskError::TransportError(format!(
                        "fetch task failed: {}",
                        e
                    )))
                }
            };
            if tx.send(result).await.is_err() {
                tracing::debug!("driver gone, weather result dropped");
            }
        });
    }
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(at) => tokio::time::sleep_until(at).await,
        None => std::future::pending::<()>().await,
    }
}
