//! Kiosk Dashboard Demo
//!
//! Runs the full dashboard against the live weather service and the system
//! clock, with a terminal standing in for the touchscreen:
//! - Four 800px pages behind a virtual viewport
//! - Scroll, touch and key input typed as commands
//! - `/show` prints every surface

mod board;
mod ui;

use std::sync::Arc;

use tokio::sync::mpsc;

use kiosk_core::MemoryBoard;
use kiosk_runtime::{init_logging, Dashboard, DashboardConfig, Driver};
use kiosk_time::SystemClock;
use kiosk_weather::{ReqwestTransport, WeatherFetcher};

use board::{SharedBoard, SharedViewport};
use ui::DemoUI;

const PAGE_HEIGHT: f64 = 800.0;
const PAGES: u32 = 4;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(std::env::args().any(|arg| arg == "--json"))?;

    println!("╔════════════════════════════════════════════════╗");
    println!("║         Kiosk Dashboard - Terminal Demo        ║");
    println!("╚════════════════════════════════════════════════╝");
    println!("Type /help for commands.");
    println!();

    let config = DashboardConfig::default();
    let transport = ReqwestTransport::new(config.weather.request_timeout)?;
    let fetcher = WeatherFetcher::new(config.weather.clone(), Arc::new(transport));

    let board = SharedBoard::new(MemoryBoard::full());
    let viewport = SharedViewport::new(PAGE_HEIGHT, PAGES);
    let dashboard = Dashboard::try_new(
        config,
        Box::new(SystemClock),
        board.clone(),
        viewport.clone(),
    )?;

    let (tx, rx) = mpsc::channel(64);
    let driver = tokio::spawn(Driver::new(dashboard, fetcher).run(rx));

    let mut ui = DemoUI::new(board, viewport, tx);
    ui.run().await?;

    let dashboard = driver.await?;
    tracing::info!(
        "stopped after {} snap animations",
        dashboard.snap().stats().animations_started
    );

    println!("Goodbye!");
    Ok(())
}
