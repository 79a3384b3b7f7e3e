//! Demo UI - line-based terminal front end

use std::io::{self, Write};

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use kiosk_core::{Interaction, MemoryBoard, SurfaceId};
use kiosk_runtime::Input;

use crate::board::{SharedBoard, SharedViewport};

/// Pixels moved by one `j`/`k`
const STEP_PX: f64 = 120.0;

pub struct DemoUI {
    board: SharedBoard,
    viewport: SharedViewport,
    inputs: mpsc::Sender<Input>,
}

impl DemoUI {
    pub fn new(board: SharedBoard, viewport: SharedViewport, inputs: mpsc::Sender<Input>) -> Self {
        Self {
            board,
            viewport,
            inputs,
        }
    }

    /// Read commands until `/quit` or end of input
    pub async fn run(&mut self) -> io::Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        prompt()?;
        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            let mut parts = line.splitn(2, ' ');
            let cmd = parts.next().unwrap_or("");
            let arg = parts.next().unwrap_or("");

            let input = match cmd {
                "" => None,
                "/quit" | "/q" => break,
                "/show" | "/s" => {
                    self.show();
                    None
                }
                "/help" | "/h" => {
                    show_help();
                    None
                }
                "j" => Some(Input::ScrollBy(STEP_PX)),
                "k" => Some(Input::ScrollBy(-STEP_PX)),
                "/scroll" => match arg.parse::<f64>() {
                    Ok(delta) => Some(Input::ScrollBy(delta)),
                    Err(_) => {
                        println!("Usage: /scroll <pixels>");
                        None
                    }
                },
                "/touch" => Some(Input::Interaction(Interaction::TouchEnd)),
                "/tap" => Some(Input::Interaction(Interaction::Click)),
                "/move" => Some(Input::Interaction(Interaction::PointerMove)),
                _ => Some(Input::Interaction(Interaction::KeyDown)),
            };

            if let Some(input) = input {
                if self.inputs.send(input).await.is_err() {
                    println!("Dashboard stopped");
                    break;
                }
            }
            prompt()?;
        }

        // Receiver may already be gone
        let _ = self.inputs.send(Input::Shutdown).await;
        Ok(())
    }

    fn show(&self) {
        let board = self.board.snapshot();
        let (offset, page, pages) = self.viewport.position();

        println!("┌──────────────────────────────────────────────┐");
        println!(
            "│ {} {}   {}",
            text(&board, SurfaceId::DigitalTimeMain),
            text(&board, SurfaceId::DigitalTimeSeconds),
            text(&board, SurfaceId::DateDisplay)
        );
        println!(
            "│ hands  h {:>6.1}°  m {:>6.1}°  s {:>6.1}°",
            board.rotation(SurfaceId::HourHand).unwrap_or(0.0),
            board.rotation(SurfaceId::MinuteHand).unwrap_or(0.0),
            board.rotation(SurfaceId::SecondHand).unwrap_or(0.0)
        );
        println!(
            "│ San Juan {}  New York {}  Los Angeles {}  Dubai {}",
            text(&board, SurfaceId::TimeSanJuan),
            text(&board, SurfaceId::TimeNewYork),
            text(&board, SurfaceId::TimeLosAngeles),
            text(&board, SurfaceId::TimeDubai)
        );
        println!("├──────────────────────────────────────────────┤");
        println!("│ {}", text(&board, SurfaceId::CalendarMonth));
        for week in board.tiles(SurfaceId::CalendarDays).chunks(7) {
            let cells: Vec<String> = week
                .iter()
                .map(|tile| {
                    let day = tile.lines.first().map(String::as_str).unwrap_or("");
                    if tile.has_class("today") {
                        format!("[{:>2}]", day)
                    } else {
                        format!(" {:>2} ", day)
                    }
                })
                .collect();
            println!("│ {}", cells.join(""));
        }
        println!("├──────────────────────────────────────────────┤");
        println!(
            "│ {} {} {}  {}",
            text(&board, SurfaceId::WeatherLocation),
            text(&board, SurfaceId::WeatherIcon),
            text(&board, SurfaceId::WeatherTemp),
            text(&board, SurfaceId::WeatherDesc)
        );
        for tile in board.tiles(SurfaceId::HourlyForecast) {
            println!("│   {}", tile.lines.join("  "));
        }
        for tile in board.tiles(SurfaceId::DailyForecast) {
            println!("│   {}", tile.lines.join("  "));
        }
        println!("└──────────────────────────────────────────────┘");
        println!("page {}/{} at {:.0}px", page + 1, pages, offset);
    }
}

fn text(board: &MemoryBoard, id: SurfaceId) -> &str {
    board.text(id).unwrap_or("--")
}

fn prompt() -> io::Result<()> {
    print!("> ");
    io::stdout().flush()
}

fn show_help() {
    println!("╔════════════════════════════════════════════════╗");
    println!("║  Commands:                                     ║");
    println!("║    j / k          - Scroll down / up 120px     ║");
    println!("║    /scroll <px>   - Scroll by any amount       ║");
    println!("║    /touch         - Lift a finger (touch-end)  ║");
    println!("║    /tap           - Click                      ║");
    println!("║    /move          - Pointer movement           ║");
    println!("║    /show          - Print the dashboard        ║");
    println!("║    /quit          - Exit                       ║");
    println!("║  Anything else counts as a key press.          ║");
    println!("╚════════════════════════════════════════════════╝");
}
