//! Terminal front end for the countdown timer
//!
//! Renders the tick stream as clock labels and maps stdin commands and
//! shutdown signals to session intents.

use anyhow::{anyhow, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use tickdown::{
    config::Config,
    format::{clock_label, digits_to_millis},
    screen::{Navigator, TimerScreen},
    state::TimerState,
    store::{DurationStore, JsonFileStore},
    utils::shutdown_signal,
};

/// For a single-screen terminal app, leaving the timer screen means the
/// process is done.
struct ExitNavigator;

impl Navigator for ExitNavigator {
    fn leave_timer(&mut self) {
        info!("leaving timer screen");
    }
}

enum UiEvent {
    Tick(Option<u64>),
    Command(String),
    StdinClosed,
    Shutdown,
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("tickdown={}", config.log_level()))
        .init();

    let mut store = JsonFileStore::new(&config.store);

    if let Some(digits) = &config.digits {
        let ms = digits_to_millis(digits).map_err(|e| anyhow!(e))?;
        store.set_configured_ms(ms).map_err(|e| anyhow!(e))?;
        info!("configured duration set to {} ms", ms);
    }

    let screen = TimerScreen::enter(store, ExitNavigator).map_err(|e| anyhow!(e))?;
    let Some(mut screen) = screen else {
        println!("No duration configured. Pass digits, e.g. `tickdown 130` for 1m30s.");
        return Ok(());
    };

    println!(
        "Counting down {}. Commands: p = pause/resume, d = dismiss.",
        clock_label(screen.session().configured_ms() / 1_000)
    );
    screen.on_action();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;

    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        let running = screen.state().is_running();

        let event = tokio::select! {
            tick = screen.next_tick(), if running => UiEvent::Tick(tick),

            line = lines.next_line(), if stdin_open => match line {
                Ok(Some(line)) => UiEvent::Command(line),
                Ok(None) | Err(_) => UiEvent::StdinClosed,
            },

            _ = &mut shutdown => UiEvent::Shutdown,
        };

        match event {
            UiEvent::Tick(Some(0)) => {
                println!("{}", clock_label(0));
                println!("Time's up!");
            }
            UiEvent::Tick(Some(seconds)) => println!("{}", clock_label(seconds)),
            UiEvent::Tick(None) => {}

            UiEvent::Command(command) => match command.trim() {
                "p" => {
                    screen.on_action();
                    match screen.state() {
                        TimerState::Started => println!("Running."),
                        TimerState::Paused => println!(
                            "Paused at {}.",
                            clock_label(screen.session().remaining_ms() / 1_000)
                        ),
                        TimerState::Stopped => {}
                    }
                }
                "d" => {
                    screen.dismiss().map_err(|e| anyhow!(e))?;
                    println!("Timer dismissed.");
                    return Ok(());
                }
                "" => {}
                other => println!("Unknown command: {other:?}"),
            },

            UiEvent::StdinClosed => stdin_open = false,

            UiEvent::Shutdown => {
                screen.leave();
                return Ok(());
            }
        }
    }
}
