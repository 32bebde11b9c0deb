//! TETRIS STACK - queue and reserve piece management
//!
//! A console simulator for the "upcoming pieces" queue and the reserve stack
//! of a falling-block game.

mod bag;
mod error;
mod game;
mod menu;
mod piece;
mod queue;
mod score;
mod settings;
mod stack;
mod tetromino;
mod ui;

use bag::KindSource;
use game::Game;
use menu::{MenuChoice, menu_text};
use settings::Settings;
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

/// Get the temp directory for session logs, creating it if needed
fn log_dir() -> std::path::PathBuf {
    let dir = std::env::temp_dir().join("tetris-stack");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

fn main() -> io::Result<()> {
    // Generate session ID for this instance
    let session_id: u32 = rand::random();

    let dir = log_dir();
    let log_file = format!("{:08x}.log", session_id);

    // Log to a file so output never interleaves with the prompt
    let file_appender = tracing_appender::rolling::never(&dir, &log_file);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tetris_stack=debug")),
        )
        .with_ansi(false)
        .init();

    tracing::info!(
        "TETRIS STACK starting up, session={:08x}, log={}",
        session_id,
        dir.join(&log_file).display()
    );

    let settings = Settings::load();

    let mut game = match settings.generator.seed {
        Some(seed) => {
            tracing::info!("Using fixed generator seed {}", seed);
            Game::with_seed(seed)
        }
        None => Game::new(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = run_app(&mut stdin.lock(), &mut stdout.lock(), &mut game, &settings);

    match &result {
        Ok(()) => tracing::info!("Session ended: {:?}", game.stats),
        Err(e) => tracing::error!("Session aborted: {}", e),
    }
    result
}

/// The menu loop: show state, read a command, apply it. Returns when the
/// player quits or input runs out.
fn run_app<S: KindSource>(
    input: &mut impl BufRead,
    out: &mut impl Write,
    game: &mut Game<S>,
    settings: &Settings,
) -> io::Result<()> {
    let display = &settings.display;
    ui::render_banner(out)?;

    let mut line = String::new();
    loop {
        ui::render_state(out, game, display)?;
        write!(out, "{}Choice: ", menu_text())?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            tracing::info!("End of input, quitting");
            writeln!(out)?;
            break;
        }

        match MenuChoice::parse(&line) {
            Ok(MenuChoice::Act(action)) => {
                let report = game.apply(action);
                ui::render_report(out, &report, display)?;
            }
            Ok(MenuChoice::Quit) => break,
            Err(e) => {
                tracing::debug!("Rejected menu input: {}", e);
                game.stats.record_invalid_input();
                writeln!(out, "{}", e)?;
            }
        }
    }

    writeln!(out, "Shutting down... Thanks for playing!")?;
    writeln!(out, "{}", game.stats.summary())?;
    out.flush()
}
