//! Terminal runner for matrix-tetris.
//!
//! crossterm for input, the framebuffer renderer from the `term` crate for
//! output. Logging goes to `--log-file` only since the TUI owns stdout.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use tracing::{debug, info, Level};
use tracing_subscriber::prelude::*;

use matrix_tetris::core::{GameConfig, GameState};
use matrix_tetris::input::{handle_key_event, should_quit};
use matrix_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use matrix_tetris::types::{GameAction, ARENA_HEIGHT, ARENA_WIDTH, DROP_INTERVAL_MS, TICK_MS};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    /// Seed for the piece generator (defaults to the clock)
    #[arg(long)]
    seed: Option<u32>,

    /// Arena width in cells
    #[arg(long, default_value_t = ARENA_WIDTH)]
    width: usize,

    /// Arena height in cells
    #[arg(long, default_value_t = ARENA_HEIGHT)]
    height: usize,

    /// Gravity interval in milliseconds
    #[arg(long, default_value_t = DROP_INTERVAL_MS)]
    drop_interval_ms: u32,

    /// Speed gravity up with the level
    #[arg(long)]
    level_gravity: bool,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path, cli.verbose)?;
    }

    let config = GameConfig {
        width: cli.width,
        height: cli.height,
        drop_interval_ms: cli.drop_interval_ms,
        level_gravity: cli.level_gravity,
    };
    let seed = cli.seed.unwrap_or_else(clock_seed);
    let game = GameState::with_config(config, seed).context("invalid game configuration")?;
    info!(seed, width = cli.width, height = cli.height, "starting game");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, game);

    // Restore the terminal even when the loop failed.
    let _ = term.exit();
    result
}

fn init_logging(path: &Path, verbose: u8) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(level))
        .init();
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, mut game: GameState) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let frame = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        let timeout = frame.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        info!(score = game.score(), lines = game.lines(), "quit");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                        if action == GameAction::Restart {
                            last_tick = Instant::now();
                        }
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Time spent in game over is dropped, not credited to gravity.
        let now = Instant::now();
        let elapsed = now.duration_since(last_tick);
        if elapsed >= frame {
            last_tick = now;
            if !game.game_over() {
                game.tick(elapsed.as_millis().min(u32::MAX as u128) as u32);
            }
        }

        if let Some(event) = game.take_last_event() {
            debug!(
                kind = event.kind.as_str(),
                rows = event.rows_cleared,
                delta = event.score_delta,
                score = game.score(),
                "lock"
            );
        }
    }
}
