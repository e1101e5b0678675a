mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event},
    terminal, ExecutableCommand,
};
use rand::thread_rng;
use tracing_subscriber::filter::EnvFilter;

use arcade_shooter::compute::{init_state, snapshot, update_game};
use arcade_shooter::config::GameConfig;
use arcade_shooter::entities::GameState;
use arcade_shooter::input::{apply_input, Control, InputEvent};

use display::Viewport;

#[derive(Parser, Debug)]
#[command(name = "arcade_shooter")]
#[command(about = "Fixed-pool arcade shooter in the terminal")]
struct Args {
    /// TOML file overriding the default game settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Frame budget in milliseconds
    #[arg(long, default_value_t = 16)]
    frame_ms: u64,

    /// Write logs to this file (the terminal belongs to the game)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file: {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::sink)
                .init();
        }
    }
    Ok(())
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until a quit key arrives. Once the player is out of lives the
/// simulation freezes and the game-over overlay stays up.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameState,
    rx: &mpsc::Receiver<Event>,
    frame_budget: Duration,
) -> Result<()> {
    let mut rng = thread_rng();
    let mut announced_game_over = false;

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        let mut events = Vec::new();
        while let Ok(ev) = rx.try_recv() {
            if let Event::Key(key) = ev {
                events.extend(InputEvent::from_key(key));
            }
        }

        let game_over = state.out_of_lives();
        if game_over {
            // Only quitting is meaningful now.
            if events.contains(&InputEvent::Quit) {
                return Ok(());
            }
            if !announced_game_over {
                tracing::info!(score = state.player.score, frame = state.frame, "game over");
                announced_game_over = true;
            }
        } else {
            if apply_input(state, events) == Control::Quit {
                tracing::info!(score = state.player.score, frame = state.frame, "quit");
                return Ok(());
            }
            update_game(state, &mut rng);
        }

        let (cols, rows) = terminal::size().context("failed to query terminal size")?;
        let view = Viewport::new(
            cols,
            rows,
            state.config.screen_width,
            state.config.screen_height,
        );
        display::render(out, &view, &snapshot(state), state.out_of_lives())
            .context("failed to draw frame")?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_budget {
            thread::sleep(frame_budget - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_ref())?;

    let config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    tracing::info!(?config, "starting");

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode().context("failed to enable raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(err) => {
                tracing::warn!("input thread stopped: {err}");
                break;
            }
        }
    });

    let mut state = init_state(config);
    let result = game_loop(
        &mut out,
        &mut state,
        &rx,
        Duration::from_millis(args.frame_ms),
    );

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    println!(
        "Final score: {}  (lives {}, frames {})",
        state.player.score, state.player.lives, state.frame
    );
    result
}
