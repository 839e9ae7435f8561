//! Terminal arcade runner (default binary).
//!
//! `tui-arcade tetris` or `tui-arcade snake`. Input comes from crossterm,
//! frames are drawn with the framebuffer renderer, and logs go to a file so
//! they never scribble over the game screen.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use crossterm::event::{self, Event};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use tui_arcade::engine::{update_snake, update_tetris, Engine, EventQueue, SnakeConfig, TetrisConfig};
use tui_arcade::input::{key_event, should_quit};
use tui_arcade::term::{FrameBuffer, SnakeView, TerminalRenderer, TetrisView, Viewport};
use tui_arcade::types::{
    BuiltinEvent, GameTick, SnakeEvent, BOARD_HEIGHT, BOARD_WIDTH, GRAVITY_TICKS, SNAKE_EXTENT,
    SNAKE_UPDATE_RATE, TICK_MS,
};

/// Tetris and Snake in the terminal.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    game: Game,

    /// File that receives log output (filter with RUST_LOG).
    #[arg(long, global = true, default_value = "tui-arcade.log")]
    log_file: PathBuf,
}

#[derive(Subcommand, Debug)]
enum Game {
    /// Falling blocks.
    Tetris {
        /// Seed of the piece shuffle.
        #[arg(long, default_value_t = 1)]
        seed: u32,
        /// Board width in cells.
        #[arg(long, default_value_t = BOARD_WIDTH)]
        width: usize,
        /// Board height in cells.
        #[arg(long, default_value_t = BOARD_HEIGHT)]
        height: usize,
        /// Frames between two gravity steps.
        #[arg(long, default_value_t = GRAVITY_TICKS)]
        gravity_ticks: u64,
    },
    /// Eat apples, don't bite yourself.
    Snake {
        /// Seed of the apple placement.
        #[arg(long, default_value_t = 1)]
        seed: u32,
        /// Frames between two snake moves.
        #[arg(long, default_value_t = SNAKE_UPDATE_RATE)]
        update_rate: u64,
        /// Half-width of the square arena.
        #[arg(long, default_value_t = SNAKE_EXTENT, allow_hyphen_values = true)]
        extent: i32,
    },
}

/// Whether the pump should keep going after reading input
enum Flow {
    Continue,
    Quit,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_file)?;

    // Validate before touching the terminal so errors print normally.
    let result = match args.game {
        Game::Tetris {
            seed,
            width,
            height,
            gravity_ticks,
        } => {
            let config = TetrisConfig {
                width,
                height,
                gravity_ticks,
                seed,
            }
            .validate()?;
            info!(?config, "starting tetris");
            with_terminal(|term| run_tetris(term, config))
        }
        Game::Snake {
            seed,
            update_rate,
            extent,
        } => {
            let config = SnakeConfig {
                extent,
                update_rate,
                seed,
                ..SnakeConfig::default()
            }
            .validate()?;
            info!(?config, "starting snake");
            with_terminal(|term| run_snake(term, config))
        }
    };

    if let Err(err) = &result {
        error!(error = %err, "exited with error");
    }
    result
}

fn init_logging(path: &Path) -> Result<()> {
    let log_file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!("cannot install log subscriber: {err}"))
}

fn with_terminal(run: impl FnOnce(&mut TerminalRenderer) -> Result<()>) -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run_tetris(term: &mut TerminalRenderer, config: TetrisConfig) -> Result<()> {
    let view = TetrisView::default();
    let game = config.new_game();
    run_loop(
        term,
        game,
        |game, viewport, fb| view.render_into(&game.snapshot(), viewport, fb),
        |game, batch: Vec<BuiltinEvent>, _| update_tetris(game, batch, &config),
    )
}

fn run_snake(term: &mut TerminalRenderer, config: SnakeConfig) -> Result<()> {
    let view = SnakeView::default();
    let model = config.new_model();
    run_loop(
        term,
        model,
        |model, viewport, fb| view.render_into(&model.snapshot(), viewport, fb),
        |model, batch: Vec<SnakeEvent>, publisher: &mut EventQueue<SnakeEvent>| {
            update_snake(model, batch, publisher)
        },
    )
}

/// Render, read input until the next frame is due, then fold the frame's batch
fn run_loop<S, E>(
    term: &mut TerminalRenderer,
    mut state: S,
    render: impl Fn(&S, Viewport, &mut FrameBuffer),
    mut update: impl FnMut(S, Vec<E>, &mut EventQueue<E>) -> S,
) -> Result<()>
where
    E: From<GameTick> + From<BuiltinEvent>,
{
    let started = Instant::now();
    let mut engine: Engine<E> = Engine::new(0);
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(TICK_MS);
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        render(&state, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if let Flow::Quit = pump_input(term, &mut engine, timeout)? {
            info!(frames = engine.ticks(), "quit");
            return Ok(());
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            let batch = engine.frame(started.elapsed().as_millis() as u64);
            state = update(state, batch, engine.publisher());
        }
    }
}

fn pump_input<E>(term: &mut TerminalRenderer, engine: &mut Engine<E>, timeout: Duration) -> Result<Flow>
where
    E: From<GameTick> + From<BuiltinEvent>,
{
    if !event::poll(timeout)? {
        return Ok(Flow::Continue);
    }
    match event::read()? {
        Event::Key(key) => {
            if should_quit(key) {
                return Ok(Flow::Quit);
            }
            if let Some(event) = key_event(key) {
                engine.publish(E::from(event));
            }
        }
        Event::Resize(..) => term.invalidate(),
        _ => {}
    }
    Ok(Flow::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_logging_init_reports_an_error() {
        let path = std::env::temp_dir().join(format!("tui-arcade-{}.log", std::process::id()));
        init_logging(&path).unwrap();

        let err = init_logging(&path).unwrap_err();
        assert!(err.to_string().contains("cannot install log subscriber"));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn cli_parses_game_options() {
        let args = Args::try_parse_from(["tui-arcade", "snake", "--extent", "7", "--seed", "3"])
            .unwrap();
        assert!(matches!(
            args.game,
            Game::Snake {
                extent: 7,
                seed: 3,
                ..
            }
        ));
        assert_eq!(args.log_file, PathBuf::from("tui-arcade.log"));
    }
}
