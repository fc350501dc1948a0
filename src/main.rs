//! Terminal match-3 runner (default binary).
//!
//! Drag a piece onto a neighbor with the left mouse button to swap them.
//! Matched runs are highlighted in their color. `q`, `Esc`, or Ctrl-C quits.
//!
//! Configuration comes from `MATCH3_*` environment variables (see
//! `tui_match3::core::config`). Set `MATCH3_LOG_PATH` to capture logs; the
//! terminal itself is owned by the renderer, so nothing is logged to it.

use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, warn};

use tui_match3::core::{BoardConfig, GameState, SwapOutcome};
use tui_match3::input::{pointer_action, should_quit, PointerCommand, PointerHandler};
use tui_match3::term::{BoardView, FrameBuffer, TerminalRenderer, Viewport};
use tui_match3::types::TICK_MS;

fn main() -> Result<()> {
    let config = BoardConfig::from_env().context("read MATCH3_* configuration")?;
    init_logging(config.log_path.as_deref())?;

    let game = GameState::new(&config).context("set up board")?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, game, BoardView::new(config.border_size));

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging(path: Option<&str>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("open log file {path}"))?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, mut game: GameState, view: BoardView) -> Result<()> {
    let mut pointer = PointerHandler::default();
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render. The layout doubles as the hit-test for the next input.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let layout = view.render_into(&game.snapshot(), Viewport::new(w, h), &mut fb);
        pointer.set_layout(layout);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!(swaps = game.swaps(), "quit");
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(command) = pointer_action(mouse).and_then(|a| pointer.handle(a)) {
                        apply(&mut game, command);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.tick(TICK_MS);
        }
    }
}

fn apply(game: &mut GameState, command: PointerCommand) {
    match command {
        PointerCommand::BeginSelect(cell) => game.begin_select(cell),
        PointerCommand::DragTo(cell) => game.drag_to(cell),
        PointerCommand::Release => match game.release() {
            SwapOutcome::Swapped { a, b } => {
                info!(%a, %b, matched = game.highlights().matched_count(), "swap");
            }
            SwapOutcome::Rejected(err) => warn!(%err, "swap rejected"),
            SwapOutcome::Cancelled => {}
        },
    }
}
