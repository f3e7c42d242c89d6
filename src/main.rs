//! Terminal runner (default binary).
//!
//! Single-threaded event loop: block on terminal input until the next tick
//! is due, apply input immediately, then tick. Frames are drawn when a game
//! starts, after every tick, and on resize.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event;

use blockfall::core::GameSnapshot;
use blockfall::input::{map_event, InputEvent};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::{EventLog, GameConfig, Session, Summary};

/// Poll timeout while no game is running (keeps resize handling responsive).
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    let mut config = GameConfig::from_env();
    let args: Vec<String> = std::env::args().skip(1).collect();
    config.apply_args(&args)?;

    let mut log = EventLog::from_path(config.log_path.as_deref())?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, &mut log);

    // Always try to restore terminal state.
    let _ = term.exit();
    log.flush();

    let summary = result?;
    println!(
        "[Blockfall] {} game(s) played, best score {}",
        summary.games, summary.best_score
    );
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &GameConfig, log: &mut EventLog) -> Result<Summary> {
    let mut session = Session::new(config);
    let view = GameView::default();

    let (width, height) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut viewport = Viewport::new(width, height);
    let mut fb = FrameBuffer::new(width, height);
    let mut dirty = true;

    loop {
        if dirty {
            draw(term, &view, viewport, &mut fb, &session.game().snapshot())?;
            dirty = false;
        }

        let timeout = session.timeout(Instant::now()).unwrap_or(IDLE_POLL);
        if event::poll(timeout)? {
            let start = match map_event(event::read()?) {
                Some(InputEvent::Quit) => return Ok(session.summary()),
                Some(InputEvent::Command(command)) => {
                    session.apply_command(command);
                    false
                }
                Some(InputEvent::Start { column, row }) => {
                    view.board_contains(viewport, column, row)
                }
                Some(InputEvent::StartKey) => true,
                Some(InputEvent::Resize { width, height }) => {
                    viewport = Viewport::new(width, height);
                    term.invalidate();
                    dirty = true;
                    false
                }
                None => false,
            };
            if start {
                session.start(log, |snap| draw(term, &view, viewport, &mut fb, snap))?;
            }
        }

        session.poll_tick(Instant::now(), log, |snap| {
            draw(term, &view, viewport, &mut fb, snap)
        })?;
    }
}

fn draw(
    term: &mut TerminalRenderer,
    view: &GameView,
    viewport: Viewport,
    fb: &mut FrameBuffer,
    snap: &GameSnapshot,
) -> Result<()> {
    view.render_into(snap, viewport, fb);
    term.draw_swap(fb)
}
