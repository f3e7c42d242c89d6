//! One terminal session: a game, its ticker and the running summary.
//!
//! The binary owns the terminal and the event loop; this type owns what
//! happens on start and on each due tick (log, draw, re-arm), so the same
//! sequence can be driven headless.

use std::time::{Duration, Instant};

use anyhow::Result;

use crate::core::{GameSnapshot, GameState, TickOutcome, Ticker};
use crate::event_log::{EventLog, LogEvent};
use crate::types::Command;
use crate::GameConfig;

/// Totals printed when the program exits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub games: u32,
    pub best_score: u32,
}

pub struct Session {
    game: GameState,
    ticker: Ticker,
    summary: Summary,
}

impl Session {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            game: GameState::new(config.resolve_seed()),
            ticker: Ticker::from_millis(config.tick_ms),
            summary: Summary::default(),
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    /// How long the event loop may block before the next tick is due.
    pub fn timeout(&self, now: Instant) -> Option<Duration> {
        self.ticker.timeout(now)
    }

    /// Start a game unless one is running.
    ///
    /// The first tick runs immediately, so the first frame drawn already
    /// shows the piece one row down; the ticker is armed after that.
    /// Returns the first tick's outcome, or `None` if nothing started.
    pub fn start(
        &mut self,
        log: &mut EventLog,
        draw: impl FnMut(&GameSnapshot) -> Result<()>,
    ) -> Result<Option<TickOutcome>> {
        if !self.game.start() {
            return Ok(None);
        }
        self.summary.games += 1;
        log.record(LogEvent::GameStarted {
            seed: self.game.game_seed(),
        });
        self.step(log, draw).map(Some)
    }

    /// Run a tick if the ticker is due at `now`.
    pub fn poll_tick(
        &mut self,
        now: Instant,
        log: &mut EventLog,
        draw: impl FnMut(&GameSnapshot) -> Result<()>,
    ) -> Result<Option<TickOutcome>> {
        if !self.ticker.fire(now) {
            return Ok(None);
        }
        self.step(log, draw).map(Some)
    }

    pub fn apply_command(&mut self, command: Command) -> bool {
        self.game.apply_command(command)
    }

    /// Totals including the game in progress.
    pub fn summary(&self) -> Summary {
        Summary {
            best_score: self.summary.best_score.max(self.game.score()),
            ..self.summary
        }
    }

    /// Tick, log, draw, then arm for the next period.
    fn step(
        &mut self,
        log: &mut EventLog,
        mut draw: impl FnMut(&GameSnapshot) -> Result<()>,
    ) -> Result<TickOutcome> {
        let outcome = if self.game.is_running() {
            self.game.tick()
        } else {
            // The first piece of a preset board can collide on spawn.
            TickOutcome::GameOver {
                score: self.game.score(),
            }
        };

        match outcome {
            TickOutcome::Locked { lines_cleared } if lines_cleared > 0 => {
                log.record(LogEvent::LinesCleared {
                    lines: lines_cleared,
                    score: self.game.score(),
                });
            }
            TickOutcome::GameOver { score } => {
                self.summary.best_score = self.summary.best_score.max(score);
                log.record(LogEvent::GameOver {
                    score,
                    lines: self.game.lines(),
                    pieces: self.game.pieces(),
                });
                log.flush();
            }
            _ => {}
        }

        draw(&self.game.snapshot())?;

        // Fixed delay: the next period starts after this tick's work.
        if outcome.continues() {
            self.ticker.arm(Instant::now());
        } else {
            self.ticker.disarm();
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Grid;
    use crate::types::Rgb;

    fn session(seed: u32) -> Session {
        Session::new(&GameConfig {
            seed: Some(seed),
            ..GameConfig::default()
        })
    }

    #[test]
    fn start_applies_first_tick_before_drawing() {
        let mut s = session(3);
        let mut log = EventLog::disabled();
        let mut drawn = Vec::new();

        let outcome = s
            .start(&mut log, |snap| {
                drawn.push(snap.active.map(|a| a.y));
                Ok(())
            })
            .unwrap();

        assert_eq!(outcome, Some(TickOutcome::Fell));
        assert_eq!(drawn, vec![Some(1)]);
        assert_eq!(s.game().active().map(|p| p.y), Some(1));
        assert!(s.ticker().is_armed());
        assert_eq!(s.summary().games, 1);
    }

    #[test]
    fn start_while_running_does_nothing() {
        let mut s = session(3);
        let mut log = EventLog::disabled();
        s.start(&mut log, |_| Ok(())).unwrap();

        let mut draws = 0;
        let again = s
            .start(&mut log, |_| {
                draws += 1;
                Ok(())
            })
            .unwrap();
        assert_eq!(again, None);
        assert_eq!(draws, 0);
        assert_eq!(s.summary().games, 1);
    }

    #[test]
    fn due_tick_runs_and_rearms() {
        let mut s = session(5);
        let mut log = EventLog::disabled();
        s.start(&mut log, |_| Ok(())).unwrap();

        assert_eq!(s.poll_tick(Instant::now(), &mut log, |_| Ok(())).unwrap(), None);

        let later = Instant::now() + s.ticker().period() * 2;
        let outcome = s.poll_tick(later, &mut log, |_| Ok(())).unwrap();
        assert_eq!(outcome, Some(TickOutcome::Fell));
        assert_eq!(s.game().active().map(|p| p.y), Some(2));
        assert!(s.ticker().is_armed());
    }

    #[test]
    fn game_over_disarms_and_records_best_score() {
        let mut s = session(42);
        let mut log = EventLog::disabled();
        s.start(&mut log, |_| Ok(())).unwrap();

        let mut last = None;
        for _ in 0..10_000 {
            let far = Instant::now() + s.ticker().period() * 2;
            last = s.poll_tick(far, &mut log, |_| Ok(())).unwrap();
            if !s.ticker().is_armed() {
                break;
            }
        }

        assert!(matches!(last, Some(TickOutcome::GameOver { .. })));
        assert!(!s.ticker().is_armed());
        assert_eq!(s.summary().best_score, s.game().score());
    }

    #[test]
    fn summary_includes_game_in_progress() {
        let mut s = session(7);
        let mut log = EventLog::disabled();

        // A full bottom row clears on the first lock.
        let grid = Grid::from_ascii(&["##########"], Rgb::new(1, 1, 1));
        assert!(s.game.start_with_grid(grid));
        s.ticker.arm(Instant::now());

        let mut locked = None;
        for _ in 0..40 {
            let far = Instant::now() + s.ticker().period() * 2;
            if let Some(outcome @ TickOutcome::Locked { .. }) =
                s.poll_tick(far, &mut log, |_| Ok(())).unwrap()
            {
                locked = Some(outcome);
                break;
            }
        }

        assert_eq!(locked, Some(TickOutcome::Locked { lines_cleared: 1 }));
        assert!(s.game().is_running());
        assert_eq!(s.summary.best_score, 0);
        assert_eq!(s.summary().best_score, 100);
    }

    #[test]
    fn draw_errors_propagate() {
        let mut s = session(1);
        let mut log = EventLog::disabled();
        let err = s
            .start(&mut log, |_| Err(anyhow::anyhow!("terminal gone")))
            .unwrap_err();
        assert!(err.to_string().contains("terminal gone"));
    }
}
