//! Game session: the engine plus the scheduler that runs its timers.

use std::time::Duration;

use crate::core::RoundConfig;
use crate::rules::{GuessOutcome, RoundEngine};
use crate::timer::{ManualScheduler, Scheduler, TimerEvent};
use crate::view::BoardView;

/// Host-side driver for a single player's game.
///
/// Translates UI events into engine calls and hands any timer the engine
/// requests to its scheduler.
#[derive(Clone, Debug)]
pub struct GameSession<S: Scheduler> {
    engine: RoundEngine,
    scheduler: S,
}

impl<S: Scheduler> GameSession<S> {
    /// Create a session from a configuration and a scheduler.
    pub fn new(config: RoundConfig, scheduler: S) -> Self {
        Self {
            engine: RoundEngine::new(config),
            scheduler,
        }
    }

    /// Get the engine.
    #[must_use]
    pub fn engine(&self) -> &RoundEngine {
        &self.engine
    }

    /// Get the scheduler.
    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Text-change event from the UI.
    pub fn on_text(&mut self, raw: &str) {
        self.engine.set_input(raw);
    }

    /// Confirm event from the UI.
    pub fn on_confirm(&mut self) -> GuessOutcome {
        let outcome = self.engine.submit_guess();
        if let Some(request) = outcome.timer() {
            self.scheduler.schedule(request);
        }
        outcome
    }

    /// Deliver a timer event the scheduler reports as due.
    pub fn on_timer(&mut self, event: TimerEvent) -> bool {
        self.engine.fire(event)
    }

    /// Start over with the same configuration.
    pub fn restart(&mut self) {
        self.scheduler.clear();
        self.engine.restart();
    }

    /// Snapshot of everything the UI draws.
    #[must_use]
    pub fn view(&self) -> BoardView {
        BoardView::from_engine(&self.engine)
    }
}

impl GameSession<ManualScheduler> {
    /// Create a session with a manually driven clock.
    pub fn manual(config: RoundConfig) -> Self {
        Self::new(config, ManualScheduler::new())
    }

    /// Advance the clock and fire every timer that came due.
    ///
    /// Returns true if any event changed the game.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        let mut changed = false;
        for event in self.scheduler.advance(elapsed) {
            changed |= self.engine.fire(event);
        }
        changed
    }
}

impl Default for GameSession<ManualScheduler> {
    fn default() -> Self {
        Self::manual(RoundConfig::default())
    }
}
