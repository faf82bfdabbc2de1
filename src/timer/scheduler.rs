//! Timer requests and the schedulers that run them.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// An event the engine asks its host to deliver later.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimerEvent {
    /// Raise the game-over flag for the game started at `epoch`.
    GameOver { epoch: u64 },
}

/// A request to deliver `event` after `delay`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerRequest {
    pub delay: Duration,
    pub event: TimerEvent,
}

impl TimerRequest {
    /// Create a new timer request.
    #[must_use]
    pub const fn new(delay: Duration, event: TimerEvent) -> Self {
        Self { delay, event }
    }
}

/// Executes timer requests on behalf of the engine.
///
/// Implementations deliver each event back through
/// [`RoundEngine::fire`](crate::rules::RoundEngine::fire) once its delay has
/// elapsed. Requests are never cancelled individually; [`Scheduler::clear`]
/// is a best-effort drop of everything pending.
pub trait Scheduler {
    /// Queue a request.
    fn schedule(&mut self, request: TimerRequest);

    /// Drop all pending requests, if the scheduler can.
    fn clear(&mut self) {}
}

/// Records requests without running them. Useful when the caller drives time.
impl Scheduler for Vec<TimerRequest> {
    fn schedule(&mut self, request: TimerRequest) {
        self.push(request);
    }

    fn clear(&mut self) {
        Vec::clear(self);
    }
}

#[derive(Clone, Copy, Debug)]
struct PendingTimer {
    deadline: Duration,
    event: TimerEvent,
}

/// Deterministic scheduler driven by explicit `advance` calls.
///
/// ```
/// use std::time::Duration;
/// use word_reveal::timer::{ManualScheduler, Scheduler, TimerEvent, TimerRequest};
///
/// let mut scheduler = ManualScheduler::new();
/// let event = TimerEvent::GameOver { epoch: 0 };
/// scheduler.schedule(TimerRequest::new(Duration::from_millis(500), event));
///
/// assert!(scheduler.advance(Duration::from_millis(499)).is_empty());
/// assert_eq!(scheduler.advance(Duration::from_millis(1)), vec![event]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    // Rarely more than one timer in flight.
    pending: SmallVec<[PendingTimer; 2]>,
}

impl ManualScheduler {
    /// Create a scheduler at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since creation.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of requests not yet due.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Move the clock forward and return the events now due.
    ///
    /// Events come out in deadline order; ties keep scheduling order.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<TimerEvent> {
        self.now = self.now.saturating_add(elapsed);

        let now = self.now;
        let mut due: Vec<PendingTimer> = Vec::new();
        self.pending.retain(|timer| {
            if timer.deadline <= now {
                due.push(*timer);
                false
            } else {
                true
            }
        });

        due.sort_by_key(|timer| timer.deadline);
        due.into_iter().map(|timer| timer.event).collect()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, request: TimerRequest) {
        self.pending.push(PendingTimer {
            deadline: self.now.saturating_add(request.delay),
            event: request.event,
        });
    }

    fn clear(&mut self) {
        self.pending.clear();
    }
}
