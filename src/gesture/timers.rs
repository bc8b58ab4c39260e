use std::time::{Duration, Instant};

/// Single-shot, cancellable deadline. Polled from the event loop tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OneShotTimer {
    deadline: Option<Instant>,
}

impl OneShotTimer {
    /// Arm (or re-arm) the timer to fire `delay` after `now`
    pub fn arm(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// True exactly once, on the first poll at or after the deadline
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Time left before firing, if armed
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_duration_since(now))
    }
}

/// The timers one bubble gesture can have outstanding
#[derive(Debug, Clone, Default)]
pub struct Timers {
    pub long_press: OneShotTimer,
    /// Preview display only; never drives a state transition
    pub hover_intent: OneShotTimer,
}

impl Timers {
    pub fn cancel_all(&mut self) {
        self.long_press.cancel();
        self.hover_intent.cancel();
    }

    /// Earliest pending deadline, used to size the event-loop poll timeout
    pub fn next_wakeup(&self, now: Instant) -> Option<Duration> {
        [
            self.long_press.remaining(now),
            self.hover_intent.remaining(now),
        ]
        .into_iter()
        .flatten()
        .min()
    }
}
