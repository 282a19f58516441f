//! Countdown state machine.
//!
//! Cooperative and single-threaded: the host's render loop drives
//! [`CountdownTimer::tick`] on a fixed short cadence and the timer never
//! blocks or owns a thread. Cancellation is a synchronous state transition.
//!
//! State machine: Idle → Running → {Expired, Idle}. `start` (re)arms the full
//! duration from `now`, `activity` cancels a running countdown, and a tick at
//! or past the deadline reports [`Tick::Expired`] exactly once before
//! returning to Idle.

use std::time::{Duration, Instant};

/// Tick cadence that keeps a progress bar smooth without burning the host's
/// render loop; hosts are free to pick their own.
pub const RECOMMENDED_TICK_INTERVAL: Duration = Duration::from_millis(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Running { deadline: Instant },
}

/// Outcome of a single [`CountdownTimer::tick`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tick {
    /// Nothing armed; redundant ticks while idle are no-ops.
    Idle,
    /// Counting down. `progress` is percent elapsed, `0.0..=100.0`.
    Running { remaining: Duration, progress: f64 },
    /// The deadline passed without intervening activity. Reported once.
    Expired,
}

#[derive(Debug)]
pub struct CountdownTimer {
    duration: Duration,
    phase: Phase,
}

impl CountdownTimer {
    /// `duration` must be nonzero (enforced by session configuration).
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            phase: Phase::Idle,
        }
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running { .. })
    }

    /// Arms the countdown for the full duration from `now`. Calling while
    /// already running restarts the deadline rather than extending it.
    pub fn start(&mut self, now: Instant) {
        self.phase = Phase::Running {
            deadline: now + self.duration,
        };
    }

    /// Cancels a running countdown; a no-op while idle.
    pub fn activity(&mut self) {
        self.phase = Phase::Idle;
    }

    pub fn tick(&mut self, now: Instant) -> Tick {
        match self.phase {
            Phase::Idle => Tick::Idle,
            Phase::Running { deadline } => {
                if now >= deadline {
                    self.phase = Phase::Idle;
                    return Tick::Expired;
                }
                let remaining = deadline - now;
                let fraction = remaining.as_secs_f64() / self.duration.as_secs_f64();
                Tick::Running {
                    remaining,
                    progress: 100.0 * (1.0 - fraction),
                }
            }
        }
    }
}
