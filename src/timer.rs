//! Per-question countdown
//!
//! A [`Countdown`] tracks the deadline of the question currently on
//! screen. It carries no clock of its own; callers start it when a
//! question appears, poll [`Countdown::remaining`] for display, and report
//! expiry to the game as a timeout. Built on [`web_time`] so the same
//! code runs natively and on WebAssembly.

use std::time::Duration;

use web_time::SystemTime;

/// Countdown deadline for the question currently on screen
///
/// A default countdown is disarmed. Starting with a zero duration keeps it
/// disarmed, which is how the untimed setting is expressed.
#[derive(Debug, Default, Clone)]
pub struct Countdown {
    deadline: Option<SystemTime>,
}

impl Countdown {
    /// Arms the countdown to expire after `duration` from now
    ///
    /// A zero duration disarms instead, so an untimed game never expires.
    /// Restarting an armed countdown replaces the previous deadline.
    pub fn start(&mut self, duration: Duration) {
        self.deadline = if duration.is_zero() {
            None
        } else {
            Some(SystemTime::now() + duration)
        };
    }

    /// Disarms the countdown; idempotent
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Returns whether a deadline is armed, expired or not
    pub fn is_running(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time left until the deadline, zero once passed or disarmed
    pub fn remaining(&self) -> Duration {
        self.deadline.map_or(Duration::ZERO, |deadline| {
            deadline
                .duration_since(SystemTime::now())
                .unwrap_or(Duration::ZERO)
        })
    }

    /// Returns whether an armed deadline has passed
    ///
    /// A disarmed countdown never expires.
    pub fn is_expired(&self) -> bool {
        self.deadline
            .is_some_and(|deadline| SystemTime::now() >= deadline)
    }
}
