//! Pending-input state machine for search-as-you-type.
//!
//! Keystrokes land in `Pending` and restart the quiet period. Polling after
//! the deadline moves the value to `Committed`. Time is passed in by the
//! caller so the machine never sleeps on its own.

use std::time::{Duration, Instant};

/// Debouncer state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DebounceState {
    /// Nothing typed yet
    Idle,
    /// Waiting for the quiet period to elapse
    Pending { value: String, deadline: Instant },
    /// Last value that survived the quiet period
    Committed(String),
}

/// Coalesces rapid input into committed values.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    state: DebounceState,
    committed: Option<String>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            state: DebounceState::Idle,
            committed: None,
        }
    }

    pub fn state(&self) -> &DebounceState {
        &self.state
    }

    /// Most recently committed value, kept while new input is pending.
    pub fn committed(&self) -> Option<&str> {
        self.committed.as_deref()
    }

    /// Record new input and restart the quiet period.
    pub fn input(&mut self, value: impl Into<String>, now: Instant) {
        self.state = DebounceState::Pending {
            value: value.into(),
            deadline: now + self.delay,
        };
    }

    /// When the pending value will commit, if any.
    pub fn deadline(&self) -> Option<Instant> {
        match &self.state {
            DebounceState::Pending { deadline, .. } => Some(*deadline),
            _ => None,
        }
    }

    /// Commit the pending value if its deadline has passed.
    ///
    /// Returns the value only on the poll that commits it.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let DebounceState::Pending { value, deadline } = &self.state else {
            return None;
        };
        if now < *deadline {
            return None;
        }

        let value = value.clone();
        self.state = DebounceState::Committed(value.clone());
        self.committed = Some(value.clone());
        Some(value)
    }
}
