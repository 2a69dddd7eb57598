//! Request-scoped context for the create path.

use std::time::{Duration, Instant};

/// Deadline information accompanying an inbound call.
///
/// The create path accepts this context but does not act on it: once a
/// create begins it runs to completion, whether or not the deadline has
/// passed or the caller has gone away. It is carried explicitly so that the
/// absence of timeout enforcement is visible at every call site.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestContext {
    deadline: Option<Instant>,
}

impl RequestContext {
    /// Context with no deadline.
    pub fn background() -> Self {
        Self::default()
    }

    /// Context whose deadline is `timeout` from now.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            deadline: Instant::now().checked_add(timeout),
        }
    }

    /// Deadline supplied by the caller, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Whether the caller's deadline has already passed.
    pub fn is_expired(&self) -> bool {
        self.deadline
            .map(|deadline| Instant::now() >= deadline)
            .unwrap_or(false)
    }
}
