//! Timestamp sources for activity log entries.

use chrono::{DateTime, Utc};

/// Source of the timestamp stamped on a log entry.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock stuck at one instant.
///
/// Replayed activities are stamped with their own `created_at`, not with the
/// time the log line happens to be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrozenClock(pub DateTime<Utc>);

impl Clock for FrozenClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
