//! Destinations for rendered activity log entries.

use std::fmt;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::severity::Severity;

/// Value attached to a log field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Str(String),
    Int(i64),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogField {
    pub key: &'static str,
    pub value: FieldValue,
}

/// A fully rendered activity log line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub severity: Severity,
    pub message: String,
    pub fields: Vec<LogField>,
}

impl LogEntry {
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|f| f.key == key).map(|f| &f.value)
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        match self.field(key) {
            Some(FieldValue::Str(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    fn int_field(&self, key: &str) -> Option<i64> {
        match self.field(key) {
            Some(FieldValue::Int(n)) => Some(*n),
            _ => None,
        }
    }

    /// Field keys in emission order.
    #[must_use]
    pub fn keys(&self) -> Vec<&'static str> {
        self.fields.iter().map(|f| f.key).collect()
    }
}

/// Accepts rendered entries.
pub trait LogSink: Send + Sync {
    fn emit(&self, entry: &LogEntry);
}

/// Forwards entries to `tracing` on the `arena::activity` target.
///
/// The entry timestamp travels as the `ts` field. Absent relation fields are
/// recorded as `None` and omitted by formatters.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn emit(&self, entry: &LogEntry) {
        let ts = entry.timestamp.to_rfc3339();
        let author = entry.str_field("author");
        let user = entry.str_field("user");
        let agent = entry.str_field("agent");
        let season = entry.str_field("season");
        let team = entry.str_field("team");
        let season_challenge = entry.str_field("season-challenge");
        let activity = entry.int_field("activity");
        let message = entry.message.as_str();

        macro_rules! emit_at {
            ($level:expr) => {
                tracing::event!(
                    target: "arena::activity",
                    $level,
                    ts = %ts,
                    author,
                    user,
                    agent,
                    season,
                    team,
                    "season-challenge" = season_challenge,
                    activity,
                    "{message}"
                )
            };
        }

        match entry.severity {
            Severity::Debug => emit_at!(tracing::Level::DEBUG),
            Severity::Info => emit_at!(tracing::Level::INFO),
            Severity::Warn => emit_at!(tracing::Level::WARN),
            Severity::Error => emit_at!(tracing::Level::ERROR),
        }
    }
}

/// Keeps entries in memory, for tests and for rendering as JSON.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<LogEntry>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything emitted so far.
    #[must_use]
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }
}

impl LogSink for MemorySink {
    fn emit(&self, entry: &LogEntry) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(entry.clone());
        }
    }
}
