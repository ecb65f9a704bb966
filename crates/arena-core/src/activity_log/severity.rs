//! Severity levels and per-kind severity routing.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ActivityLogError;
use crate::enums::ActivityKind;

/// Level an activity is logged at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Debug,
    Info,
    Warn,
    Error,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ActivityLogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(ActivityLogError::InvalidLogSeverity(s.to_string())),
        }
    }
}

/// Maps each activity kind to the severity it is logged at.
///
/// Passed explicitly to `ActivityLogger`; there is no process-wide routing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeverityRouting {
    default: Severity,
    overrides: BTreeMap<ActivityKind, Severity>,
}

impl Default for SeverityRouting {
    fn default() -> Self {
        Self::uniform(Severity::Info)
    }
}

impl SeverityRouting {
    /// Route every kind to the same severity.
    #[must_use]
    pub const fn uniform(default: Severity) -> Self {
        Self {
            default,
            overrides: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_override(mut self, kind: ActivityKind, severity: Severity) -> Self {
        self.overrides.insert(kind, severity);
        self
    }

    /// Build a routing from configuration strings.
    ///
    /// # Errors
    ///
    /// Returns `ActivityLogError::InvalidLogSeverity` for an unrecognized level
    /// and `ActivityLogError::UnknownActivityKind` for an unrecognized kind.
    /// Both are configuration faults and should stop the process at startup.
    pub fn from_config<'a, I>(default: &str, overrides: I) -> Result<Self, ActivityLogError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut routing = Self::uniform(default.parse()?);
        for (kind, level) in overrides {
            let kind: ActivityKind = kind
                .parse()
                .map_err(|_| ActivityLogError::UnknownActivityKind(kind.to_string()))?;
            routing.overrides.insert(kind, level.parse()?);
        }
        Ok(routing)
    }

    #[must_use]
    pub fn for_kind(&self, kind: ActivityKind) -> Severity {
        self.overrides.get(&kind).copied().unwrap_or(self.default)
    }

    #[must_use]
    pub const fn default_severity(&self) -> Severity {
        self.default
    }
}
