use serde::{Deserialize, Serialize};

/// Lightweight authenticated caller identity for cross-crate passing.
///
/// Produced by the auth layer in front of Arena and consumed by `arena-db`,
/// which maps the subject to a stored user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthIdentity {
    /// OAuth subject (`sub` claim) of the caller.
    pub subject: String,
}

impl AuthIdentity {
    #[must_use]
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_subject_only() {
        let json = serde_json::to_string(&AuthIdentity::new("github|1")).unwrap();
        assert_eq!(json, r#"{"subject":"github|1"}"#);
    }
}
