//! Cross-cutting error types for Arena.
//!
//! Domain-specific errors (`DatabaseError`, `PreferencesError`, `HashError`)
//! live next to the code that raises them. Everything converges on `anyhow`
//! in `arena-cli`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (unknown enum value, malformed input).
    #[error("Validation error: {0}")]
    Validation(String),
}
