//! Repository modules for Arena entities.
//!
//! Query functions take a `&libsql::Connection` so they run equally on the
//! service connection or inside a transaction. Each module also adds
//! convenience methods to `ArenaService` via `impl ArenaService` blocks.

pub mod activity;
pub mod membership;
pub mod preferences;
pub mod season;
pub mod slug;
pub mod user;
