//! # arena-core
//!
//! Core types, activity log rendering, and short-hash identifiers for Arena.
//!
//! This crate provides the foundational types shared across all Arena crates:
//! - Entity structs for users, seasons, teams and activities
//! - Entity and activity kind enums
//! - Caller identity passed in from the auth layer
//! - The activity logger with its severity routing, clocks and sinks
//! - Deterministic challenge-instance handles

pub mod activity_log;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod hash;
pub mod identity;
