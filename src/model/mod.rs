//! Domain models and parameter types.
//!
//! This module contains the domain models used throughout the service layer: the
//! persisted reward state and cooldown ledger, the results produced by a roll, and the
//! hunt profile record. Persisted models double as their JSON document shape; the
//! repositories in `data/` are responsible for tolerating older or damaged documents.

pub mod cooldown;
pub mod hunt;
pub mod reward;

/// Discord user ID (snowflake), stored as a string key in every JSON document.
pub type UserId = u64;
