//! Persistent store for the bot's JSON documents.
//!
//! This module contains one repository per document (reward state, cooldown ledger and
//! hunt profiles). Each repository is described by a trait so services can be exercised
//! against in-memory fakes, and implemented on top of `JsonDocument`, which owns the
//! file handling shared by all documents: missing files and malformed JSON load as
//! defaults, and every save is a full overwrite through a temporary file.

pub mod cooldown;
pub mod document;
pub mod hunt_profile;
pub mod reward;
