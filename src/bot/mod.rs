//! Discord bot integration for the giftcard event.
//!
//! This module owns everything that talks to the Discord gateway: the event handler,
//! the slash command definitions and the code turning service outcomes into replies.
//! Business rules live in the service layer; the handlers here only translate between
//! Discord interactions and service calls.
//!
//! # Gateway Intents
//!
//! The bot only needs `GUILDS`. Slash command interactions are delivered regardless of
//! intents, and no message content or member events are consumed.

pub mod command;
pub mod handler;
pub mod start;
