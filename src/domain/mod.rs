//! Domain layer containing conversation types and pure reply logic.
//!
//! # Module Organization
//!
//! - `conversation` - Turns, transcript helpers and the echo reply

pub mod conversation;
