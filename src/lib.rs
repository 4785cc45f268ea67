//! Doc QA Agent - HTTP gateway and conversation seam
//!
//! This crate serves a liveness endpoint and a chat page whose replies come
//! from a pluggable `ConversationHandler`. The bundled handler echoes the
//! message; a document question-answering pipeline is meant to replace it
//! without touching the HTTP layer.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
