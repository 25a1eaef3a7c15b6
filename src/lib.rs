//! # dishdash
//!
//! A small in-memory HTTP API for a restaurant ordering workflow: a menu of
//! dishes and the orders that reference them.
//!
//! The two resources are isomorphic; each pairs the same three layers:
//!
//! - **Store** — ordered in-memory collection with find-by-id
//!   ([`crate::core::store::Store`])
//! - **Validators** — pure functions from the raw request payload to a
//!   normalized input, first failure wins ([`dishes::validate`],
//!   [`orders::validate`])
//! - **Handlers** — axum handlers chaining existence check, id-consistency
//!   check, validation, and the store mutation, in that order
//!
//! Responses wrap records in `{"data": ...}`; failures are
//! `{"error": "<message>"}` with fixed message text. Nothing persists across
//! restarts and there is no authentication: this is the ordering core only.

pub mod config;
pub mod core;
pub mod dishes;
pub mod orders;
pub mod server;
