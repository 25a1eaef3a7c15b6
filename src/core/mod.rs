//! Shared building blocks for the two resource managers
//!
//! Dishes and orders are isomorphic: each pairs a [`store::Store`] with a set
//! of validators and handlers. The pieces both sides share live here.

pub mod body;
pub mod error;
pub mod store;

pub use body::{Body, require_matching_id};
pub use error::ApiError;
pub use store::{Record, Store};
