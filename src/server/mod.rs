//! Server wiring: process-wide state and the route table

pub mod router;

use crate::core::Store;
use crate::dishes::Dish;
use crate::orders::Order;

/// Process-wide application context
///
/// Owns one store per resource. Handlers receive a clone through axum's
/// `State` extractor; clones share the underlying collections, so a state
/// built here and handed to the router is the single source of truth for
/// the process.
#[derive(Clone, Default)]
pub struct AppState {
    pub dishes: Store<Dish>,
    pub orders: Store<Order>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            dishes: Store::new(),
            orders: Store::new(),
        }
    }
}
