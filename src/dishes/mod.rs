//! Dish resource manager
//!
//! The menu side of the API: dishes are created and updated but never
//! deleted. See [`handlers`] for the route compositions.

pub mod handlers;
pub mod model;
pub mod validate;

pub use model::{Dish, DishInput};
