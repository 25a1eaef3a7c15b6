//! Dish records and their normalized input payload

use serde::{Deserialize, Serialize};
use serde_json::Number;
use uuid::Uuid;

use crate::core::Record;

/// A menu dish
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dish {
    /// Opaque unique identifier, immutable after creation
    pub id: String,
    pub name: String,
    pub description: String,
    /// Strictly positive; kept as a raw JSON number so an integer price
    /// submitted by the client round-trips as an integer
    pub price: Number,
    /// Opaque text, not validated as a real URL
    pub image_url: String,
}

impl Dish {
    /// Assemble a full record from a validated payload, allocating a fresh id
    pub fn new(input: DishInput) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            description: input.description,
            price: input.price,
            image_url: input.image_url,
        }
    }

    /// Overwrite every field other than the id
    pub fn apply(&mut self, input: DishInput) {
        self.name = input.name;
        self.description = input.description;
        self.price = input.price;
        self.image_url = input.image_url;
    }
}

impl Record for Dish {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Normalized dish payload: exactly the four validated fields
///
/// Anything else the client sent in the body, including a client-supplied
/// `id`, is already discarded by the time this exists.
#[derive(Debug, Clone, PartialEq)]
pub struct DishInput {
    pub name: String,
    pub description: String,
    pub price: Number,
    pub image_url: String,
}
