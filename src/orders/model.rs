//! Order records, status lifecycle, and normalized payloads

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use uuid::Uuid;

use crate::core::Record;

/// Delivery lifecycle of an order
///
/// Every order starts at `Pending`; updates may move it to any member of the
/// set, and only pending orders can be deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Pending,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    /// Parse the wire form; anything outside the closed set is rejected
    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "pending" => Some(OrderStatus::Pending),
            "preparing" => Some(OrderStatus::Preparing),
            "out-for-delivery" => Some(OrderStatus::OutForDelivery),
            "delivered" => Some(OrderStatus::Delivered),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A delivery order
///
/// Line items pass through exactly as submitted: each carries a positive
/// `quantity`, and any dish fields embedded alongside it are stored
/// verbatim. Whether a referenced dish id exists in the dish store is
/// deliberately not checked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Opaque unique identifier, immutable after creation
    pub id: String,
    #[serde(rename = "deliverTo")]
    pub deliver_to: String,
    #[serde(rename = "mobileNumber")]
    pub mobile_number: String,
    pub status: OrderStatus,
    pub dishes: Vec<Value>,
}

impl Order {
    /// Assemble a record from a validated payload, allocating a fresh id
    ///
    /// Status always starts at `pending`, no matter what the client sent.
    pub fn new(input: OrderInput) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            deliver_to: input.deliver_to,
            mobile_number: input.mobile_number,
            status: OrderStatus::Pending,
            dishes: input.dishes,
        }
    }

    /// Overwrite every field other than the id
    pub fn apply(&mut self, update: OrderUpdate) {
        self.deliver_to = update.deliver_to;
        self.mobile_number = update.mobile_number;
        self.status = update.status;
        self.dishes = update.dishes;
    }
}

impl Record for Order {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Normalized create payload
///
/// `status` is absent on purpose: creation sets it unconditionally.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderInput {
    pub deliver_to: String,
    pub mobile_number: String,
    pub dishes: Vec<Value>,
}

/// Normalized update payload, including the validated status
#[derive(Debug, Clone, PartialEq)]
pub struct OrderUpdate {
    pub deliver_to: String,
    pub mobile_number: String,
    pub status: OrderStatus,
    pub dishes: Vec<Value>,
}
