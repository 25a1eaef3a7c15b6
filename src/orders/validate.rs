//! Order payload validation
//!
//! Create and update share the same ordered checklist: deliverTo,
//! mobileNumber, the dishes sequence, then every line item's quantity.
//! Update adds a status check at the end. First failure wins.
//!
//! The quantity check scans for the first violating line item and aborts the
//! whole validation with that item's index, so a bad item is never masked by
//! a later good one.

use serde_json::Value;

use super::model::{OrderInput, OrderStatus, OrderUpdate};
use crate::core::ApiError;

fn non_empty_text<'a>(data: &'a Value, field: &str) -> Option<&'a str> {
    data.get(field)
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
}

/// Index of the first line item without a numeric `quantity > 0`, if any
fn first_invalid_line_item(dishes: &[Value]) -> Option<usize> {
    dishes.iter().position(|item| {
        !item
            .get("quantity")
            .and_then(Value::as_f64)
            .is_some_and(|quantity| quantity > 0.0)
    })
}

/// The checks shared by create and update, in contract order
fn common_fields(data: &Value) -> Result<(String, String, Vec<Value>), ApiError> {
    let deliver_to = non_empty_text(data, "deliverTo")
        .ok_or_else(|| ApiError::validation("Order must include a deliverTo"))?;
    let mobile_number = non_empty_text(data, "mobileNumber")
        .ok_or_else(|| ApiError::validation("Order must include a mobileNumber"))?;

    let dishes = match data.get("dishes") {
        Some(Value::Array(items)) if !items.is_empty() => items.clone(),
        _ => return Err(ApiError::validation("Order must include at least one dish")),
    };

    if let Some(index) = first_invalid_line_item(&dishes) {
        return Err(ApiError::validation(format!(
            "Dish {} must have a quantity that is an integer greater than 0",
            index
        )));
    }

    Ok((deliver_to.to_string(), mobile_number.to_string(), dishes))
}

/// Validation for `POST /orders`
pub fn order_input(data: &Value) -> Result<OrderInput, ApiError> {
    let (deliver_to, mobile_number, dishes) = common_fields(data)?;
    Ok(OrderInput {
        deliver_to,
        mobile_number,
        dishes,
    })
}

/// Validation for `PUT /orders/{order_id}`: the shared checklist plus status
pub fn order_update(data: &Value) -> Result<OrderUpdate, ApiError> {
    let (deliver_to, mobile_number, dishes) = common_fields(data)?;
    let status = data
        .get("status")
        .and_then(Value::as_str)
        .and_then(OrderStatus::parse)
        .ok_or_else(|| ApiError::validation("Order must include a valid status"))?;

    Ok(OrderUpdate {
        deliver_to,
        mobile_number,
        status,
        dishes,
    })
}
