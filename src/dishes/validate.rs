//! Dish payload validation
//!
//! The rules run in a fixed order and the first failure wins: name,
//! description, image_url, then price. Each rejection carries the message
//! text the API contract fixes for that rule.

use serde_json::Value;

use super::model::DishInput;
use crate::core::ApiError;

fn non_empty_text<'a>(data: &'a Value, field: &str) -> Option<&'a str> {
    data.get(field)
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
}

/// Inspect `name`, `description`, `image_url`, and `price` on the raw
/// payload and produce the normalized four-field input
pub fn dish_input(data: &Value) -> Result<DishInput, ApiError> {
    let name = non_empty_text(data, "name")
        .ok_or_else(|| ApiError::validation("Dish must include a name"))?;
    let description = non_empty_text(data, "description")
        .ok_or_else(|| ApiError::validation("Dish must include a description"))?;
    let image_url = non_empty_text(data, "image_url")
        .ok_or_else(|| ApiError::validation("Dish must include an image_url"))?;

    let price = match data.get("price") {
        Some(Value::Number(price)) if price.as_f64().is_some_and(|p| p > 0.0) => price.clone(),
        _ => {
            return Err(ApiError::validation(
                "Dish must have a price that is a positive number",
            ));
        }
    };

    Ok(DishInput {
        name: name.to_string(),
        description: description.to_string(),
        price,
        image_url: image_url.to_string(),
    })
}
