//! Dish HTTP handlers
//!
//! Each route composes the same named steps in a fixed order:
//! create = validate → create, read = exists → read,
//! update = exists → id-consistency → validate → update.
//! There is no delete route for dishes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde_json::{Value, json};
use tracing::info;

use super::model::Dish;
use super::validate;
use crate::core::{ApiError, Body, require_matching_id};
use crate::server::AppState;

const RESOURCE: &str = "Dish";

pub async fn list_dishes(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "data": state.dishes.list() }))
}

pub async fn create_dish(
    State(state): State<AppState>,
    Json(body): Json<Body>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let input = validate::dish_input(&body.data)?;
    let dish = Dish::new(input);
    state.dishes.append(dish.clone());
    info!(dish_id = %dish.id, name = %dish.name, "dish created");
    Ok((StatusCode::CREATED, Json(json!({ "data": dish }))))
}

pub async fn read_dish(
    State(state): State<AppState>,
    Path(dish_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let dish = state
        .dishes
        .find(&dish_id)
        .ok_or_else(|| ApiError::not_found(RESOURCE, dish_id.as_str()))?;
    Ok(Json(json!({ "data": dish })))
}

pub async fn update_dish(
    State(state): State<AppState>,
    Path(dish_id): Path<String>,
    Json(body): Json<Body>,
) -> Result<Json<Value>, ApiError> {
    let mut dish = state
        .dishes
        .find(&dish_id)
        .ok_or_else(|| ApiError::not_found(RESOURCE, dish_id.as_str()))?;
    require_matching_id(RESOURCE, &dish_id, &body.data)?;
    let input = validate::dish_input(&body.data)?;

    dish.apply(input);
    state.dishes.replace(dish.clone());
    info!(dish_id = %dish.id, "dish updated");
    Ok(Json(json!({ "data": dish })))
}
