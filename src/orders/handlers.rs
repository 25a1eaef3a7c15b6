//! Order HTTP handlers
//!
//! Route compositions: create = validate → create, read = exists → read,
//! update = exists → id-consistency → validate → update,
//! delete = exists → delete (pending orders only).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde_json::{Value, json};
use tracing::info;

use super::model::{Order, OrderStatus};
use super::validate;
use crate::core::{ApiError, Body, require_matching_id};
use crate::server::AppState;

const RESOURCE: &str = "Order";

pub async fn list_orders(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "data": state.orders.list() }))
}

pub async fn create_order(
    State(state): State<AppState>,
    Json(body): Json<Body>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let input = validate::order_input(&body.data)?;
    let order = Order::new(input);
    state.orders.append(order.clone());
    info!(order_id = %order.id, dishes = order.dishes.len(), "order created");
    Ok((StatusCode::CREATED, Json(json!({ "data": order }))))
}

pub async fn read_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let order = state
        .orders
        .find(&order_id)
        .ok_or_else(|| ApiError::not_found(RESOURCE, order_id.as_str()))?;
    Ok(Json(json!({ "data": order })))
}

pub async fn update_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
    Json(body): Json<Body>,
) -> Result<Json<Value>, ApiError> {
    let mut order = state
        .orders
        .find(&order_id)
        .ok_or_else(|| ApiError::not_found(RESOURCE, order_id.as_str()))?;
    require_matching_id(RESOURCE, &order_id, &body.data)?;
    let update = validate::order_update(&body.data)?;

    order.apply(update);
    state.orders.replace(order.clone());
    info!(order_id = %order.id, status = %order.status, "order updated");
    Ok(Json(json!({ "data": order })))
}

pub async fn delete_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let order = state
        .orders
        .find(&order_id)
        .ok_or_else(|| ApiError::not_found(RESOURCE, order_id.as_str()))?;

    if order.status != OrderStatus::Pending {
        return Err(ApiError::validation(
            "An order cannot be deleted unless it is pending",
        ));
    }

    state.orders.remove(&order_id);
    info!(order_id = %order_id, "order deleted");
    Ok(StatusCode::NO_CONTENT)
}
