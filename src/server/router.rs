//! Route table
//!
//! | Method | Path                 | Chain                                    |
//! |--------|----------------------|------------------------------------------|
//! | GET    | /dishes              | list                                     |
//! | POST   | /dishes              | validate → create                        |
//! | GET    | /dishes/{dish_id}    | exists → read                            |
//! | PUT    | /dishes/{dish_id}    | exists → id-check → validate → update    |
//! | GET    | /orders              | list                                     |
//! | POST   | /orders              | validate → create                        |
//! | GET    | /orders/{order_id}   | exists → read                            |
//! | PUT    | /orders/{order_id}   | exists → id-check → validate → update    |
//! | DELETE | /orders/{order_id}   | exists → delete                          |

use axum::http::{Method, StatusCode, Uri};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::AppState;
use crate::dishes::handlers::{create_dish, list_dishes, read_dish, update_dish};
use crate::orders::handlers::{create_order, delete_order, list_orders, read_order, update_order};

/// Build the application router over an initialized state
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/dishes", get(list_dishes).post(create_dish))
        .route("/dishes/{dish_id}", get(read_dish).put(update_dish))
        .route("/orders", get(list_orders).post(create_order))
        .route(
            "/orders/{order_id}",
            get(read_order).put(update_order).delete(delete_order),
        )
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// JSON 404 for paths outside the route table
async fn not_found(method: Method, uri: Uri) -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": format!("Not found: {} {}", method, uri.path()) })),
    )
}
