//! HTTP API
//!
//! Every request prices its own basket; the rule set is the only shared state.

use axum::{extract::State, http::StatusCode, routing::{get, post}, Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use validator::Validate;

use crate::domain::aggregates::Checkout;
use crate::domain::rules::RuleSet;
use crate::runner::{BatchRunner, CheckoutResult};

pub const NO_ITEMS_KEY: &str = "ERROR: The request body did not include an items property.";

#[derive(Clone)] pub struct AppState { pub rules: Arc<RuleSet> }

#[derive(Debug, Deserialize, Validate)]
pub struct PriceRequest {
    #[validate(required)]
    pub items: Option<String>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "Server is running" }))
        .route("/health", get(|| async { Json(json!({"status": "healthy", "service": "basket-pricer"})) }))
        .route("/price", post(calculate_price))
        .layer(TraceLayer::new_for_http()).layer(CorsLayer::permissive()).with_state(state)
}

async fn calculate_price(State(s): State<AppState>, Json(r): Json<PriceRequest>) -> Result<Json<CheckoutResult>, (StatusCode, Json<Value>)> {
    r.validate().map_err(|e| {
        tracing::info!(errors = %e, "rejected price request");
        (StatusCode::BAD_REQUEST, Json(json!({ "noItemsKey": NO_ITEMS_KEY })))
    })?;
    let items = r.items.unwrap_or_default();
    let checkout = Checkout::new(Arc::clone(&s.rules));
    Ok(Json(BatchRunner::new(checkout).run_str(&items)))
}
