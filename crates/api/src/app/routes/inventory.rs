//! Inventory endpoints.
//!
//! Every handler makes exactly one store call; the store's lock is what orders
//! concurrent requests. Reads are GET-only, mutations also accept POST.

use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};

use labkit_core::Dollars;
use labkit_inventory::InventoryStore;

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/list", get(list))
        .route("/price", get(price))
        .route("/create", get(create).post(create))
        .route("/update", get(update).post(update))
        .route("/delete", get(delete).post(delete))
}

pub async fn list(Extension(store): Extension<Arc<InventoryStore>>) -> axum::response::Response {
    let items = store.list();
    tracing::debug!(count = items.len(), "list");
    (StatusCode::OK, dto::list_body(&items)).into_response()
}

pub async fn price(
    Extension(store): Extension<Arc<InventoryStore>>,
    Query(query): Query<dto::QueryParams>,
) -> axum::response::Response {
    match store.price(query.item()) {
        Ok(price) => {
            tracing::debug!(item = query.item(), %price, "price");
            (StatusCode::OK, dto::price_body(price)).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn create(
    Extension(store): Extension<Arc<InventoryStore>>,
    Query(query): Query<dto::QueryParams>,
) -> axum::response::Response {
    let price: Dollars = match query.price().parse() {
        Ok(p) => p,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let price = store.create(query.item(), price);
    tracing::info!(item = query.item(), %price, "item created");
    (StatusCode::OK, dto::created_body(query.item(), price)).into_response()
}

pub async fn update(
    Extension(store): Extension<Arc<InventoryStore>>,
    Query(query): Query<dto::QueryParams>,
) -> axum::response::Response {
    let price: Dollars = match query.price().parse() {
        Ok(p) => p,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match store.update(query.item(), price) {
        Ok(price) => {
            tracing::info!(item = query.item(), %price, "item updated");
            (StatusCode::OK, dto::updated_body(query.item(), price)).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete(
    Extension(store): Extension<Arc<InventoryStore>>,
    Query(query): Query<dto::QueryParams>,
) -> axum::response::Response {
    match store.delete(query.item()) {
        Ok(old) => {
            tracing::info!(item = query.item(), %old, "item deleted");
            (StatusCode::OK, dto::deleted_body(query.item())).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}
