use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::json;
use tracing::info;

use crate::{
    error::{AppError, AppResult},
    models::{CreateProduct, Product, UpdateProduct},
    store::MemoryStore,
    InventoryState,
};

fn not_found() -> AppError {
    AppError::NotFound("Product not found".to_string())
}

/// Product ids are numeric strings. The next id is one past the largest
/// existing id that parses as an integer; ids that do not parse are skipped
/// rather than poisoning the allocation.
fn next_id(store: &MemoryStore<String, Product>) -> String {
    let max = store
        .ids()
        .filter_map(|id| id.parse::<i64>().ok())
        .max()
        .unwrap_or(0);
    (max + 1).to_string()
}

pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "service": "inventory-service" })),
    )
}

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_products(State(state): State<InventoryState>) -> Json<Vec<Product>> {
    let products = state.products.read().await.list();
    info!(count = products.len(), "Listed products");
    Json(products)
}

// ── Get by id ─────────────────────────────────────────────────────────────────

pub async fn get_product(
    State(state): State<InventoryState>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    // String-equality match, no parsing.
    let product = state.products.read().await.get(&id).ok_or_else(not_found)?;
    Ok(Json(product))
}

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn create_product(
    State(state): State<InventoryState>,
    Json(payload): Json<CreateProduct>,
) -> (StatusCode, Json<Product>) {
    let mut store = state.products.write().await;
    let id = next_id(&store);
    let product = Product {
        id: id.clone(),
        name: payload.name,
        stock: payload.stock,
    };
    store.insert(id, product.clone());
    info!(id = %product.id, name = %product.name, "Created product");
    (StatusCode::CREATED, Json(product))
}

// ── Update ────────────────────────────────────────────────────────────────────

pub async fn update_product(
    State(state): State<InventoryState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateProduct>,
) -> AppResult<Json<Product>> {
    let mut store = state.products.write().await;
    let existing = store.get(&id).ok_or_else(not_found)?;
    let updated = existing.merged(payload);
    store.update(&id, updated.clone());
    info!(id = %id, "Updated product");
    Ok(Json(updated))
}

// ── Delete ────────────────────────────────────────────────────────────────────

pub async fn delete_product(
    State(state): State<InventoryState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state
        .products
        .write()
        .await
        .remove(&id)
        .ok_or_else(not_found)?;
    info!(id = %id, "Deleted product");
    Ok(StatusCode::NO_CONTENT)
}
