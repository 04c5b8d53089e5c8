use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::json;
use tracing::info;

use crate::{
    error::{AppError, AppResult},
    models::{CreateCustomer, Customer, UpdateCustomer},
    store::MemoryStore,
    CustomerState,
};

fn not_found() -> AppError {
    AppError::NotFound("Customer not found".to_string())
}

/// Customer ids are dense small integers; the next one is one past the
/// current maximum, starting at 1 on an empty store. Deleted ids are never
/// reused unless the maximum itself was deleted.
fn next_id(store: &MemoryStore<i64, Customer>) -> i64 {
    store.ids().copied().max().unwrap_or(0) + 1
}

pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "service": "customer-service" })),
    )
}

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_customers(State(state): State<CustomerState>) -> Json<Vec<Customer>> {
    let customers = state.customers.read().await.list();
    info!(count = customers.len(), "Listed customers");
    Json(customers)
}

// ── Get by id ─────────────────────────────────────────────────────────────────

pub async fn get_customer(
    State(state): State<CustomerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Customer>> {
    // A non-numeric path id matches nothing rather than being a bad request.
    let store = state.customers.read().await;
    let customer = id
        .parse::<i64>()
        .ok()
        .and_then(|id| store.get(&id))
        .ok_or_else(not_found)?;
    Ok(Json(customer))
}

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn create_customer(
    State(state): State<CustomerState>,
    Json(payload): Json<CreateCustomer>,
) -> (StatusCode, Json<Customer>) {
    let mut store = state.customers.write().await;
    let id = next_id(&store);
    let customer = Customer {
        id,
        name: payload.name,
        email: payload.email,
        phone: payload.phone,
        product_ids: payload.product_ids,
    };
    store.insert(id, customer.clone());
    info!(id, name = %customer.name, "Created customer");
    (StatusCode::CREATED, Json(customer))
}

// ── Update ────────────────────────────────────────────────────────────────────

pub async fn update_customer(
    State(state): State<CustomerState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateCustomer>,
) -> AppResult<Json<Customer>> {
    let id: i64 = id.parse().map_err(|_| not_found())?;

    let mut store = state.customers.write().await;
    let existing = store.get(&id).ok_or_else(not_found)?;
    let updated = existing.merged(payload);
    store.update(&id, updated.clone());
    info!(id, "Updated customer");
    Ok(Json(updated))
}

// ── Delete ────────────────────────────────────────────────────────────────────

pub async fn delete_customer(
    State(state): State<CustomerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id: i64 = id.parse().map_err(|_| not_found())?;

    state
        .customers
        .write()
        .await
        .remove(&id)
        .ok_or_else(not_found)?;
    info!(id, "Deleted customer");
    Ok(StatusCode::NO_CONTENT)
}
