use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::sync::RwLock;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod seed;
pub mod store;

use crate::models::{Customer, Product};
use crate::store::MemoryStore;

/// Shared state of the customer service — cheap to clone (heap behind Arc).
/// The write lock is the single critical section guarding every
/// read-modify-write, since tokio dispatches handlers across threads.
#[derive(Clone)]
pub struct CustomerState {
    pub customers: Arc<RwLock<MemoryStore<i64, Customer>>>,
}

impl CustomerState {
    pub fn new(customers: MemoryStore<i64, Customer>) -> Self {
        Self {
            customers: Arc::new(RwLock::new(customers)),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed::customers())
    }
}

/// Shared state of the inventory service.
#[derive(Clone)]
pub struct InventoryState {
    pub products: Arc<RwLock<MemoryStore<String, Product>>>,
}

impl InventoryState {
    pub fn new(products: MemoryStore<String, Product>) -> Self {
        Self {
            products: Arc::new(RwLock::new(products)),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed::products())
    }
}

pub fn customer_router(state: CustomerState) -> Router {
    Router::new()
        .route("/health", get(handlers::customers::health))
        .route(
            "/customers",
            get(handlers::customers::list_customers).post(handlers::customers::create_customer),
        )
        .route(
            "/customers/:id",
            get(handlers::customers::get_customer)
                .put(handlers::customers::update_customer)
                .delete(handlers::customers::delete_customer),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub fn inventory_router(state: InventoryState) -> Router {
    Router::new()
        .route("/health", get(handlers::products::health))
        .route(
            "/products",
            get(handlers::products::list_products).post(handlers::products::create_product),
        )
        .route(
            "/products/:id",
            get(handlers::products::get_product)
                .put(handlers::products::update_product)
                .delete(handlers::products::delete_product),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
