use serde::{Deserialize, Serialize};

/// Core product entity. The id is a string holding a numeric value; the
/// inventory service matches it by string equality and only parses it when
/// allocating the next id. Stock carries no lower bound, so negative values
/// are representable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub stock: i32,
}

// ── Request payloads ─────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateProduct {
    pub name: String,
    pub stock: i32,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub stock: Option<i32>,
}

impl Product {
    /// Merge semantics for PUT: both fields are always present on a stored
    /// product, so each simply takes the request value when supplied.
    pub fn merged(self, update: UpdateProduct) -> Product {
        Product {
            id: self.id,
            name: update.name.unwrap_or(self.name),
            stock: update.stock.unwrap_or(self.stock),
        }
    }
}
