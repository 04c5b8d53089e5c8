use serde::{Deserialize, Serialize};

/// Reference to a product owned by the inventory service, carried as the
/// raw id string. Never resolved or validated here: the referenced product
/// may not exist, and callers that ever add resolution must treat absence
/// as a normal outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductRef(pub String);

impl From<&str> for ProductRef {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Core customer entity. `phone` is omitted from JSON entirely when absent,
/// matching the wire format the service has always produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "productIds", default)]
    pub product_ids: Vec<ProductRef>,
}

// ── Request payloads ─────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateCustomer {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    #[serde(rename = "productIds", default)]
    pub product_ids: Vec<ProductRef>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCustomer {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(rename = "productIds")]
    pub product_ids: Option<Vec<ProductRef>>,
}

impl Customer {
    /// Merge semantics for PUT: supplied fields win, omitted fields keep
    /// their prior value. `phone` stays absent only if it was never set and
    /// the request does not provide one.
    pub fn merged(self, update: UpdateCustomer) -> Customer {
        Customer {
            id: self.id,
            name: update.name.unwrap_or(self.name),
            email: update.email.unwrap_or(self.email),
            phone: update.phone.or(self.phone),
            product_ids: update.product_ids.unwrap_or(self.product_ids),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(phone: Option<&str>) -> Customer {
        Customer {
            id: 1,
            name: "Customer 1".to_string(),
            email: "customer1@example.com".to_string(),
            phone: phone.map(str::to_string),
            product_ids: vec![ProductRef::from("1")],
        }
    }

    #[test]
    fn phone_is_omitted_from_json_when_absent() {
        let json = serde_json::to_value(customer(None)).unwrap();
        assert!(json.get("phone").is_none());
        assert_eq!(json["productIds"], serde_json::json!(["1"]));
    }

    #[test]
    fn phone_is_serialized_when_present() {
        let json = serde_json::to_value(customer(Some("078801"))).unwrap();
        assert_eq!(json["phone"], "078801");
    }

    #[test]
    fn create_payload_defaults_product_ids() {
        let payload: CreateCustomer =
            serde_json::from_str(r#"{"name":"A","email":"a@x.com"}"#).unwrap();
        assert!(payload.product_ids.is_empty());
        assert!(payload.phone.is_none());
    }

    #[test]
    fn merge_keeps_omitted_fields() {
        let update: UpdateCustomer = serde_json::from_str(r#"{"name":"Renamed"}"#).unwrap();
        let merged = customer(Some("078801")).merged(update);
        assert_eq!(merged.name, "Renamed");
        assert_eq!(merged.email, "customer1@example.com");
        assert_eq!(merged.phone.as_deref(), Some("078801"));
        assert_eq!(merged.product_ids, vec![ProductRef::from("1")]);
    }

    #[test]
    fn merge_sets_phone_on_phoneless_customer() {
        let update: UpdateCustomer = serde_json::from_str(r#"{"phone":"555"}"#).unwrap();
        let merged = customer(None).merged(update);
        assert_eq!(merged.phone.as_deref(), Some("555"));
    }

    #[test]
    fn merge_without_phone_leaves_it_absent() {
        let update: UpdateCustomer = serde_json::from_str(r#"{"email":"b@x.com"}"#).unwrap();
        let merged = customer(None).merged(update);
        assert!(merged.phone.is_none());
    }
}
