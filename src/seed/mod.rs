use crate::models::{Customer, Product, ProductRef};
use crate::store::MemoryStore;

/// Product ids handed out to seeded customers. Ids 4-6 have no product
/// behind them in the inventory seed; the reference is never resolved, so
/// nothing notices.
static SEED_PRODUCT_IDS: &[&str] = &["1", "2", "3", "4", "5", "6"];

/// Ten fixed customers. Each references one product from the pool; even ids
/// also reference the next one, wrapping around.
pub fn customers() -> MemoryStore<i64, Customer> {
    let mut store = MemoryStore::new();
    for id in 1..=10i64 {
        let i = (id - 1) as usize;
        let primary = SEED_PRODUCT_IDS[i % SEED_PRODUCT_IDS.len()];
        let secondary = SEED_PRODUCT_IDS[(i + 1) % SEED_PRODUCT_IDS.len()];

        let product_ids = if id % 2 == 0 {
            vec![ProductRef::from(primary), ProductRef::from(secondary)]
        } else {
            vec![ProductRef::from(primary)]
        };

        store.insert(
            id,
            Customer {
                id,
                name: format!("Customer {id}"),
                email: format!("customer{id}@example.com"),
                phone: Some(format!("0788{id:02}")),
                product_ids,
            },
        );
    }
    store
}

/// The three fixed products the inventory starts with.
pub fn products() -> MemoryStore<String, Product> {
    let mut store = MemoryStore::new();
    for (id, name, stock) in [("1", "Laptop", 15), ("2", "Mouse", 50), ("3", "Keyboard", 30)] {
        store.insert(
            id.to_string(),
            Product {
                id: id.to_string(),
                name: name.to_string(),
                stock,
            },
        );
    }
    store
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_ten_customers_in_id_order() {
        let store = customers();
        assert_eq!(store.len(), 10);
        let ids: Vec<i64> = store.list().iter().map(|c| c.id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn even_customers_reference_two_products() {
        let store = customers();
        let c2 = store.get(&2).unwrap();
        assert_eq!(
            c2.product_ids,
            vec![ProductRef::from("2"), ProductRef::from("3")]
        );
        let c7 = store.get(&7).unwrap();
        assert_eq!(c7.product_ids, vec![ProductRef::from("1")]);
    }

    #[test]
    fn customer_phones_are_zero_padded() {
        let store = customers();
        assert_eq!(store.get(&3).unwrap().phone.as_deref(), Some("078803"));
        assert_eq!(store.get(&10).unwrap().phone.as_deref(), Some("078810"));
    }

    #[test]
    fn seeds_three_products() {
        let store = products();
        assert_eq!(store.len(), 3);
        let laptop = store.get(&"1".to_string()).unwrap();
        assert_eq!(laptop.name, "Laptop");
        assert_eq!(laptop.stock, 15);
    }
}
