use serde::{Deserialize, Serialize};

/// The single domain record managed by the store.
///
/// `id` is caller-supplied (not generated) and intended unique within a
/// store. `name` is stored as received; matching lowercases transiently.
/// `price` is unvalidated at the record level — only the price-range search
/// rejects negative bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_json_round_trips_with_required_fields() {
        let item: Item = serde_json::from_str(r#"{"id":1,"name":"Apple","price":1.5}"#).unwrap();
        assert_eq!(
            item,
            Item {
                id: 1,
                name: "Apple".to_string(),
                price: 1.5,
            }
        );

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json, serde_json::json!({"id": 1, "name": "Apple", "price": 1.5}));
    }

    #[test]
    fn item_json_rejects_missing_fields() {
        assert!(serde_json::from_str::<Item>(r#"{"id":1,"name":"Apple"}"#).is_err());
        assert!(serde_json::from_str::<Item>(r#"{"name":"Apple","price":1.5}"#).is_err());
    }
}
