use serde::Serialize;

/// A single catalog entry as stored in the `product` table.
///
/// Every field mirrors a nullable column: a SQL `NULL` is kept as `None`
/// and serialized as JSON `null`.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Product {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub price: Option<f64>,
}

impl Product {
    pub fn new(id: i32, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: Some(id),
            name: Some(name.into()),
            price: Some(price),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn serializes_all_fields() {
        let product = Product::new(1, "Widget", 9.99);

        let value = serde_json::to_value(&product).expect("product should serialize");

        assert_eq!(value, json!({"id": 1, "name": "Widget", "price": 9.99}));
    }

    #[test]
    fn missing_values_serialize_as_null() {
        let product = Product {
            id: None,
            name: None,
            price: None,
        };

        let value = serde_json::to_value(&product).expect("product should serialize");

        assert_eq!(value, json!({"id": null, "name": null, "price": null}));
    }
}
