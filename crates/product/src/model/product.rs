use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i32,
    pub name: String,
    /// Any JSON number is accepted; whole prices are written back with a
    /// fractional part (`1000` becomes `1000.0`), the same numeric value.
    pub price: f64,
    pub stock: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn whole_prices_round_trip_as_the_same_number() {
        let product: Product =
            serde_json::from_value(json!({ "id": 1, "name": "Laptop", "price": 1000, "stock": 5 }))
                .unwrap();

        let written = serde_json::to_string(&product).unwrap();
        assert_eq!(
            written,
            r#"{"id":1,"name":"Laptop","price":1000.0,"stock":5}"#
        );

        let reread: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(reread["price"].as_f64(), Some(1000.0));
    }
}
