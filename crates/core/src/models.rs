use serde::{Deserialize, Serialize};

/// One row of the `/stock/query/` payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockRecord {
    #[serde(default)]
    pub id: Option<i64>,
    pub product_name: String,
    pub quantity: f64,
    pub price: f64,
    #[serde(default)]
    pub supplier: Option<String>,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StockQueryResponse {
    #[serde(default)]
    pub results: Vec<StockRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    Accepted,
    Dismissed,
}

#[derive(Debug, Clone)]
pub struct PageConfig {
    pub search_path: String,
    pub min_query_chars: usize,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            search_path: "/stock/query/".to_string(),
            min_query_chars: crate::search::MIN_QUERY_CHARS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct WorkerConfig {
    pub cache_name: String,
    pub seed_urls: Vec<String>,
    pub script_path: String,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            cache_name: "stock-query-app-cache-v1".to_string(),
            seed_urls: vec!["/".to_string(), "512.png".to_string(), "128.png".to_string()],
            script_path: "/static/pwa/service-worker.js".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_without_optional_fields_deserializes() {
        let body = r#"{"results":[{"product_name":"Widget","quantity":4,"price":3}]}"#;
        let response: StockQueryResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].supplier, None);
        assert_eq!(response.results[0].sku, None);
        assert_eq!(response.results[0].price, 3.0);
    }

    #[test]
    fn null_optional_fields_are_accepted() {
        let body = r#"{"results":[{"product_name":"Bolt","quantity":1,"price":0.5,
            "supplier":null,"sku":"B-1"}]}"#;
        let response: StockQueryResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.results[0].sku.as_deref(), Some("B-1"));
    }

    #[test]
    fn fractional_quantities_do_not_reject_the_payload() {
        let body = r#"{"results":[
            {"product_name":"Widget","quantity":4.0,"price":3},
            {"product_name":"Cable","quantity":2.5,"price":1.25}]}"#;
        let response: StockQueryResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.results.len(), 2);
        assert_eq!(response.results[0].quantity, 4.0);
        assert_eq!(response.results[1].quantity, 2.5);
    }
}
