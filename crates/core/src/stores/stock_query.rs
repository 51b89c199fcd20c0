use crate::models::StockQueryResponse;
use crate::traits::StockQueryBackend;
use crate::SearchError;
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use url::Url;

/// Talks to the server's `/stock/query/` endpoint.
pub struct HttpStockQuery {
    client: Arc<Client>,
    endpoint: Url,
}

impl HttpStockQuery {
    pub fn new(base_url: &Url, search_path: &str) -> Result<Self, SearchError> {
        Ok(Self {
            client: Arc::new(Client::new()),
            endpoint: base_url.join(search_path)?,
        })
    }

    pub fn query_url(&self, query: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().clear().append_pair("query", query);
        url
    }
}

#[async_trait]
impl StockQueryBackend for HttpStockQuery {
    async fn query(&self, query: &str) -> Result<StockQueryResponse, SearchError> {
        let response = self
            .client
            .get(self.query_url(query))
            .header("X-Requested-With", "XMLHttpRequest")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SearchError::BackendResponse {
                backend: "stock-query".to_string(),
                details: response.status().to_string(),
            });
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_is_sent_as_an_encoded_parameter() {
        let base = Url::parse("http://shop.local").unwrap();
        let backend = HttpStockQuery::new(&base, "/stock/query/").unwrap();
        assert_eq!(
            backend.query_url("blue bolt&nut").as_str(),
            "http://shop.local/stock/query/?query=blue+bolt%26nut"
        );
    }

    #[test]
    fn endpoint_keeps_base_path_prefix() {
        let base = Url::parse("http://shop.local/inventory/").unwrap();
        let backend = HttpStockQuery::new(&base, "stock/query/").unwrap();
        assert_eq!(
            backend.query_url("abc").as_str(),
            "http://shop.local/inventory/stock/query/?query=abc"
        );
    }
}
