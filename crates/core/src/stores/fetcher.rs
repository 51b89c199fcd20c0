use crate::offline::{FetchRequest, HttpResponse, Registration};
use crate::traits::{Fetcher, WorkerRegistry};
use crate::CacheError;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::sync::Arc;
use url::Url;

pub struct HttpFetcher {
    client: Arc<Client>,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: Arc::new(Client::new()),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, request: &FetchRequest) -> Result<HttpResponse, CacheError> {
        let response = self
            .client
            .request(request.method.clone(), request.url.clone())
            .send()
            .await?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await?.to_vec();

        Ok(HttpResponse {
            status,
            content_type,
            body,
        })
    }
}

/// Registers a worker by confirming its script is served; the scope is the
/// directory the script lives in.
pub struct ScriptProbeRegistry<F> {
    fetcher: F,
    origin: Url,
}

impl<F> ScriptProbeRegistry<F> {
    pub fn new(fetcher: F, origin: Url) -> Self {
        Self { fetcher, origin }
    }
}

#[async_trait]
impl<F> WorkerRegistry for ScriptProbeRegistry<F>
where
    F: Fetcher + Send + Sync,
{
    async fn register(&self, script_url: &str) -> Result<Registration, CacheError> {
        let script = self.origin.join(script_url)?;
        let response = self.fetcher.fetch(&FetchRequest::get(script.clone())).await?;
        if !response.is_success() {
            return Err(CacheError::Registration(format!(
                "{script} answered with status {}",
                response.status
            )));
        }

        let scope = script.join("./")?;
        Ok(Registration {
            scope: scope.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticFetcher {
        status: u16,
    }

    #[async_trait]
    impl Fetcher for StaticFetcher {
        async fn fetch(&self, _request: &FetchRequest) -> Result<HttpResponse, CacheError> {
            Ok(HttpResponse {
                status: self.status,
                content_type: Some("application/javascript".to_string()),
                body: Vec::new(),
            })
        }
    }

    #[tokio::test]
    async fn scope_is_the_script_directory() {
        let registry = ScriptProbeRegistry::new(
            StaticFetcher { status: 200 },
            Url::parse("http://shop.local").unwrap(),
        );
        let registration = registry
            .register("/static/pwa/service-worker.js")
            .await
            .unwrap();
        assert_eq!(registration.scope, "http://shop.local/static/pwa/");
    }

    #[tokio::test]
    async fn missing_script_fails_registration() {
        let registry = ScriptProbeRegistry::new(
            StaticFetcher { status: 404 },
            Url::parse("http://shop.local").unwrap(),
        );
        let result = registry.register("/static/pwa/service-worker.js").await;
        assert!(matches!(result, Err(CacheError::Registration(_))));
    }
}
