use crate::models::{InstallOutcome, StockQueryResponse};
use crate::offline::{FetchRequest, HttpResponse, Registration};
use crate::{CacheError, PageError, SearchError};
use async_trait::async_trait;

#[async_trait]
pub trait StockQueryBackend {
    async fn query(&self, query: &str) -> Result<StockQueryResponse, SearchError>;
}

#[async_trait]
pub trait Fetcher {
    async fn fetch(&self, request: &FetchRequest) -> Result<HttpResponse, CacheError>;
}

#[async_trait]
pub trait WorkerRegistry {
    async fn register(&self, script_url: &str) -> Result<Registration, CacheError>;
}

/// Browser-issued one-time handle for the native install flow.
#[async_trait]
pub trait DeferredPrompt {
    async fn prompt(&mut self) -> Result<InstallOutcome, PageError>;
}

/// Durable string key-value storage that outlives the page.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), PageError>;
}

pub trait ConfirmDialog {
    fn confirm(&self, message: &str) -> bool;
}

pub trait Navigator {
    fn navigate(&mut self, href: &str);
}

pub trait PrintService {
    fn print(&self);
}
