//! Offline cache worker.
//!
//! Seeds a named cache with a fixed asset list at install time, then answers
//! every GET it can from the cache and passes everything else straight to the
//! network. Misses are never written back, so the only way to refresh stored
//! assets is to install a worker with a different cache name.

use crate::models::WorkerConfig;
use crate::traits::{Fetcher, WorkerRegistry};
use crate::CacheError;
use reqwest::Method;
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub method: Method,
    pub url: Url,
}

impl FetchRequest {
    pub fn get(url: Url) -> Self {
        Self {
            method: Method::GET,
            url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseSource {
    Cache,
    Network,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServedResponse {
    pub response: HttpResponse,
    pub source: ResponseSource,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub scope: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerState {
    Installing,
    Active,
    Redundant,
}

impl fmt::Display for WorkerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Installing => "installing",
            Self::Active => "active",
            Self::Redundant => "redundant",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Default)]
pub struct CacheStore {
    entries: HashMap<String, HttpResponse>,
}

impl CacheStore {
    pub fn put(&mut self, url: &Url, response: HttpResponse) {
        self.entries.insert(cache_key(url), response);
    }

    pub fn get(&self, url: &Url) -> Option<&HttpResponse> {
        self.entries.get(&cache_key(url))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Named stores, searched in creation order on lookup.
#[derive(Debug, Clone, Default)]
pub struct CacheStorage {
    stores: Vec<(String, CacheStore)>,
}

impl CacheStorage {
    /// Returns the store called `name`, creating it if absent.
    pub fn open(&mut self, name: &str) -> &mut CacheStore {
        let index = match self.stores.iter().position(|(existing, _)| existing == name) {
            Some(index) => index,
            None => {
                self.stores.push((name.to_string(), CacheStore::default()));
                self.stores.len() - 1
            }
        };
        &mut self.stores[index].1
    }

    pub fn match_url(&self, url: &Url) -> Option<&HttpResponse> {
        self.stores.iter().find_map(|(_, store)| store.get(url))
    }

    pub fn names(&self) -> Vec<&str> {
        self.stores.iter().map(|(name, _)| name.as_str()).collect()
    }
}

fn cache_key(url: &Url) -> String {
    let mut key = url.clone();
    key.set_fragment(None);
    key.to_string()
}

pub struct OfflineWorker<F> {
    fetcher: F,
    config: WorkerConfig,
    script_url: Url,
    state: RwLock<WorkerState>,
    install_claimed: AtomicBool,
    caches: RwLock<CacheStorage>,
}

impl<F> OfflineWorker<F>
where
    F: Fetcher + Send + Sync,
{
    pub fn new(fetcher: F, origin: &Url, config: WorkerConfig) -> Result<Self, CacheError> {
        let script_url = origin.join(&config.script_path)?;
        Ok(Self {
            fetcher,
            config,
            script_url,
            state: RwLock::new(WorkerState::Installing),
            install_claimed: AtomicBool::new(false),
            caches: RwLock::new(CacheStorage::default()),
        })
    }

    pub async fn state(&self) -> WorkerState {
        *self.state.read().await
    }

    /// Seed URLs resolved against the worker script location.
    pub fn seed_urls(&self) -> Result<Vec<Url>, CacheError> {
        self.config
            .seed_urls
            .iter()
            .map(|seed| self.script_url.join(seed).map_err(CacheError::from))
            .collect()
    }

    /// Fetches every seed asset and stores them all, or none of them.
    ///
    /// Only the first call runs; any later or concurrent call is rejected
    /// without touching the network.
    pub async fn install(&self) -> Result<usize, CacheError> {
        if self.install_claimed.swap(true, Ordering::SeqCst) {
            let current = self.state().await;
            return Err(CacheError::InvalidState(current.to_string()));
        }

        let seeds = match self.seed_urls() {
            Ok(seeds) => seeds,
            Err(error) => return Err(self.fail_install(error).await),
        };

        let mut fetched = Vec::with_capacity(seeds.len());
        for url in seeds {
            let response = match self.fetcher.fetch(&FetchRequest::get(url.clone())).await {
                Ok(response) => response,
                Err(error) => return Err(self.fail_install(error).await),
            };
            if !response.is_success() {
                let error = CacheError::BadSeedStatus {
                    url: url.to_string(),
                    status: response.status,
                };
                return Err(self.fail_install(error).await);
            }
            fetched.push((url, response));
        }

        let stored = fetched.len();
        {
            let mut caches = self.caches.write().await;
            let store = caches.open(&self.config.cache_name);
            for (url, response) in fetched {
                store.put(&url, response);
            }
        }

        *self.state.write().await = WorkerState::Active;
        info!(cache = %self.config.cache_name, assets = stored, "offline worker installed");
        Ok(stored)
    }

    async fn fail_install(&self, error: CacheError) -> CacheError {
        warn!(cache = %self.config.cache_name, error = %error, "offline worker install failed");
        *self.state.write().await = WorkerState::Redundant;
        error
    }

    /// Cache first, network otherwise. Network responses are not stored.
    pub async fn handle_fetch(&self, request: &FetchRequest) -> Result<ServedResponse, CacheError> {
        if self.state().await == WorkerState::Active && request.method == Method::GET {
            if let Some(cached) = self.caches.read().await.match_url(&request.url) {
                debug!(url = %request.url, "served from cache");
                return Ok(ServedResponse {
                    response: cached.clone(),
                    source: ResponseSource::Cache,
                });
            }
        }

        let response = self.fetcher.fetch(request).await?;
        debug!(url = %request.url, status = response.status, "served from network");
        Ok(ServedResponse {
            response,
            source: ResponseSource::Network,
        })
    }

    pub async fn cache_names(&self) -> Vec<String> {
        self.caches
            .read()
            .await
            .names()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}

/// Registers the worker script; the outcome is only logged.
pub async fn register_worker<R>(registry: &R, script_url: &str) -> Option<Registration>
where
    R: WorkerRegistry + Sync + ?Sized,
{
    match registry.register(script_url).await {
        Ok(registration) => {
            info!(scope = %registration.scope, "worker registration successful");
            Some(registration)
        }
        Err(error) => {
            warn!(script = %script_url, error = %error, "worker registration failed");
            None
        }
    }
}
