use crate::render::ResultsPanel;
use crate::traits::StockQueryBackend;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;
use tracing::{debug, warn};

pub const MIN_QUERY_CHARS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Query too short; the panel was emptied and no request was made.
    Cleared,
    Rendered { items: usize },
    /// A newer input event arrived while this request was in flight.
    Stale { ticket: u64 },
    /// The request failed; whatever the panel showed before is kept.
    Failed,
}

/// Incremental search behind the `#stock-query` field.
///
/// Every input event takes a ticket. A response is applied only while its
/// ticket is still the latest one, so an out-of-order reply can never
/// overwrite a fresher panel.
pub struct StockSearch<B> {
    backend: B,
    min_query_chars: usize,
    latest: AtomicU64,
    panel: Mutex<ResultsPanel>,
}

impl<B> StockSearch<B>
where
    B: StockQueryBackend + Send + Sync,
{
    pub fn new(backend: B) -> Self {
        Self::with_min_chars(backend, MIN_QUERY_CHARS)
    }

    pub fn with_min_chars(backend: B, min_query_chars: usize) -> Self {
        Self {
            backend,
            min_query_chars,
            latest: AtomicU64::new(0),
            panel: Mutex::new(ResultsPanel::Empty),
        }
    }

    pub async fn on_input(&self, raw: &str) -> SearchOutcome {
        let ticket = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        let query = raw.trim();

        if query.chars().count() <= self.min_query_chars {
            self.panel.lock().await.clear();
            return SearchOutcome::Cleared;
        }

        let response = match self.backend.query(query).await {
            Ok(response) => response,
            Err(error) => {
                warn!(query = %query, error = %error, "stock query failed");
                return SearchOutcome::Failed;
            }
        };

        let mut panel = self.panel.lock().await;
        if self.latest.load(Ordering::SeqCst) != ticket {
            debug!(query = %query, ticket, "discarding stale stock query response");
            return SearchOutcome::Stale { ticket };
        }

        *panel = ResultsPanel::from_records(&response.results);
        SearchOutcome::Rendered {
            items: response.results.len(),
        }
    }

    pub async fn panel(&self) -> ResultsPanel {
        self.panel.lock().await.clone()
    }
}
