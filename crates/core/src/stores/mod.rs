pub mod fetcher;
pub mod preferences;
pub mod stock_query;

pub use fetcher::{HttpFetcher, ScriptProbeRegistry};
pub use preferences::{JsonFilePreferences, MemoryPreferences};
pub use stock_query::HttpStockQuery;
