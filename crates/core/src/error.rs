use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("invalid response from {backend}: {details}")]
    BackendResponse { backend: String, details: String },

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("url parse error: {0}")]
    Url(#[from] url::ParseError),
}

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("url parse error: {0}")]
    Url(#[from] url::ParseError),

    #[error("network error: {0}")]
    Network(String),

    #[error("seed asset {url} answered with status {status}")]
    BadSeedStatus { url: String, status: u16 },

    #[error("worker is {0}, cannot install")]
    InvalidState(String),

    #[error("worker registration failed: {0}")]
    Registration(String),
}

#[derive(Debug, Error)]
pub enum PageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialize error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("no table matches export target {0}")]
    UnknownTable(String),

    #[error("no storage location available: {0}")]
    StorageUnavailable(String),

    #[error("install prompt failed: {0}")]
    Prompt(String),
}
