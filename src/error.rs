use thiserror::Error;

/// Errors surfaced by the recipe-scout library.
///
/// The search path itself never returns these: per-strategy and per-lookup
/// failures degrade to empty result lists. What remains fatal is client and
/// configuration construction plus favorites persistence writes.
#[derive(Error, Debug)]
pub enum ScoutError {
    /// HTTP transport failure
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Favorites persistence I/O failure
    #[error("Favorites store I/O error: {0}")]
    StoreIo(#[from] std::io::Error),

    /// Favorites serialization failure
    #[error("Favorites serialization error: {0}")]
    StoreSerde(#[from] serde_json::Error),
}
