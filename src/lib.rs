pub mod client;
pub mod config;
pub mod error;
pub mod favorites;
pub mod filter;
pub mod hydrate;
pub mod model;
pub mod search;

pub use client::CatalogClient;
pub use config::{CatalogConfig, MoodConfig};
pub use error::ScoutError;
pub use favorites::{FavoriteEntry, FavoritesBackend, FavoritesStore, JsonFileBackend};
pub use filter::{
    apply_filters, estimate_time_bucket, FilterSpec, Mood, MoodProfile, TimeBucket,
};
pub use model::{PartialRecipe, Recipe, SearchResults};
pub use search::SearchEngine;

/// Build a search engine from loaded configuration.
///
/// # Example
/// ```no_run
/// use recipe_scout::{search_engine, FilterSpec};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), recipe_scout::ScoutError> {
/// let engine = search_engine()?;
/// let results = engine.search("chicken", &FilterSpec::default()).await;
/// println!("{} name matches", results.by_name.len());
/// # Ok(())
/// # }
/// ```
pub fn search_engine() -> Result<SearchEngine, ScoutError> {
    let config = CatalogConfig::load()?;
    search_engine_with_config(&config)
}

pub fn search_engine_with_config(config: &CatalogConfig) -> Result<SearchEngine, ScoutError> {
    let client = CatalogClient::new(config)?;
    Ok(SearchEngine::new(client, config.moods.clone()))
}
