use std::sync::atomic::{AtomicU64, Ordering};

use log::{debug, warn};

use crate::client::CatalogClient;
use crate::config::MoodConfig;
use crate::error::ScoutError;
use crate::filter::{apply_filters, FilterSpec};
use crate::hydrate::hydrate;
use crate::model::{Recipe, SearchResults};

/// Multi-strategy search orchestrator.
///
/// One search fans out to the four strategy endpoints concurrently, hydrates
/// the three partial-record strategies, then applies the same filter spec to
/// each bucket independently. Strategy and lookup failures degrade to empty
/// buckets; the search itself never fails.
pub struct SearchEngine {
    client: CatalogClient,
    moods: MoodConfig,
    // Monotonic tag for result bundles. Overlapping searches are not
    // cancelled, so a slow earlier search can settle after a later one;
    // callers keep the bundle with the highest seq they have seen.
    seq: AtomicU64,
}

impl SearchEngine {
    pub fn new(client: CatalogClient, moods: MoodConfig) -> Self {
        Self {
            client,
            moods,
            seq: AtomicU64::new(0),
        }
    }

    /// Run all four strategies for `query` and filter each bucket against
    /// `spec`. Buckets are never merged or deduplicated against each other.
    pub async fn search(&self, query: &str, spec: &FilterSpec) -> SearchResults {
        let seq = self.seq.fetch_add(1, Ordering::Relaxed) + 1;
        debug!("search #{}: {:?} filters {:?}", seq, query, spec);

        let (by_name, by_ingredient, by_category, by_area) = tokio::join!(
            self.client.search_by_name(query),
            self.client.filter_by_ingredient(query),
            self.client.filter_by_category(query),
            self.client.filter_by_area(query),
        );

        let by_name = recover("name", by_name);
        let by_ingredient = recover("ingredient", by_ingredient);
        let by_category = recover("category", by_category);
        let by_area = recover("area", by_area);

        // Name search already returns full records; the other three need
        // hydration before category/area/time filters can apply.
        let (by_ingredient, by_category, by_area) = tokio::join!(
            hydrate(&self.client, &by_ingredient),
            hydrate(&self.client, &by_category),
            hydrate(&self.client, &by_area),
        );

        SearchResults {
            seq,
            by_name: apply_filters(by_name, spec, &self.moods),
            by_ingredient: apply_filters(by_ingredient, spec, &self.moods),
            by_category: apply_filters(by_category, spec, &self.moods),
            by_area: apply_filters(by_area, spec, &self.moods),
        }
    }

    /// Fetch one random record as a single-entry `by_name` bucket. The
    /// active filter spec is deliberately not applied on this path, and a
    /// failed fetch degrades to an empty bundle like any other strategy.
    pub async fn random_suggestion(&self) -> SearchResults {
        let seq = self.seq.fetch_add(1, Ordering::Relaxed) + 1;
        let by_name: Vec<Recipe> = recover(
            "random",
            self.client.random().await.map(|r| r.into_iter().collect()),
        );
        SearchResults {
            seq,
            by_name,
            ..Default::default()
        }
    }
}

fn recover<T>(strategy: &str, outcome: Result<Vec<T>, ScoutError>) -> Vec<T> {
    match outcome {
        Ok(records) => records,
        Err(err) => {
            warn!("{} strategy failed, using empty bucket: {}", strategy, err);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recover_degrades_to_empty() {
        let failed: Result<Vec<Recipe>, ScoutError> = Err(ScoutError::StoreIo(
            std::io::Error::new(std::io::ErrorKind::Other, "boom"),
        ));
        assert!(recover("name", failed).is_empty());

        let ok: Result<Vec<u8>, ScoutError> = Ok(vec![1, 2]);
        assert_eq!(recover("name", ok), vec![1, 2]);
    }
}
