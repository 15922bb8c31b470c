use futures::future::join_all;
use log::debug;

use crate::client::CatalogClient;
use crate::model::{PartialRecipe, Recipe};

/// Resolve partial records to full records via concurrent detail lookups.
///
/// All lookups are issued at once (no batching, no throttling) and the step
/// settles only after every lookup has settled. Results are collected
/// positionally, so output order always follows input order even though
/// lookups complete out of order. A lookup that fails or finds no match is
/// dropped silently; the output list may be shorter than the input.
pub async fn hydrate(client: &CatalogClient, partials: &[PartialRecipe]) -> Vec<Recipe> {
    if partials.is_empty() {
        return Vec::new();
    }

    let lookups = partials.iter().map(|partial| client.lookup(&partial.id));
    let settled = join_all(lookups).await;

    let mut records = Vec::with_capacity(partials.len());
    for (partial, outcome) in partials.iter().zip(settled) {
        match outcome {
            Ok(Some(record)) => records.push(record),
            Ok(None) => debug!("lookup {} returned no record, dropping", partial.id),
            Err(err) => debug!("lookup {} failed ({}), dropping", partial.id, err),
        }
    }
    records
}
