use std::time::Duration;

use log::debug;
use reqwest::Client;
use serde::Deserialize;

use crate::config::CatalogConfig;
use crate::error::ScoutError;
use crate::model::{MealsResponse, PartialRecipe, Recipe};

const USER_AGENT: &str = "Mozilla/5.0 (compatible; RecipeScout/0.3)";

/// Client for the upstream recipe catalog (TheMealDB-compatible API).
///
/// One instance wraps one `reqwest::Client`; all methods are plain GETs with
/// no retries beyond the transport timeout. A `null` `meals` field in any
/// response decodes as zero results, never as an error.
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

#[derive(Deserialize)]
struct CategoryName {
    #[serde(rename = "strCategory")]
    name: String,
}

#[derive(Deserialize)]
struct AreaName {
    #[serde(rename = "strArea")]
    name: String,
}

impl CatalogClient {
    pub fn new(config: &CatalogConfig) -> Result<Self, ScoutError> {
        Self::with_base_url(&config.base_url, Duration::from_secs(config.timeout))
    }

    /// Build against an explicit base URL, mainly for tests against a mock
    /// server. The URL is taken without a trailing slash.
    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self, ScoutError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Full-record search by recipe name.
    pub async fn search_by_name(&self, query: &str) -> Result<Vec<Recipe>, ScoutError> {
        self.fetch_list(&format!("search.php?s={}", encode(query))).await
    }

    /// Partial-record search by ingredient name.
    pub async fn filter_by_ingredient(&self, query: &str) -> Result<Vec<PartialRecipe>, ScoutError> {
        self.fetch_list(&format!("filter.php?i={}", encode(query))).await
    }

    /// Partial-record search by category name.
    pub async fn filter_by_category(&self, query: &str) -> Result<Vec<PartialRecipe>, ScoutError> {
        self.fetch_list(&format!("filter.php?c={}", encode(query))).await
    }

    /// Partial-record search by cuisine area name.
    pub async fn filter_by_area(&self, query: &str) -> Result<Vec<PartialRecipe>, ScoutError> {
        self.fetch_list(&format!("filter.php?a={}", encode(query))).await
    }

    /// Resolve one identifier to its full record. `Ok(None)` when the
    /// catalog has no match.
    pub async fn lookup(&self, id: &str) -> Result<Option<Recipe>, ScoutError> {
        let mut records: Vec<Recipe> =
            self.fetch_list(&format!("lookup.php?i={}", encode(id))).await?;
        Ok(if records.is_empty() {
            None
        } else {
            Some(records.swap_remove(0))
        })
    }

    /// Fetch one random full record.
    pub async fn random(&self) -> Result<Option<Recipe>, ScoutError> {
        let mut records: Vec<Recipe> = self.fetch_list("random.php").await?;
        Ok(if records.is_empty() {
            None
        } else {
            Some(records.swap_remove(0))
        })
    }

    /// All valid category names, for filter pickers.
    pub async fn list_categories(&self) -> Result<Vec<String>, ScoutError> {
        let names: Vec<CategoryName> = self.fetch_list("list.php?c=list").await?;
        Ok(names.into_iter().map(|c| c.name).collect())
    }

    /// All valid cuisine area names, for filter pickers.
    pub async fn list_areas(&self) -> Result<Vec<String>, ScoutError> {
        let names: Vec<AreaName> = self.fetch_list("list.php?a=list").await?;
        Ok(names.into_iter().map(|a| a.name).collect())
    }

    async fn fetch_list<T: serde::de::DeserializeOwned>(
        &self,
        path_and_query: &str,
    ) -> Result<Vec<T>, ScoutError> {
        let url = format!("{}/{}", self.base_url, path_and_query);
        debug!("GET {}", url);
        let response: MealsResponse<T> = self.client.get(&url).send().await?.json().await?;
        Ok(response.into_list())
    }
}

fn encode(value: &str) -> String {
    // Query values only; the catalog takes simple words but spaces and
    // reserved characters still need escaping.
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            b' ' => out.push_str("%20"),
            other => out.push_str(&format!("%{:02X}", other)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    fn client(server: &Server) -> CatalogClient {
        CatalogClient::with_base_url(&server.url(), Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_encode_query_values() {
        assert_eq!(encode("chicken"), "chicken");
        assert_eq!(encode("green curry"), "green%20curry");
        assert_eq!(encode("a&b"), "a%26b");
    }

    #[tokio::test]
    async fn test_search_by_name() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/search.php?s=arrabiata")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"meals": [{
                    "idMeal": "52771",
                    "strMeal": "Spicy Arrabiata Penne",
                    "strCategory": "Vegetarian",
                    "strArea": "Italian",
                    "strInstructions": "Bring a large pot of water to a boil.",
                    "strMealThumb": "https://example.com/penne.jpg",
                    "strYoutube": "",
                    "strIngredient1": "penne rigate",
                    "strMeasure1": "1 pound"
                }]}"#,
            )
            .create_async()
            .await;

        let records = client(&server).search_by_name("arrabiata").await.unwrap();
        mock.assert_async().await;

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "52771");
        assert_eq!(records[0].category.as_deref(), Some("Vegetarian"));
        assert_eq!(records[0].ingredients().len(), 1);
    }

    #[tokio::test]
    async fn test_null_meals_is_empty() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/filter.php?i=nothing")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"meals": null}"#)
            .create_async()
            .await;

        let records = client(&server).filter_by_ingredient("nothing").await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_lookup_no_match() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/lookup.php?i=0")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"meals": null}"#)
            .create_async()
            .await;

        let record = client(&server).lookup("0").await.unwrap();
        assert!(record.is_none());
    }

    #[tokio::test]
    async fn test_malformed_body_is_an_error() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/search.php?s=broken")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        // The client reports the decode failure; the search engine is the
        // layer that degrades it to an empty bucket.
        let result = client(&server).search_by_name("broken").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_list_categories() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/list.php?c=list")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"meals": [{"strCategory": "Beef"}, {"strCategory": "Dessert"}]}"#)
            .create_async()
            .await;

        let names = client(&server).list_categories().await.unwrap();
        assert_eq!(names, vec!["Beef", "Dessert"]);
    }
}
