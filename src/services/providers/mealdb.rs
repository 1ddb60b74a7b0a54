/// TheMealDB recipe search, the keyless default
use crate::{
    error::{AppError, AppResult},
    models::{recipe::MealDbSearchResponse, RecipeSummary},
    services::providers::{fetch_json, RecipeProvider},
};
use reqwest::Client as HttpClient;

const PROVIDER: &str = "TheMealDB";

#[derive(Clone)]
pub struct MealDbProvider {
    http_client: HttpClient,
    api_url: String,
}

impl MealDbProvider {
    pub fn new(http_client: HttpClient, api_url: String) -> Self {
        Self {
            http_client,
            api_url,
        }
    }
}

#[async_trait::async_trait]
impl RecipeProvider for MealDbProvider {
    async fn search_recipes(&self, query: &str, limit: usize) -> AppResult<Vec<RecipeSummary>> {
        let url = format!(
            "{}/api/json/v1/1/search.php",
            self.api_url.trim_end_matches('/')
        );
        let request = self.http_client.get(&url).query(&[("s", query)]);

        let response: MealDbSearchResponse = fetch_json(request, PROVIDER)
            .await
            .map_err(|_| AppError::ExternalApi("Recipe search failed".to_string()))?;

        Ok(response
            .meals
            .unwrap_or_default()
            .into_iter()
            .take(limit)
            .map(RecipeSummary::from)
            .collect())
    }

    fn name(&self) -> &'static str {
        PROVIDER
    }
}
