/// Spoonacular recipe search, used when an API key is configured
use crate::{
    error::{AppError, AppResult},
    models::{recipe::SpoonacularSearchResponse, RecipeSummary},
    services::providers::{fetch_json, RecipeProvider},
};
use reqwest::Client as HttpClient;

const PROVIDER: &str = "Spoonacular";

#[derive(Clone)]
pub struct SpoonacularProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl SpoonacularProvider {
    pub fn new(http_client: HttpClient, api_key: String, api_url: String) -> Self {
        Self {
            http_client,
            api_key,
            api_url,
        }
    }
}

#[async_trait::async_trait]
impl RecipeProvider for SpoonacularProvider {
    async fn search_recipes(&self, query: &str, limit: usize) -> AppResult<Vec<RecipeSummary>> {
        let url = format!("{}/recipes/complexSearch", self.api_url.trim_end_matches('/'));
        let number = limit.to_string();
        let request = self.http_client.get(&url).query(&[
            ("query", query),
            ("number", number.as_str()),
            ("apiKey", self.api_key.as_str()),
        ]);

        let response: SpoonacularSearchResponse = fetch_json(request, PROVIDER)
            .await
            .map_err(|_| AppError::ExternalApi("Recipe search failed".to_string()))?;

        Ok(response
            .results
            .into_iter()
            .take(limit)
            .map(RecipeSummary::from)
            .collect())
    }

    fn name(&self) -> &'static str {
        PROVIDER
    }
}
