/// Upstream data providers
///
/// Movie metadata (OMDb, TMDB) and recipe search (Spoonacular, TheMealDB) sit
/// behind small traits so the resolver and the menu pipeline can pick a
/// provider from configuration and be tested without the network.
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::{
    error::{AppResult, MovieApiError, ProviderError},
    models::{MovieDetails, MovieSearchResult, RecipeSummary},
};

pub mod mealdb;
pub mod omdb;
pub mod spoonacular;
pub mod tmdb;

pub use mealdb::MealDbProvider;
pub use omdb::OmdbProvider;
pub use spoonacular::SpoonacularProvider;
pub use tmdb::TmdbProvider;

/// Longest slice of an upstream error body that is logged
const ERROR_BODY_LOG_LIMIT: usize = 500;

/// Trait for movie metadata providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MovieProvider: Send + Sync {
    /// Look up a single movie by title
    ///
    /// Returns `MovieApiError::NotFound` when the provider answered without a match.
    async fn fetch_details(&self, title: &str) -> Result<MovieDetails, MovieApiError>;

    /// Search for movies whose title matches the query
    async fn search(&self, query: &str) -> Result<Vec<MovieSearchResult>, MovieApiError>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Trait for recipe search providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RecipeProvider: Send + Sync {
    /// Search recipes by free text, returning at most `limit` hits
    async fn search_recipes(&self, query: &str, limit: usize) -> AppResult<Vec<RecipeSummary>>;

    fn name(&self) -> &'static str;
}

/// Sends a request and decodes the JSON body.
///
/// Transport errors, non-2xx statuses and undecodable bodies are logged with
/// the provider name and collapsed into a `ProviderError`.
pub(crate) async fn fetch_json<T: DeserializeOwned>(
    request: RequestBuilder,
    provider: &'static str,
) -> Result<T, ProviderError> {
    let response = request.send().await.map_err(|e| {
        tracing::error!(provider = %provider, error = %e, "Upstream request failed");
        ProviderError {
            provider,
            reason: e.to_string(),
        }
    })?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let body: String = body.chars().take(ERROR_BODY_LOG_LIMIT).collect();
        tracing::error!(
            provider = %provider,
            status = %status,
            body = %body,
            "Upstream returned error status"
        );
        return Err(ProviderError {
            provider,
            reason: format!("status {}", status),
        });
    }

    response.json::<T>().await.map_err(|e| {
        tracing::error!(provider = %provider, error = %e, "Failed to decode upstream response");
        ProviderError {
            provider,
            reason: e.to_string(),
        }
    })
}
