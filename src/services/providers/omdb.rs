/// OMDb API provider
///
/// Primary movie source. Title lookups use `?t=` with the full plot so the
/// menu prompt has something to work with; searches use `?s=`.
use crate::{
    error::MovieApiError,
    models::{MovieDetails, MovieSearchResult, OmdbSearchResponse, OmdbTitleResponse},
    services::providers::{fetch_json, MovieProvider},
};
use reqwest::Client as HttpClient;

const PROVIDER: &str = "OMDb";

#[derive(Clone)]
pub struct OmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl OmdbProvider {
    pub fn new(http_client: HttpClient, api_key: String, api_url: String) -> Self {
        Self {
            http_client,
            api_key,
            api_url,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/", self.api_url.trim_end_matches('/'))
    }
}

#[async_trait::async_trait]
impl MovieProvider for OmdbProvider {
    async fn fetch_details(&self, title: &str) -> Result<MovieDetails, MovieApiError> {
        tracing::info!(title = %title, provider = PROVIDER, "Looking up movie");

        let request = self.http_client.get(self.endpoint()).query(&[
            ("t", title),
            ("plot", "full"),
            ("type", "movie"),
            ("apikey", self.api_key.as_str()),
        ]);
        let response: OmdbTitleResponse = fetch_json(request, PROVIDER).await?;

        if !response.is_success() {
            let message = response
                .error
                .clone()
                .unwrap_or_else(|| "Movie not found".to_string());
            return Err(MovieApiError::NotFound(message));
        }

        Ok(response.into())
    }

    async fn search(&self, query: &str) -> Result<Vec<MovieSearchResult>, MovieApiError> {
        tracing::info!(query = %query, provider = PROVIDER, "Searching movies");

        let request = self.http_client.get(self.endpoint()).query(&[
            ("s", query),
            ("type", "movie"),
            ("apikey", self.api_key.as_str()),
        ]);
        let response: OmdbSearchResponse = fetch_json(request, PROVIDER).await?;

        if response.response != "True" {
            return Ok(Vec::new());
        }

        Ok(response.search.into_iter().map(MovieSearchResult::from).collect())
    }

    fn name(&self) -> &'static str {
        PROVIDER
    }
}
