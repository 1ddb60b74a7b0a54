/// TMDB API provider
///
/// Secondary movie source, used when no OMDb key is configured. TMDB has no
/// exact-title endpoint, so details come from the first search hit.
use crate::{
    error::MovieApiError,
    models::{MovieDetails, MovieSearchResult, TmdbSearchResponse},
    services::providers::{fetch_json, MovieProvider},
};
use reqwest::{Client as HttpClient, RequestBuilder};

const PROVIDER: &str = "TMDB";

/// How requests authenticate against TMDB
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TmdbAuth {
    /// `Authorization` header value, including the `Bearer ` prefix
    Bearer(String),
    /// v3 key sent as the `api_key` query parameter
    ApiKey(String),
    None,
}

impl TmdbAuth {
    /// Picks the credential to use. A read access token always wins; an API
    /// key that is already a bearer value or a JWT (`eyJ...`) is sent as a
    /// bearer token, anything else as a v3 query key.
    pub fn from_credentials(read_access_token: &str, api_key: &str) -> Self {
        let token = read_access_token.trim();
        if !token.is_empty() {
            return TmdbAuth::Bearer(bearer(token));
        }

        let key = api_key.trim();
        if key.is_empty() {
            TmdbAuth::None
        } else if key.starts_with("Bearer ") || key.starts_with("eyJ") {
            TmdbAuth::Bearer(bearer(key))
        } else {
            TmdbAuth::ApiKey(key.to_string())
        }
    }

    fn apply(&self, request: RequestBuilder) -> RequestBuilder {
        match self {
            TmdbAuth::Bearer(value) => request.header(reqwest::header::AUTHORIZATION, value),
            TmdbAuth::ApiKey(key) => request.query(&[("api_key", key.as_str())]),
            TmdbAuth::None => request,
        }
    }
}

fn bearer(token: &str) -> String {
    if token.starts_with("Bearer ") {
        token.to_string()
    } else {
        format!("Bearer {}", token)
    }
}

#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    auth: TmdbAuth,
    api_url: String,
}

impl TmdbProvider {
    pub fn new(http_client: HttpClient, auth: TmdbAuth, api_url: String) -> Self {
        Self {
            http_client,
            auth,
            api_url,
        }
    }

    async fn search_movie(&self, query: &str) -> Result<TmdbSearchResponse, MovieApiError> {
        let url = format!("{}/search/movie", self.api_url.trim_end_matches('/'));
        let request = self
            .http_client
            .get(&url)
            .query(&[("query", query), ("include_adult", "false")]);
        let request = self.auth.apply(request);

        Ok(fetch_json(request, PROVIDER).await?)
    }
}

#[async_trait::async_trait]
impl MovieProvider for TmdbProvider {
    async fn fetch_details(&self, title: &str) -> Result<MovieDetails, MovieApiError> {
        tracing::info!(title = %title, provider = PROVIDER, "Looking up movie");

        let response = self.search_movie(title).await?;
        response
            .results
            .into_iter()
            .next()
            .map(MovieDetails::from)
            .ok_or_else(|| MovieApiError::NotFound("Movie not found".to_string()))
    }

    async fn search(&self, query: &str) -> Result<Vec<MovieSearchResult>, MovieApiError> {
        tracing::info!(query = %query, provider = PROVIDER, "Searching movies");

        let response = self.search_movie(query).await?;
        Ok(response
            .results
            .into_iter()
            .map(MovieSearchResult::from)
            .collect())
    }

    fn name(&self) -> &'static str {
        PROVIDER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_access_token_preferred() {
        let auth = TmdbAuth::from_credentials("read-access-token", "my-v3-key");
        assert_eq!(auth, TmdbAuth::Bearer("Bearer read-access-token".to_string()));
    }

    #[test]
    fn test_read_access_token_keeps_existing_prefix() {
        let auth = TmdbAuth::from_credentials("Bearer abc", "");
        assert_eq!(auth, TmdbAuth::Bearer("Bearer abc".to_string()));
    }

    #[test]
    fn test_jwt_api_key_sent_as_bearer() {
        let auth = TmdbAuth::from_credentials("", "eyJ.test.token");
        assert_eq!(auth, TmdbAuth::Bearer("Bearer eyJ.test.token".to_string()));
    }

    #[test]
    fn test_plain_api_key_sent_as_query_param() {
        let auth = TmdbAuth::from_credentials("  ", "my-v3-key");
        assert_eq!(auth, TmdbAuth::ApiKey("my-v3-key".to_string()));
    }

    #[test]
    fn test_no_credentials() {
        assert_eq!(TmdbAuth::from_credentials("", " "), TmdbAuth::None);
    }

    #[test]
    fn test_apply_bearer_sets_header() {
        let client = HttpClient::new();
        let auth = TmdbAuth::Bearer("Bearer t".to_string());
        let request = auth.apply(client.get("http://test.local/search/movie")).build().unwrap();

        assert_eq!(request.headers()["authorization"], "Bearer t");
        assert!(request.url().query().is_none());
    }

    #[test]
    fn test_apply_api_key_sets_query() {
        let client = HttpClient::new();
        let auth = TmdbAuth::ApiKey("k".to_string());
        let request = auth.apply(client.get("http://test.local/search/movie")).build().unwrap();

        assert_eq!(request.url().query(), Some("api_key=k"));
        assert!(request.headers().get("authorization").is_none());
    }
}
