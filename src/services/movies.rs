use std::sync::Arc;

use crate::{
    error::MovieApiError,
    models::{MovieDetails, MovieSearchResult},
    services::providers::MovieProvider,
};

/// Picks the movie provider for lookups and searches.
///
/// The primary provider is used whenever it is configured. The secondary is
/// only consulted when the primary has no key; a failing primary is not
/// retried against the secondary.
#[derive(Clone, Default)]
pub struct MovieResolver {
    primary: Option<Arc<dyn MovieProvider>>,
    secondary: Option<Arc<dyn MovieProvider>>,
}

impl MovieResolver {
    pub fn new(
        primary: Option<Arc<dyn MovieProvider>>,
        secondary: Option<Arc<dyn MovieProvider>>,
    ) -> Self {
        Self { primary, secondary }
    }

    fn provider(&self) -> Result<&Arc<dyn MovieProvider>, MovieApiError> {
        self.primary
            .as_ref()
            .or(self.secondary.as_ref())
            .ok_or(MovieApiError::NotConfigured)
    }

    /// Verifies a movie exists and returns its details
    pub async fn fetch_details(&self, title: &str) -> Result<MovieDetails, MovieApiError> {
        let provider = self.provider()?;
        tracing::info!(title = %title, provider = provider.name(), "Using provider for lookup");
        provider.fetch_details(title).await
    }

    pub async fn search(&self, query: &str) -> Result<Vec<MovieSearchResult>, MovieApiError> {
        let provider = self.provider()?;
        tracing::info!(query = %query, provider = provider.name(), "Using provider for search");
        provider.search(query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::providers::MockMovieProvider;

    fn details(title: &str) -> MovieDetails {
        MovieDetails {
            title: title.to_string(),
            year: "1994".to_string(),
            plot: String::new(),
            imdb_id: String::new(),
        }
    }

    #[tokio::test]
    async fn test_primary_used_when_configured() {
        let mut primary = MockMovieProvider::new();
        primary.expect_name().return_const("OMDb");
        primary
            .expect_fetch_details()
            .times(1)
            .returning(|title| Ok(details(title)));

        let mut secondary = MockMovieProvider::new();
        secondary.expect_fetch_details().never();

        let resolver = MovieResolver::new(Some(Arc::new(primary)), Some(Arc::new(secondary)));
        let result = resolver.fetch_details("Pulp Fiction").await.unwrap();
        assert_eq!(result.title, "Pulp Fiction");
    }

    #[tokio::test]
    async fn test_secondary_used_only_without_primary() {
        let mut secondary = MockMovieProvider::new();
        secondary.expect_name().return_const("TMDB");
        secondary
            .expect_search()
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let resolver = MovieResolver::new(None, Some(Arc::new(secondary)));
        assert!(resolver.search("alien").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_primary_failure_does_not_fall_through() {
        let mut primary = MockMovieProvider::new();
        primary.expect_name().return_const("OMDb");
        primary
            .expect_fetch_details()
            .returning(|_| Err(MovieApiError::RequestFailed { provider: "OMDb" }));

        let mut secondary = MockMovieProvider::new();
        secondary.expect_fetch_details().never();

        let resolver = MovieResolver::new(Some(Arc::new(primary)), Some(Arc::new(secondary)));
        let err = resolver.fetch_details("Jaws").await.unwrap_err();
        assert!(matches!(err, MovieApiError::RequestFailed { .. }));
    }

    #[tokio::test]
    async fn test_not_configured() {
        let resolver = MovieResolver::default();
        let err = resolver.fetch_details("Jaws").await.unwrap_err();
        assert!(matches!(err, MovieApiError::NotConfigured));
        assert_eq!(
            err.to_string(),
            "OMDB_API_KEY or TMDB_API_KEY must be configured"
        );
    }
}
