use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::{MovieDetails, MovieSearchResult},
    routes::AppState,
};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    query: String,
}

#[derive(Debug, Deserialize)]
pub struct MovieRequest {
    pub title: String,
}

#[derive(Debug, Serialize)]
pub struct LookupResponse {
    pub message: String,
    pub movie: MovieDetails,
}

/// Handler for movie search endpoint
pub async fn search(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<SearchQuery>,
) -> AppResult<Json<Vec<MovieSearchResult>>> {
    let query = params.query.trim();
    if query.is_empty() {
        return Err(AppError::InvalidInput(
            "Search query cannot be empty".to_string(),
        ));
    }

    let results = state.movies.search(query).await?;

    tracing::info!(
        request_id = %request_id,
        query = %query,
        results = results.len(),
        "Movie search completed"
    );

    Ok(Json(results))
}

/// Handler for movie lookup endpoint.
///
/// Unlike a plain echo, the title is verified against the configured movie
/// provider, so the same 404/502/503 errors as `/movies/search` apply.
pub async fn lookup(
    State(state): State<Arc<AppState>>,
    Json(request): Json<MovieRequest>,
) -> AppResult<Json<LookupResponse>> {
    let title = request.title.trim();
    if title.is_empty() {
        return Err(AppError::InvalidInput("Movie title is required".to_string()));
    }

    let movie = state.movies.fetch_details(title).await?;

    Ok(Json(LookupResponse {
        message: format!("Thanks! You entered '{}'.", title),
        movie,
    }))
}
