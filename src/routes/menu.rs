use axum::{extract::State, Extension, Json};
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::MenuResponse,
    routes::{movies::MovieRequest, AppState},
};

/// Handler for menu endpoint
pub async fn build(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<MovieRequest>,
) -> AppResult<Json<MenuResponse>> {
    let title = request.title.trim();
    if title.is_empty() {
        return Err(AppError::InvalidInput("Movie title is required".to_string()));
    }

    tracing::info!(request_id = %request_id, title = %title, "Processing menu request");

    let menu = state.menus.build_menu(title).await;

    tracing::info!(
        request_id = %request_id,
        items = menu.items.len(),
        "Menu completed"
    );

    Ok(Json(menu))
}
