use axum::{extract::State, Json};
use serde::Deserialize;
use std::sync::Arc;

use crate::{error::AppResult, models::GoogleUser, routes::AppState};

#[derive(Debug, Deserialize)]
pub struct GoogleTokenRequest {
    pub id_token: String,
}

/// Handler for Google sign-in endpoint
pub async fn google(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GoogleTokenRequest>,
) -> AppResult<Json<GoogleUser>> {
    let user = state.auth.verify(&request.id_token).await?;
    Ok(Json(user))
}
