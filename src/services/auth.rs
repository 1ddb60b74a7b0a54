use reqwest::Client as HttpClient;

use crate::{
    error::{AppError, AppResult},
    models::{user::GoogleTokenClaims, GoogleUser},
};

const GOOGLE_ISSUERS: [&str; 2] = ["accounts.google.com", "https://accounts.google.com"];

/// Verifies Google ID tokens via the `tokeninfo` endpoint
#[derive(Clone)]
pub struct GoogleVerifier {
    http_client: HttpClient,
    client_id: String,
    tokeninfo_url: String,
}

impl GoogleVerifier {
    pub fn new(http_client: HttpClient, client_id: String, tokeninfo_url: String) -> Self {
        Self {
            http_client,
            client_id,
            tokeninfo_url,
        }
    }

    pub async fn verify(&self, id_token: &str) -> AppResult<GoogleUser> {
        if self.client_id.is_empty() {
            return Err(AppError::Unauthorized(
                "GOOGLE_CLIENT_ID is not configured".to_string(),
            ));
        }

        let claims = self.fetch_claims(id_token).await.map_err(|e| {
            tracing::warn!(error = %e, "Google token verification failed");
            invalid_token()
        })?;

        self.check_claims(claims)
    }

    async fn fetch_claims(&self, id_token: &str) -> AppResult<GoogleTokenClaims> {
        let response = self
            .http_client
            .get(&self.tokeninfo_url)
            .query(&[("id_token", id_token)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::ExternalApi(format!(
                "tokeninfo returned status {}",
                response.status()
            )));
        }

        Ok(response.json().await?)
    }

    fn check_claims(&self, claims: GoogleTokenClaims) -> AppResult<GoogleUser> {
        if claims.aud != self.client_id {
            tracing::warn!(aud = %claims.aud, "Google token issued for another audience");
            return Err(invalid_token());
        }
        if !GOOGLE_ISSUERS.contains(&claims.iss.as_str()) {
            tracing::warn!(iss = %claims.iss, "Google token has unexpected issuer");
            return Err(invalid_token());
        }

        Ok(claims.into())
    }
}

fn invalid_token() -> AppError {
    AppError::Unauthorized("Invalid Google token".to_string())
}
