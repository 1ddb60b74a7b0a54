use serde::{Deserialize, Serialize};

/// Profile of a user signed in with Google
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GoogleUser {
    pub sub: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub picture: Option<String>,
}

/// Claims returned by Google's `tokeninfo` endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleTokenClaims {
    #[serde(default)]
    pub aud: String,
    #[serde(default)]
    pub iss: String,
    pub sub: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub picture: Option<String>,
}

impl From<GoogleTokenClaims> for GoogleUser {
    fn from(claims: GoogleTokenClaims) -> Self {
        GoogleUser {
            sub: claims.sub,
            email: claims.email,
            name: claims.name,
            picture: claims.picture,
        }
    }
}
