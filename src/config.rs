use std::path::PathBuf;

use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Comma-separated list of CORS origins
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: String,

    /// OAuth client id that Google ID tokens must be issued for
    #[serde(default)]
    pub google_client_id: String,

    #[serde(default = "default_google_tokeninfo_url")]
    pub google_tokeninfo_url: String,

    /// OMDb API key (primary movie provider)
    #[serde(default)]
    pub omdb_api_key: String,

    #[serde(default = "default_omdb_api_url")]
    pub omdb_api_url: String,

    /// TMDB v3 API key or v4 token (secondary movie provider)
    #[serde(default)]
    pub tmdb_api_key: String,

    /// TMDB read access token, preferred over `tmdb_api_key` when set
    #[serde(default, rename = "tmdb_api_read_access_token")]
    pub tmdb_read_access_token: String,

    #[serde(default = "default_tmdb_api_url")]
    pub tmdb_api_url: String,

    /// Spoonacular API key; TheMealDB is used when empty
    #[serde(default)]
    pub spoonacular_api_key: String,

    #[serde(default = "default_spoonacular_api_url")]
    pub spoonacular_api_url: String,

    #[serde(default = "default_mealdb_api_url")]
    pub mealdb_api_url: String,

    #[serde(default)]
    pub openai_api_key: String,

    #[serde(default = "default_openai_api_url")]
    pub openai_api_url: String,

    #[serde(default = "default_openai_model")]
    pub openai_model: String,

    #[serde(default = "default_openai_image_model")]
    pub openai_image_model: String,

    /// Root directory for the image and menu caches
    #[serde(default = "default_cache_dir")]
    pub cache_dir: PathBuf,

    /// Maximum number of concurrent image or recipe lookups per menu
    #[serde(default = "default_enrichment_concurrency")]
    pub enrichment_concurrency: usize,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_allowed_origins() -> String {
    "http://localhost:5173".to_string()
}

fn default_google_tokeninfo_url() -> String {
    "https://oauth2.googleapis.com/tokeninfo".to_string()
}

fn default_omdb_api_url() -> String {
    "https://www.omdbapi.com".to_string()
}

fn default_tmdb_api_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_spoonacular_api_url() -> String {
    "https://api.spoonacular.com".to_string()
}

fn default_mealdb_api_url() -> String {
    "https://www.themealdb.com".to_string()
}

fn default_openai_api_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_openai_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_openai_image_model() -> String {
    "gpt-image-1".to_string()
}

fn default_cache_dir() -> PathBuf {
    PathBuf::from("cache")
}

fn default_enrichment_concurrency() -> usize {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            allowed_origins: default_allowed_origins(),
            google_client_id: String::new(),
            google_tokeninfo_url: default_google_tokeninfo_url(),
            omdb_api_key: String::new(),
            omdb_api_url: default_omdb_api_url(),
            tmdb_api_key: String::new(),
            tmdb_read_access_token: String::new(),
            tmdb_api_url: default_tmdb_api_url(),
            spoonacular_api_key: String::new(),
            spoonacular_api_url: default_spoonacular_api_url(),
            mealdb_api_url: default_mealdb_api_url(),
            openai_api_key: String::new(),
            openai_api_url: default_openai_api_url(),
            openai_model: default_openai_model(),
            openai_image_model: default_openai_image_model(),
            cache_dir: default_cache_dir(),
            enrichment_concurrency: default_enrichment_concurrency(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// CORS origins with surrounding whitespace and empty entries removed
    pub fn allowed_origins(&self) -> Vec<String> {
        self.allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn image_cache_dir(&self) -> PathBuf {
        self.cache_dir.join("images")
    }

    pub fn menu_cache_dir(&self) -> PathBuf {
        self.cache_dir.join("menus")
    }
}
