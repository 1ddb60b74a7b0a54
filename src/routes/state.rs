use std::sync::Arc;
use std::time::Duration;

use reqwest::Client as HttpClient;

use crate::{
    config::Config,
    db::{DiskImageCache, MenuCache},
    error::AppResult,
    services::{
        providers::{
            tmdb::TmdbAuth, MealDbProvider, MovieProvider, OmdbProvider, RecipeProvider,
            SpoonacularProvider, TmdbProvider,
        },
        GoogleVerifier, ImageService, MenuOrchestrator, MovieResolver, OpenAiClient,
        RecipeService,
    },
};

const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);
/// Generative calls take far longer than metadata lookups
const GENERATION_TIMEOUT: Duration = Duration::from_secs(120);

/// Shared application state
pub struct AppState {
    pub config: Config,
    pub movies: MovieResolver,
    pub menus: MenuOrchestrator,
    pub auth: GoogleVerifier,
}

impl AppState {
    /// Wires providers, caches and the menu pipeline from configuration
    pub fn from_config(config: Config) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(UPSTREAM_TIMEOUT).build()?;
        let generation_client = HttpClient::builder().timeout(GENERATION_TIMEOUT).build()?;

        let movies = build_movie_resolver(&config, &http_client);

        let openai = Arc::new(OpenAiClient::new(
            generation_client,
            config.openai_api_key.clone(),
            config.openai_api_url.clone(),
            config.openai_model.clone(),
            config.openai_image_model.clone(),
        ));

        let recipe_provider: Arc<dyn RecipeProvider> = if config.spoonacular_api_key.is_empty() {
            Arc::new(MealDbProvider::new(
                http_client.clone(),
                config.mealdb_api_url.clone(),
            ))
        } else {
            Arc::new(SpoonacularProvider::new(
                http_client.clone(),
                config.spoonacular_api_key.clone(),
                config.spoonacular_api_url.clone(),
            ))
        };

        let images = ImageService::new(
            openai.clone(),
            DiskImageCache::new(config.image_cache_dir())?,
        );
        let recipes = RecipeService::new(recipe_provider, openai.clone());

        let menus = MenuOrchestrator::new(
            movies.clone(),
            openai,
            images,
            recipes,
            MenuCache::new(config.menu_cache_dir())?,
            config.enrichment_concurrency,
        );

        let auth = GoogleVerifier::new(
            http_client,
            config.google_client_id.clone(),
            config.google_tokeninfo_url.clone(),
        );

        tracing::info!(
            cache_dir = %config.cache_dir.display(),
            model = %config.openai_model,
            "Application state initialized"
        );

        Ok(Self {
            config,
            movies,
            menus,
            auth,
        })
    }
}

fn build_movie_resolver(config: &Config, http_client: &HttpClient) -> MovieResolver {
    let primary: Option<Arc<dyn MovieProvider>> = (!config.omdb_api_key.is_empty()).then(|| {
        Arc::new(OmdbProvider::new(
            http_client.clone(),
            config.omdb_api_key.clone(),
            config.omdb_api_url.clone(),
        )) as Arc<dyn MovieProvider>
    });

    let secondary: Option<Arc<dyn MovieProvider>> = (!config.tmdb_api_key.is_empty()).then(|| {
        let auth =
            TmdbAuth::from_credentials(&config.tmdb_read_access_token, &config.tmdb_api_key);
        Arc::new(TmdbProvider::new(
            http_client.clone(),
            auth,
            config.tmdb_api_url.clone(),
        )) as Arc<dyn MovieProvider>
    });

    MovieResolver::new(primary, secondary)
}
