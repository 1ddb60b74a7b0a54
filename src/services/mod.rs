pub mod auth;
pub mod images;
pub mod llm;
pub mod menu;
pub mod movies;
pub mod providers;
pub mod recipes;

pub use auth::GoogleVerifier;
pub use images::ImageService;
pub use llm::OpenAiClient;
pub use menu::MenuOrchestrator;
pub use movies::MovieResolver;
pub use recipes::RecipeService;
