use std::sync::Arc;

use crate::{
    models::{Recipe, RecipeSummary},
    services::{
        llm::TextGenerator,
        menu::{parse::extract_json, prompts},
        providers::RecipeProvider,
    },
};

/// Finds or writes one recipe per menu item.
///
/// A recipe search seeds the generator; when generation fails or returns
/// nothing usable, a deterministic placeholder recipe is built instead.
#[derive(Clone)]
pub struct RecipeService {
    provider: Arc<dyn RecipeProvider>,
    generator: Arc<dyn TextGenerator>,
}

impl RecipeService {
    pub fn new(provider: Arc<dyn RecipeProvider>, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            provider,
            generator,
        }
    }

    /// Top search hit for the item, if the search succeeds and finds anything
    async fn find_seed(&self, item_name: &str) -> Option<RecipeSummary> {
        match self.provider.search_recipes(item_name, 1).await {
            Ok(results) => results.into_iter().next(),
            Err(e) => {
                tracing::warn!(
                    item = %item_name,
                    provider = self.provider.name(),
                    error = %e,
                    "Recipe search failed"
                );
                None
            }
        }
    }

    pub async fn recipe_for(&self, item_name: &str) -> Recipe {
        let seed = self.find_seed(item_name).await;

        match self
            .generator
            .generate(prompts::RECIPE_WRITER, &prompts::recipe_input(item_name, seed.as_ref()))
            .await
        {
            Ok(raw) => {
                if let Some(recipe) = parse_recipe(&raw) {
                    return recipe;
                }
                tracing::warn!(item = %item_name, "Recipe output unusable, using fallback");
            }
            Err(e) => {
                tracing::error!(item = %item_name, error = %e, "Recipe generation failed");
            }
        }

        fallback_recipe(item_name, seed.as_ref())
    }
}

/// A recipe object with a non-empty title, or `None`
fn parse_recipe(raw: &str) -> Option<Recipe> {
    let payload = extract_json(raw)?;
    let recipe: Recipe = serde_json::from_value(serde_json::Value::Object(payload)).ok()?;
    (!recipe.title.trim().is_empty()).then_some(recipe)
}

/// Placeholder recipe built only from the item name and the search seed
pub fn fallback_recipe(item_name: &str, seed: Option<&RecipeSummary>) -> Recipe {
    let seed = seed.cloned().unwrap_or_default();
    let title = if seed.title.is_empty() {
        item_name.to_string()
    } else {
        seed.title
    };

    Recipe {
        title,
        source: seed.source,
        url: seed.url,
        ingredients: vec![
            format!("{} base ingredient", item_name),
            "Seasoning to taste".to_string(),
            "Optional garnish".to_string(),
        ],
        steps: vec![
            format!("Prepare the {} ingredients.", item_name),
            "Cook until done and season to taste.".to_string(),
            "Plate and add garnish.".to_string(),
        ],
    }
}
