//! Movie menu pipeline.
//!
//! `build_menu` verifies the movie, asks the generator for a menu, repairs or
//! regenerates output that does not fit the menu schema, then attaches a
//! photo and a recipe to every item before caching the result.

use std::sync::Arc;

use futures::stream::{self, StreamExt};

use crate::{
    db::{CacheKey, MenuCache},
    models::{MenuResponse, MovieDetails, Recipe},
    services::{images::ImageService, llm::TextGenerator, movies::MovieResolver, recipes::RecipeService},
};

pub mod parse;
pub mod prompts;

use parse::parse_menu_output;

/// Attempts allowed for the direct food-items regeneration
const DIRECT_RETRY_MAX_TURNS: usize = 2;

pub const NOTES_GENERATION_FAILED: &str = "Menu generation failed";
pub const NOTES_NO_ITEMS: &str = "No menu items were provided.";

#[derive(Clone)]
pub struct MenuOrchestrator {
    movies: MovieResolver,
    generator: Arc<dyn TextGenerator>,
    images: ImageService,
    recipes: RecipeService,
    cache: MenuCache,
    concurrency: usize,
}

impl MenuOrchestrator {
    pub fn new(
        movies: MovieResolver,
        generator: Arc<dyn TextGenerator>,
        images: ImageService,
        recipes: RecipeService,
        cache: MenuCache,
        concurrency: usize,
    ) -> Self {
        Self {
            movies,
            generator,
            images,
            recipes,
            cache,
            concurrency: concurrency.max(1),
        }
    }

    /// Builds (or loads) the themed menu for a movie title.
    ///
    /// Never fails: problems are reported through an empty menu whose
    /// `notes` explain what went wrong.
    pub async fn build_menu(&self, title: &str) -> MenuResponse {
        let key = CacheKey::menu(title);

        let menu = match self.cache.get_from_cache::<MenuResponse>(&key).await {
            Some(cached) => {
                tracing::info!(title = %title, "Menu cache hit");
                cached
            }
            None => match self.generate_menu(title).await {
                Ok(menu) => menu,
                Err(empty) => return empty,
            },
        };

        let menu = self.enrich(menu).await;
        self.cache.set_in_cache(&key, &menu).await;
        menu
    }

    /// Runs the verify, brainstorm, repair and regenerate steps. The error
    /// side carries the empty menu to return.
    async fn generate_menu(&self, title: &str) -> Result<MenuResponse, MenuResponse> {
        let details = self.movies.fetch_details(title).await.map_err(|e| {
            tracing::error!(title = %title, error = %e, "Movie lookup failed for menu");
            MenuResponse::empty(e.to_string())
        })?;

        let raw = self
            .generator
            .generate(&prompts::party_planner(), &prompts::planner_input(&details))
            .await
            .map_err(|e| {
                tracing::error!(title = %title, error = %e, "Menu generation failed");
                MenuResponse::empty(NOTES_GENERATION_FAILED)
            })?;

        let mut parsed = parse_menu_output(&raw);
        if parsed.is_none() {
            tracing::warn!(title = %title, "Menu output failed schema validation, attempting repair");
            tracing::debug!(raw = %truncate(&raw, 2000), "Raw menu output");
            parsed = self.repair(title, &raw).await;
        }

        let has_items = |menu: &Option<MenuResponse>| menu.as_ref().is_some_and(|m| !m.items.is_empty());

        if !has_items(&parsed) {
            tracing::warn!(title = %title, "Menu items missing, retrying with direct food prompt");
            parsed = self.regenerate(title, &details).await;
        }

        match parsed {
            Some(menu) if !menu.items.is_empty() => Ok(menu),
            _ => Err(MenuResponse::empty(NOTES_NO_ITEMS)),
        }
    }

    /// Formatting-only pass over unparseable output
    async fn repair(&self, title: &str, raw: &str) -> Option<MenuResponse> {
        match self.generator.generate(&prompts::menu_formatter(), raw).await {
            Ok(repaired) => {
                tracing::debug!(repaired = %truncate(&repaired, 2000), "Repaired menu output");
                parse_menu_output(&repaired)
            }
            Err(e) => {
                tracing::error!(title = %title, error = %e, "Menu format repair failed");
                None
            }
        }
    }

    /// Direct food-items generation, bounded by `DIRECT_RETRY_MAX_TURNS`
    async fn regenerate(&self, title: &str, details: &MovieDetails) -> Option<MenuResponse> {
        let instructions = prompts::movie_food_items();
        let input = prompts::food_items_input(details);

        for turn in 1..=DIRECT_RETRY_MAX_TURNS {
            match self.generator.generate(&instructions, &input).await {
                Ok(raw) => match parse_menu_output(&raw) {
                    Some(menu) if !menu.items.is_empty() => return Some(menu),
                    _ => tracing::warn!(title = %title, turn, "Direct menu retry produced no items"),
                },
                Err(e) => {
                    tracing::error!(title = %title, turn, error = %e, "Direct menu retry failed");
                    return None;
                }
            }
        }

        None
    }

    /// Attaches photos and recipes. Images and recipes are fetched in
    /// parallel with each other, each fan-out bounded by `concurrency`.
    /// Recipes are fetched again on every build, cached menus included.
    async fn enrich(&self, mut menu: MenuResponse) -> MenuResponse {
        let images = stream::iter(menu.items.clone())
            .map(move |item| async move { self.images.image_for(&item).await })
            .buffered(self.concurrency)
            .collect::<Vec<Option<String>>>();

        let names: Vec<String> = menu.items.iter().map(|item| item.name.clone()).collect();
        let recipes = stream::iter(names)
            .map(move |name| async move { self.recipes.recipe_for(&name).await })
            .buffered(self.concurrency)
            .collect::<Vec<Recipe>>();

        let (images, recipes) = tokio::join!(images, recipes);

        for ((item, image), recipe) in menu.items.iter_mut().zip(images).zip(recipes) {
            if image.is_some() {
                item.image_data = image;
            }
            if !recipe.title.is_empty() {
                item.recipe = Some(recipe);
            }
        }

        menu
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
