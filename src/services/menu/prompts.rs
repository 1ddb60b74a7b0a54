use crate::models::{MovieDetails, RecipeSummary};

const MENU_SCHEMA: &str =
    r#"{"items": [{"name": "Item", "reason": "Why it matters"}], "notes": "short summary"}"#;

/// First pass: plan the party menu from verified movie details
pub fn party_planner() -> String {
    format!(
        "You are planning a viewing party for a movie whose details have already been verified. \
         Build a menu of iconic food or drink items from the film. \
         Keep responses concise and structured. \
         Respond ONLY as strict JSON with this schema: {}",
        MENU_SCHEMA
    )
}

/// Direct food-items pass used when the planner output is unusable
pub fn movie_food_items() -> String {
    format!(
        "You are given movie details (title, year, plot). \
         List exactly 5 iconic food or drink items that are explicitly shown or mentioned in the film. \
         Exclude non-food items (e.g., cigarettes). \
         Respond ONLY as strict JSON with this schema: {}",
        MENU_SCHEMA
    )
}

/// Formatting-only pass that repairs a draft menu
pub fn menu_formatter() -> String {
    format!(
        "You will be given a draft menu response. Convert it to strict JSON that \
         matches this schema exactly: {} \
         Return ONLY JSON. If data is missing, return empty lists and an explanatory notes string.",
        MENU_SCHEMA
    )
}

pub const RECIPE_WRITER: &str = "You receive a single menu item and must return exactly one recipe. \
     Use the suggested source when one is given. \
     Generate a concise recipe with ingredients and steps. \
     Respond ONLY as strict JSON: \
     {\"title\": \"Recipe\", \"source\": \"Site\", \"url\": \"https://...\", \
     \"ingredients\": [\"...\"], \"steps\": [\"...\"]}";

pub fn planner_input(details: &MovieDetails) -> String {
    format!(
        "Movie title: {} ({}). Plot: {}\nBuild the menu.",
        details.title, details.year, details.plot
    )
}

pub fn food_items_input(details: &MovieDetails) -> String {
    format!(
        "Movie title: {} ({}). Plot: {}",
        details.title, details.year, details.plot
    )
}

pub fn recipe_input(item_name: &str, seed: Option<&RecipeSummary>) -> String {
    match seed {
        Some(seed) if !seed.title.is_empty() => format!(
            "Menu item: {}\nSuggested source: {} ({}) {}",
            item_name, seed.title, seed.source, seed.url
        ),
        _ => format!("Menu item: {}", item_name),
    }
}

pub fn food_photo(item_name: &str) -> String {
    format!(
        "Studio-lit food photography, overhead view of {}, appetizing, high detail, soft shadows.",
        item_name
    )
}
