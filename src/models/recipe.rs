use serde::{Deserialize, Serialize};

/// Top hit of a recipe search, used to seed recipe generation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct RecipeSummary {
    pub title: String,
    pub source: String,
    pub url: String,
}

/// A concise recipe attached to a menu item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Recipe {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub steps: Vec<String>,
}

// ============================================================================
// Spoonacular API Types
// ============================================================================

/// Response of `GET /recipes/complexSearch`
#[derive(Debug, Clone, Deserialize)]
pub struct SpoonacularSearchResponse {
    #[serde(default)]
    pub results: Vec<SpoonacularRecipe>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpoonacularRecipe {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub source_url: Option<String>,
}

impl From<SpoonacularRecipe> for RecipeSummary {
    fn from(recipe: SpoonacularRecipe) -> Self {
        RecipeSummary {
            title: recipe.title,
            source: "Spoonacular".to_string(),
            url: recipe.source_url.unwrap_or_default(),
        }
    }
}

// ============================================================================
// TheMealDB API Types
// ============================================================================

/// Response of `GET /api/json/v1/1/search.php`; `meals` is null when nothing matches
#[derive(Debug, Clone, Deserialize)]
pub struct MealDbSearchResponse {
    #[serde(default)]
    pub meals: Option<Vec<MealDbMeal>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MealDbMeal {
    #[serde(default, rename = "strMeal")]
    pub name: String,
    #[serde(default, rename = "strSource")]
    pub source: Option<String>,
    #[serde(default, rename = "strYoutube")]
    pub youtube: Option<String>,
}

impl From<MealDbMeal> for RecipeSummary {
    fn from(meal: MealDbMeal) -> Self {
        let url = meal
            .source
            .filter(|s| !s.is_empty())
            .or(meal.youtube)
            .unwrap_or_default();

        RecipeSummary {
            title: meal.name,
            source: "TheMealDB".to_string(),
            url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mealdb_prefers_source_url() {
        let meal: MealDbMeal = serde_json::from_str(
            r#"{"strMeal": "Big Kahuna Burger", "strSource": "https://example.com/burger", "strYoutube": "https://youtube.com/x"}"#,
        )
        .unwrap();
        let summary: RecipeSummary = meal.into();
        assert_eq!(summary.url, "https://example.com/burger");
        assert_eq!(summary.source, "TheMealDB");
    }

    #[test]
    fn test_mealdb_falls_back_to_youtube() {
        let meal: MealDbMeal = serde_json::from_str(
            r#"{"strMeal": "Pancakes", "strSource": "", "strYoutube": "https://youtube.com/pancakes"}"#,
        )
        .unwrap();
        let summary: RecipeSummary = meal.into();
        assert_eq!(summary.url, "https://youtube.com/pancakes");
    }

    #[test]
    fn test_mealdb_null_meals() {
        let response: MealDbSearchResponse = serde_json::from_str(r#"{"meals": null}"#).unwrap();
        assert!(response.meals.is_none());
    }

    #[test]
    fn test_spoonacular_recipe_conversion() {
        let recipe: SpoonacularRecipe =
            serde_json::from_str(r#"{"id": 1, "title": "Milkshake", "sourceUrl": "https://s.test/1"}"#)
                .unwrap();
        let summary: RecipeSummary = recipe.into();
        assert_eq!(summary.title, "Milkshake");
        assert_eq!(summary.source, "Spoonacular");
        assert_eq!(summary.url, "https://s.test/1");
    }

    #[test]
    fn test_recipe_missing_lists_default_empty() {
        let recipe: Recipe = serde_json::from_str(r#"{"title": "Toast"}"#).unwrap();
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.steps.is_empty());
    }
}
