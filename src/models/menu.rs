use serde::{Deserialize, Serialize};

use super::Recipe;

/// Maximum number of items kept on a menu
pub const MAX_MENU_ITEMS: usize = 5;

/// One food or drink item on a movie menu
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    pub name: String,
    pub reason: String,
    /// `data:image/png;base64,...` photo of the item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe: Option<Recipe>,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reason: reason.into(),
            image_data: None,
            recipe: None,
        }
    }
}

/// A themed menu for one movie
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuResponse {
    pub items: Vec<MenuItem>,
    #[serde(default)]
    pub notes: String,
}

impl MenuResponse {
    /// A menu without items, carrying an explanation in `notes`
    pub fn empty(notes: impl Into<String>) -> Self {
        Self {
            items: Vec::new(),
            notes: notes.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_item_skips_missing_enrichment() {
        let item = MenuItem::new("Royale with Cheese", "Vincent's Paris story");
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["name"], "Royale with Cheese");
        assert!(json.get("image_data").is_none());
        assert!(json.get("recipe").is_none());
    }

    #[test]
    fn test_menu_response_notes_default() {
        let menu: MenuResponse =
            serde_json::from_str(r#"{"items": [{"name": "Milkshake", "reason": "$5"}]}"#).unwrap();
        assert_eq!(menu.notes, "");
        assert_eq!(menu.items.len(), 1);
    }

    #[test]
    fn test_menu_item_requires_reason() {
        let result = serde_json::from_str::<MenuItem>(r#"{"name": "Milkshake"}"#);
        assert!(result.is_err());
    }
}
