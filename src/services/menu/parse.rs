//! Coercion of free-form generator output into a `MenuResponse`.

use serde_json::{json, Map, Value};

use crate::models::{menu::MAX_MENU_ITEMS, MenuResponse};

/// Pulls a JSON object out of generator output.
///
/// Code fences are stripped first. When the remaining text does not open
/// with `{`, the outermost `{ ... }` span is parsed instead. Anything that is
/// not a JSON object yields `None`.
pub fn extract_json(raw: &str) -> Option<Map<String, Value>> {
    let mut cleaned = raw.trim().to_string();

    if cleaned.starts_with("```") {
        cleaned = cleaned
            .trim_matches('`')
            .replacen("json", "", 1)
            .trim()
            .to_string();
    }

    if !cleaned.starts_with('{') {
        if let (Some(start), Some(end)) = (cleaned.find('{'), cleaned.rfind('}')) {
            if end > start {
                cleaned = cleaned[start..=end].to_string();
            }
        }
    }

    match serde_json::from_str(&cleaned) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

/// Turns a bare list of item names into `{name, reason}` objects and caps
/// the list at `MAX_MENU_ITEMS`.
pub fn coerce_menu_payload(payload: &mut Map<String, Value>) {
    if let Some(Value::Array(items)) = payload.get_mut("items") {
        if matches!(items.first(), Some(Value::String(_))) {
            *items = items
                .drain(..)
                .map(|name| json!({ "name": name, "reason": "" }))
                .collect();
        }
        items.truncate(MAX_MENU_ITEMS);
    }
}

/// Extracts, coerces and validates a menu. Returns `None` when the output
/// does not fit the menu schema.
pub fn parse_menu_output(raw: &str) -> Option<MenuResponse> {
    let mut payload = extract_json(raw)?;
    coerce_menu_payload(&mut payload);
    serde_json::from_value(Value::Object(payload)).ok()
}
