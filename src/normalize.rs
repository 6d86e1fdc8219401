//! API Payload Normalization
//!
//! The plant API names the same field differently across endpoints
//! (`id`/`plantId`/`_id`/`plant_id`, `price`/`cost`, ...) and wraps lists
//! under varying keys. Everything coming off the wire passes through here
//! once; the rest of the app only ever sees the canonical models. Missing
//! or malformed fields degrade to defaults instead of failing.

use serde_json::Value;

use crate::models::{Category, Plant, PlantDetails};

pub const PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1476887334197-56adbf254e1a?q=80&w=1200&auto=format&fit=crop";

const DEFAULT_PLANT_NAME: &str = "Unknown Plant";
const DEFAULT_CATEGORY_NAME: &str = "Unknown";
const DEFAULT_CARD_DESCRIPTION: &str = "Beautiful, eco-friendly plant.";
const DEFAULT_DETAILS_DESCRIPTION: &str = "No description available.";

/// First non-empty string under any of `keys`. JSON numbers are accepted
/// and stringified, so numeric ids normalize the same as text ids.
fn string_field(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match value.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// First numeric value under any of `keys`. Accepts numbers and numeric
/// strings ("5.99").
fn number_field(value: &Value, keys: &[&str]) -> Option<f64> {
    keys.iter().find_map(|key| match value.get(key) {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}

/// First array under any of `keys`.
fn array_field<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a Vec<Value>> {
    keys.iter()
        .find_map(|key| value.get(key).and_then(Value::as_array))
}

/// Normalize one plant record
pub fn plant(value: &Value) -> Plant {
    Plant {
        id: string_field(value, &["id", "plantId", "_id", "plant_id"]).unwrap_or_default(),
        name: string_field(value, &["name", "plant_name"])
            .unwrap_or_else(|| DEFAULT_PLANT_NAME.to_string()),
        image: string_field(value, &["image", "img", "thumbnail"])
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
        description: string_field(value, &["description", "short_description"])
            .unwrap_or_else(|| DEFAULT_CARD_DESCRIPTION.to_string()),
        category: string_field(value, &["category", "category_name"])
            .unwrap_or_else(|| "General".to_string()),
        price: number_field(value, &["price", "cost"]).unwrap_or(0.0),
    }
}

/// Extract the plant list from a response body (`plants` or `data`).
/// Anything else, including a non-JSON-object body, yields an empty list.
pub fn plant_list(value: &Value) -> Vec<Plant> {
    array_field(value, &["plants", "data"])
        .map(|items| items.iter().map(plant).collect())
        .unwrap_or_default()
}

/// Normalize one category record
pub fn category(value: &Value) -> Category {
    Category {
        id: string_field(value, &["id", "category_id", "_id"]).unwrap_or_default(),
        name: string_field(value, &["name", "category", "category_name"])
            .unwrap_or_else(|| DEFAULT_CATEGORY_NAME.to_string()),
    }
}

/// Extract the category list from a response body (`categories` or `data`)
pub fn category_list(value: &Value) -> Vec<Category> {
    array_field(value, &["categories", "data"])
        .map(|items| items.iter().map(category).collect())
        .unwrap_or_default()
}

/// Normalize a plant-details response. The record may be wrapped under
/// `plant` or `data`, or be the body itself.
pub fn plant_details(value: &Value) -> PlantDetails {
    let inner = value
        .get("plant")
        .or_else(|| value.get("data"))
        .unwrap_or(value);

    let mut base = plant(inner);
    // The details endpoint uses `details` instead of `short_description`
    // and has its own placeholder text.
    base.description = string_field(inner, &["description", "details"])
        .unwrap_or_else(|| DEFAULT_DETAILS_DESCRIPTION.to_string());

    PlantDetails {
        plant: base,
        stock: string_field(inner, &["stock"]),
        rating: string_field(inner, &["rating"]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plant_field_fallbacks() {
        let value = json!({
            "plant_id": 42,
            "plant_name": "Fern",
            "thumbnail": "https://example.com/fern.jpg",
            "short_description": "Leafy.",
            "category_name": "Indoor",
            "cost": "5.99"
        });
        let p = plant(&value);
        assert_eq!(p.id, "42");
        assert_eq!(p.name, "Fern");
        assert_eq!(p.image, "https://example.com/fern.jpg");
        assert_eq!(p.description, "Leafy.");
        assert_eq!(p.category, "Indoor");
        assert_eq!(p.price, 5.99);
    }

    #[test]
    fn test_plant_defaults_when_fields_missing() {
        let p = plant(&json!({}));
        assert_eq!(p.id, "");
        assert_eq!(p.name, "Unknown Plant");
        assert_eq!(p.image, PLACEHOLDER_IMAGE);
        assert_eq!(p.description, "Beautiful, eco-friendly plant.");
        assert_eq!(p.category, "General");
        assert_eq!(p.price, 0.0);
    }

    #[test]
    fn test_primary_key_wins_over_fallbacks() {
        let value = json!({ "id": "a", "plantId": "b", "_id": "c" });
        assert_eq!(plant(&value).id, "a");
    }

    #[test]
    fn test_numeric_and_string_ids_normalize_equal() {
        let numeric = plant(&json!({ "id": 7 }));
        let text = plant(&json!({ "id": "7" }));
        assert_eq!(numeric.id, text.id);
    }

    #[test]
    fn test_plant_list_key_fallback() {
        let under_plants = json!({ "plants": [{ "name": "Rose" }] });
        let under_data = json!({ "data": [{ "name": "Rose" }] });
        assert_eq!(plant_list(&under_plants).len(), 1);
        assert_eq!(plant_list(&under_data).len(), 1);
    }

    #[test]
    fn test_plant_list_empty_on_unknown_shape() {
        assert!(plant_list(&json!({ "items": [] })).is_empty());
        assert!(plant_list(&json!("not an object")).is_empty());
        assert!(plant_list(&json!(null)).is_empty());
    }

    #[test]
    fn test_category_list() {
        let value = json!({ "categories": [
            { "category_id": 1, "category_name": "Trees" },
            { "id": "2" }
        ]});
        let cats = category_list(&value);
        assert_eq!(cats.len(), 2);
        assert_eq!(cats[0].id, "1");
        assert_eq!(cats[0].name, "Trees");
        assert_eq!(cats[1].id, "2");
        assert_eq!(cats[1].name, "Unknown");
    }

    #[test]
    fn test_details_unwraps_plant_and_data() {
        let under_plant = json!({ "plant": { "name": "Oak", "stock": 12, "rating": 4.5 } });
        let under_data = json!({ "data": { "name": "Oak" } });
        let bare = json!({ "name": "Oak" });

        let d = plant_details(&under_plant);
        assert_eq!(d.plant.name, "Oak");
        assert_eq!(d.stock.as_deref(), Some("12"));
        assert_eq!(d.rating.as_deref(), Some("4.5"));

        assert_eq!(plant_details(&under_data).plant.name, "Oak");
        assert_eq!(plant_details(&bare).plant.name, "Oak");
    }

    #[test]
    fn test_details_description_chain() {
        let with_details = json!({ "plant": { "details": "Long text." } });
        assert_eq!(plant_details(&with_details).plant.description, "Long text.");

        let with_neither = json!({ "plant": {} });
        assert_eq!(
            plant_details(&with_neither).plant.description,
            "No description available."
        );
    }

    #[test]
    fn test_price_ignores_non_numeric_strings() {
        assert_eq!(plant(&json!({ "price": "free" })).price, 0.0);
        assert_eq!(plant(&json!({ "price": null, "cost": 3 })).price, 3.0);
    }
}
