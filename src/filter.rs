//! Search Filtering
//!
//! Display-only filtering of the in-memory plant list. The stored list is
//! never modified; callers render the returned view instead.

use crate::models::Plant;

/// Case-insensitive substring match on plant name, preserving order.
/// A blank query returns the full list.
pub fn by_name(plants: &[Plant], query: &str) -> Vec<Plant> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return plants.to_vec();
    }
    plants
        .iter()
        .filter(|plant| plant.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_plant(name: &str) -> Plant {
        Plant {
            id: name.to_string(),
            name: name.to_string(),
            image: String::new(),
            description: String::new(),
            category: String::new(),
            price: 0.0,
        }
    }

    #[test]
    fn test_substring_match_preserves_order() {
        let plants = vec![make_plant("Rose"), make_plant("Tulip"), make_plant("Rosemary")];
        let filtered = by_name(&plants, "ro");
        let names: Vec<&str> = filtered.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Rose", "Rosemary"]);
        // Source list untouched
        assert_eq!(plants.len(), 3);
    }

    #[test]
    fn test_case_insensitive() {
        let plants = vec![make_plant("Rose")];
        assert_eq!(by_name(&plants, "ROSE").len(), 1);
    }

    #[test]
    fn test_blank_query_returns_all() {
        let plants = vec![make_plant("Rose"), make_plant("Tulip")];
        assert_eq!(by_name(&plants, "").len(), 2);
        assert_eq!(by_name(&plants, "   ").len(), 2);
    }

    #[test]
    fn test_no_match() {
        let plants = vec![make_plant("Rose")];
        assert!(by_name(&plants, "cactus").is_empty());
    }
}
