//! Frontend Models
//!
//! Canonical data structures produced by the normalization boundary.

use serde::{Deserialize, Serialize};

/// A plant as shown on a catalog card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    pub id: String,
    pub name: String,
    pub image: String,
    pub description: String,
    pub category: String,
    pub price: f64,
}

/// A catalog category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

/// Extended plant data shown in the details dialog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantDetails {
    pub plant: Plant,
    /// Stock level, displayed verbatim ("—" when absent)
    pub stock: Option<String>,
    /// Rating, displayed verbatim ("—" when absent)
    pub rating: Option<String>,
}

/// A cart entry capturing id/name/price at the time of addition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub name: String,
    pub price: f64,
}

impl CartItem {
    pub fn from_plant(plant: &Plant) -> Self {
        Self {
            id: plant.id.clone(),
            name: plant.name.clone(),
            price: plant.price,
        }
    }
}
