//! Plant API Client
//!
//! Thin fetch wrappers over the remote catalog endpoints. Bodies are parsed
//! as loose JSON and handed straight to `normalize`; no retry, no timeout,
//! no caching.

use gloo_net::http::Request;
use serde_json::Value;

use crate::models::{Category, Plant, PlantDetails};
use crate::normalize;

const BASE_URL: &str = "https://openapi.programming-hero.com/api";

async fn get_json(url: &str) -> Result<Value, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    response.json::<Value>().await.map_err(|e| e.to_string())
}

pub async fn fetch_categories() -> Result<Vec<Category>, String> {
    let body = get_json(&format!("{}/categories", BASE_URL)).await?;
    Ok(normalize::category_list(&body))
}

pub async fn fetch_all_plants() -> Result<Vec<Plant>, String> {
    let body = get_json(&format!("{}/plants", BASE_URL)).await?;
    Ok(normalize::plant_list(&body))
}

pub async fn fetch_plants_by_category(id: &str) -> Result<Vec<Plant>, String> {
    let body = get_json(&format!("{}/category/{}", BASE_URL, id)).await?;
    Ok(normalize::plant_list(&body))
}

pub async fn fetch_plant_details(id: &str) -> Result<PlantDetails, String> {
    let body = get_json(&format!("{}/plant/{}", BASE_URL, id)).await?;
    Ok(normalize::plant_details(&body))
}
