//! Ingredient routes

use serde::Serialize;

use super::{get_json, send, Method};
use crate::error::ApiError;
use crate::models::Ingredient;

/// Body of create and update
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngredientArgs {
    pub name: String,
    pub category: String,
    pub unit: String,
}

pub async fn list_ingredients() -> Result<Vec<Ingredient>, ApiError> {
    get_json("/ingredients").await
}

pub async fn create_ingredient(args: &IngredientArgs) -> Result<(), ApiError> {
    send(Method::Post, "/ingredient", Some(args)).await
}

pub async fn update_ingredient(id: u32, args: &IngredientArgs) -> Result<(), ApiError> {
    send(Method::Put, &format!("/ingredient/{}", id), Some(args)).await
}

pub async fn delete_ingredient(id: u32) -> Result<(), ApiError> {
    send::<()>(Method::Delete, &format!("/ingredient/{}", id), None).await
}
