//! Recipe routes

use serde::Serialize;

use super::{get_json, send, Method};
use crate::error::ApiError;
use crate::models::{Recipe, RecipeIngredientLine};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewRecipeArgs {
    pub name: String,
    pub description: Option<String>,
    pub prep_minutes: Option<u32>,
    pub servings: u32,
    pub ingredients: Vec<RecipeIngredientLine>,
}

pub async fn list_recipes() -> Result<Vec<Recipe>, ApiError> {
    get_json("/recipes").await
}

pub async fn create_recipe(args: &NewRecipeArgs) -> Result<(), ApiError> {
    send(Method::Post, "/recipe", Some(args)).await
}

pub async fn delete_recipe(id: u32) -> Result<(), ApiError> {
    send::<()>(Method::Delete, &format!("/recipe/{}", id), None).await
}
