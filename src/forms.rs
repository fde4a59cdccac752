//! Form Validation
//!
//! Turns raw form fields into request bodies. Every check here runs before
//! any request is sent; a failure is an `ApiError::Validation` carrying the
//! text shown to the user.

use crate::api::{IngredientArgs, NewRecipeArgs, SaveMenuArgs};
use crate::error::ApiError;
use crate::models::{Cell, RecipeIngredientLine, DEFAULT_CATEGORY, DEFAULT_SERVINGS, INGREDIENT_CATEGORIES};
use crate::picker::PickerState;

pub const CHOOSE_INGREDIENT: &str = "Choose an ingredient from the suggestions";
pub const CHOOSE_RECIPE: &str = "Choose a recipe from the suggestions";

fn required(value: &str, message: &str) -> Result<String, ApiError> {
    let value = value.trim();
    if value.is_empty() {
        Err(ApiError::validation(message))
    } else {
        Ok(value.to_string())
    }
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

pub fn ingredient_args(name: &str, category: &str, unit: &str) -> Result<IngredientArgs, ApiError> {
    let name = required(name, "Ingredient name is required")?;
    let unit = required(unit, "Unit is required")?;
    let category = if INGREDIENT_CATEGORIES.contains(&category) {
        category.to_string()
    } else {
        DEFAULT_CATEGORY.to_string()
    };
    Ok(IngredientArgs { name, category, unit })
}

/// Accepts `1.5` as well as `1,5`
fn parse_quantity(value: &str) -> Option<f64> {
    value
        .trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|q| q.is_finite() && *q > 0.0)
}

pub fn recipe_line(picker: &PickerState, quantity: &str, unit: &str) -> Result<RecipeIngredientLine, ApiError> {
    let ingredient = picker.require_selection(CHOOSE_INGREDIENT)?;
    let quantity = parse_quantity(quantity).ok_or_else(|| ApiError::validation("Quantity must be a positive number"))?;
    let unit = required(unit, "Unit is required")?;
    Ok(RecipeIngredientLine {
        ingredient_id: ingredient.id,
        label: ingredient.label.clone(),
        quantity,
        unit,
    })
}

/// Lines to submit with a recipe. A suggestion picked but not yet added
/// becomes the last line; unresolved picker text blocks the submit.
pub fn recipe_lines(
    mut lines: Vec<RecipeIngredientLine>,
    picker: &PickerState,
    quantity: &str,
    unit: &str,
) -> Result<Vec<RecipeIngredientLine>, ApiError> {
    if picker.optional_selection(CHOOSE_INGREDIENT)?.is_some() {
        lines.push(recipe_line(picker, quantity, unit)?);
    }
    Ok(lines)
}

pub fn recipe_args(
    name: &str,
    description: &str,
    prep_minutes: &str,
    servings: &str,
    ingredients: Vec<RecipeIngredientLine>,
) -> Result<NewRecipeArgs, ApiError> {
    let name = required(name, "Recipe name is required")?;

    let prep_minutes = match optional(prep_minutes) {
        None => None,
        Some(v) => Some(
            v.parse::<u32>()
                .map_err(|_| ApiError::validation("Preparation time must be a whole number of minutes"))?,
        ),
    };

    let servings = match optional(servings) {
        None => DEFAULT_SERVINGS,
        Some(v) => v
            .parse::<u32>()
            .ok()
            .filter(|s| *s >= 1)
            .ok_or_else(|| ApiError::validation("Servings must be at least 1"))?,
    };

    Ok(NewRecipeArgs {
        name,
        description: optional(description),
        prep_minutes,
        servings,
        ingredients,
    })
}

pub fn menu_args(cell: Cell, week: &str, description: &str, recipe: &PickerState) -> Result<SaveMenuArgs, ApiError> {
    let recipe_id = recipe.optional_selection(CHOOSE_RECIPE)?.map(|r| r.id);
    let description = optional(description);
    if recipe_id.is_none() && description.is_none() {
        return Err(ApiError::validation("Pick a recipe or write a description"));
    }
    Ok(SaveMenuArgs {
        day: cell.day,
        slot: cell.slot,
        week: week.to_string(),
        description,
        recipe_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, Slot, SuggestionItem};
    use crate::picker::{InputAction, PickerKey};
    use serde_json::json;

    fn picked(id: u32, label: &str) -> PickerState {
        let mut picker = PickerState::new(2);
        if let InputAction::Debounce(gen) = picker.input(&label[..3]) {
            picker.timer_fired(gen);
        }
        picker.show_suggestions(vec![SuggestionItem { id, label: label.to_string() }]);
        picker.key(PickerKey::Enter);
        picker
    }

    #[test]
    fn test_ingredient_args() {
        let args = ingredient_args("  Leek ", "Vegetables", "kg").unwrap();
        assert_eq!(args.name, "Leek");
        assert_eq!(args.category, "Vegetables");

        let args = ingredient_args("Leek", "Mystery", "kg").unwrap();
        assert_eq!(args.category, DEFAULT_CATEGORY);

        assert_eq!(
            ingredient_args(" ", "Vegetables", "kg"),
            Err(ApiError::validation("Ingredient name is required"))
        );
        assert_eq!(ingredient_args("Leek", "Vegetables", ""), Err(ApiError::validation("Unit is required")));
    }

    #[test]
    fn test_recipe_line_requires_selection() {
        let mut picker = PickerState::new(2);
        picker.input("tomato");
        assert_eq!(recipe_line(&picker, "2", "kg"), Err(ApiError::validation(CHOOSE_INGREDIENT)));
    }

    #[test]
    fn test_recipe_line_quantity() {
        let picker = picked(5, "Tomato");
        assert_eq!(recipe_line(&picker, "1,5", "kg").unwrap().quantity, 1.5);
        assert!(recipe_line(&picker, "0", "kg").is_err());
        assert!(recipe_line(&picker, "-2", "kg").is_err());
        assert!(recipe_line(&picker, "lots", "kg").is_err());
    }

    #[test]
    fn test_tomato_submission_sends_ingredient_id() {
        let picker = picked(5, "Tomato");
        let line = recipe_line(&picker, "3", "pcs").unwrap();
        let args = recipe_args("Salad", "", "", "", vec![line]).unwrap();
        let body = serde_json::to_value(&args).unwrap();
        assert_eq!(body["ingredients"][0]["ingredient_id"], json!(5));
        assert_eq!(body["servings"], json!(4));
        assert_eq!(body["description"], json!(null));
    }

    #[test]
    fn test_pending_pick_is_submitted() {
        let picker = picked(5, "Tomato");
        let lines = recipe_lines(Vec::new(), &picker, "3", "pcs").unwrap();
        let args = recipe_args("Salad", "", "", "", lines).unwrap();
        let body = serde_json::to_value(&args).unwrap();
        assert_eq!(body["ingredients"][0]["ingredient_id"], json!(5));

        // Picked but no quantity yet: reported, not dropped
        assert!(recipe_lines(Vec::new(), &picker, "", "pcs").is_err());
    }

    #[test]
    fn test_pending_text_blocks_submit() {
        let mut typed = PickerState::new(2);
        typed.input("tom");
        assert_eq!(
            recipe_lines(Vec::new(), &typed, "3", "pcs"),
            Err(ApiError::validation(CHOOSE_INGREDIENT))
        );

        let empty = PickerState::new(2);
        assert_eq!(recipe_lines(Vec::new(), &empty, "", "").unwrap(), Vec::new());
    }

    #[test]
    fn test_recipe_args_numbers() {
        let args = recipe_args("Soup", "Hot", "25", "2", Vec::new()).unwrap();
        assert_eq!(args.prep_minutes, Some(25));
        assert_eq!(args.servings, 2);
        assert!(recipe_args("Soup", "", "quick", "", Vec::new()).is_err());
        assert!(recipe_args("Soup", "", "", "0", Vec::new()).is_err());
        assert!(recipe_args("", "", "", "", Vec::new()).is_err());
    }

    #[test]
    fn test_menu_args() {
        let cell = Cell { day: Day::Wed, slot: Slot::Dinner };
        let empty = PickerState::new(2);
        assert!(menu_args(cell, "2026-10-12", "  ", &empty).is_err());

        let args = menu_args(cell, "2026-10-12", "Leftovers", &empty).unwrap();
        assert_eq!(args.recipe_id, None);
        assert_eq!(args.description.as_deref(), Some("Leftovers"));

        let args = menu_args(cell, "2026-10-12", "", &picked(8, "Lasagna")).unwrap();
        assert_eq!(args.recipe_id, Some(8));

        let mut typed = PickerState::new(2);
        typed.input("Lasag");
        assert_eq!(menu_args(cell, "2026-10-12", "x", &typed), Err(ApiError::validation(CHOOSE_RECIPE)));
    }
}
