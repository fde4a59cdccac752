//! Frontend Models
//!
//! Data structures matching the server's JSON.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Selectable entity returned by a search (ingredient or recipe)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionItem {
    pub id: u32,
    pub label: String,
}

/// Plain `{success, message?}` answer of every mutating route
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiResponse {
    pub fn into_result(self) -> Result<(), ApiError> {
        if self.success {
            Ok(())
        } else {
            Err(ApiError::Rejected(self.message))
        }
    }
}

// ========================
// Ingredients & recipes
// ========================

/// Ingredient categories known by the server
pub const INGREDIENT_CATEGORIES: &[&str] = &[
    "Vegetables",
    "Fruits",
    "Meat",
    "Fish",
    "Dairy",
    "Grains & Starches",
    "Spices & Condiments",
    "Oils & Fats",
    "Sugars & Sweets",
    "Drinks",
    "Other",
];

pub const DEFAULT_CATEGORY: &str = "Other";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: u32,
    pub name: String,
    #[serde(default = "default_category")]
    pub category: String,
    pub unit: String,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: u32,
    pub name: String,
    pub description: Option<String>,
    pub prep_minutes: Option<u32>,
    #[serde(default = "default_servings")]
    pub servings: u32,
}

pub const DEFAULT_SERVINGS: u32 = 4;

fn default_servings() -> u32 {
    DEFAULT_SERVINGS
}

/// Ingredient line of a recipe being edited
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeIngredientLine {
    pub ingredient_id: u32,
    /// Display only
    #[serde(skip)]
    pub label: String,
    pub quantity: f64,
    pub unit: String,
}

// ========================
// Planner grid
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
}

impl Day {
    pub const ALL: [Day; 5] = [Day::Mon, Day::Tue, Day::Wed, Day::Thu, Day::Fri];

    /// Days since Monday
    pub fn offset(self) -> u32 {
        match self {
            Day::Mon => 0,
            Day::Tue => 1,
            Day::Wed => 2,
            Day::Thu => 3,
            Day::Fri => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Day::Mon => "Monday",
            Day::Tue => "Tuesday",
            Day::Wed => "Wednesday",
            Day::Thu => "Thursday",
            Day::Fri => "Friday",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Lunch,
    Dinner,
}

impl Slot {
    pub const ALL: [Slot; 2] = [Slot::Lunch, Slot::Dinner];

    pub fn label(self) -> &'static str {
        match self {
            Slot::Lunch => "Lunch",
            Slot::Dinner => "Dinner",
        }
    }
}

/// Coordinate of one planner cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub day: Day,
    pub slot: Slot,
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}/{:?}", self.day, self.slot)
    }
}

/// Planned meal occupying a cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub id: u32,
    pub day: Day,
    pub slot: Slot,
    pub recipe_id: Option<u32>,
    pub recipe_name: Option<String>,
    pub description: Option<String>,
}

impl MenuEntry {
    pub fn cell(&self) -> Cell {
        Cell { day: self.day, slot: self.slot }
    }

    /// Text shown inside the grid cell
    pub fn title(&self) -> String {
        match (&self.recipe_name, &self.description) {
            (Some(name), _) => name.clone(),
            (None, Some(desc)) => desc.clone(),
            (None, None) => format!("Menu #{}", self.id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct WeekMenus {
    /// Monday of the week, `YYYY-MM-DD`
    pub week_start: String,
    #[serde(default)]
    pub entries: Vec<MenuEntry>,
}

// ========================
// Balance analysis
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BalanceLevel {
    Balanced,
    Average,
    Unbalanced,
    Empty,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BalanceAnalysis {
    pub level: BalanceLevel,
    pub message: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BalanceReport {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    /// Keyed by menu id (JSON object keys are strings)
    #[serde(default)]
    pub analyses: HashMap<String, BalanceAnalysis>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_day_and_slot_wire_names() {
        let cell = Cell { day: Day::Tue, slot: Slot::Dinner };
        assert_eq!(serde_json::to_value(cell).unwrap(), json!({"day": "Tue", "slot": "dinner"}));
    }

    #[test]
    fn test_rejected_response_keeps_server_message() {
        let resp: ApiResponse = serde_json::from_value(json!({"success": false, "message": "Slot taken"})).unwrap();
        assert_eq!(resp.into_result(), Err(ApiError::Rejected(Some("Slot taken".into()))));

        let resp: ApiResponse = serde_json::from_value(json!({"success": true})).unwrap();
        assert_eq!(resp.into_result(), Ok(()));
    }

    #[test]
    fn test_unknown_balance_level_does_not_fail_decoding() {
        let analysis: BalanceAnalysis =
            serde_json::from_value(json!({"level": "excellent", "message": "?"})).unwrap();
        assert_eq!(analysis.level, BalanceLevel::Unknown);
        assert!(analysis.categories.is_empty());
    }

    #[test]
    fn test_menu_entry_title_prefers_recipe() {
        let mut entry = MenuEntry {
            id: 7,
            day: Day::Mon,
            slot: Slot::Lunch,
            recipe_id: Some(2),
            recipe_name: Some("Ratatouille".into()),
            description: Some("with rice".into()),
        };
        assert_eq!(entry.title(), "Ratatouille");
        entry.recipe_name = None;
        assert_eq!(entry.title(), "with rice");
        entry.description = None;
        assert_eq!(entry.title(), "Menu #7");
    }

    #[test]
    fn test_recipe_line_label_not_sent() {
        let line = RecipeIngredientLine {
            ingredient_id: 5,
            label: "Tomato".into(),
            quantity: 2.0,
            unit: "kg".into(),
        };
        assert_eq!(
            serde_json::to_value(&line).unwrap(),
            json!({"ingredient_id": 5, "quantity": 2.0, "unit": "kg"})
        );
    }
}
