//! UI Components
//!
//! Leptos components for the three pages and their shared widgets.

mod balance_badge;
mod delete_confirm_button;
mod ingredient_page;
mod menu_form;
mod menu_grid;
mod modal;
mod page_tabs;
mod planner_page;
mod recipe_page;
mod suggestion_picker;

pub use balance_badge::{BalanceBadge, BalanceTooltip, BalanceTooltipView};
pub use delete_confirm_button::DeleteConfirmButton;
pub use ingredient_page::IngredientPage;
pub use menu_form::MenuForm;
pub use menu_grid::MenuGrid;
pub use modal::Modal;
pub use page_tabs::{Page, PageTabs};
pub use planner_page::PlannerPage;
pub use recipe_page::RecipePage;
pub use suggestion_picker::SuggestionPicker;
