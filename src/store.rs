//! Page Data Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use std::collections::HashMap;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{BalanceAnalysis, Ingredient, MenuEntry, Recipe};

/// Data fetched from the server for the current page view
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    pub ingredients: Vec<Ingredient>,
    pub recipes: Vec<Recipe>,
    /// Monday of the displayed week, `YYYY-MM-DD`
    pub week_start: String,
    /// Menus of the displayed week
    pub menus: Vec<MenuEntry>,
    /// Balance analysis by menu id
    pub balance: HashMap<u32, BalanceAnalysis>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Remove an ingredient from the store by ID
pub fn store_remove_ingredient(store: &AppStore, id: u32) {
    store.ingredients().write().retain(|i| i.id != id);
}

/// Remove a recipe from the store by ID
pub fn store_remove_recipe(store: &AppStore, id: u32) {
    store.recipes().write().retain(|r| r.id != id);
}

/// Remove a menu (and its balance badge) from the store by ID
pub fn store_remove_menu(store: &AppStore, id: u32) {
    store.menus().write().retain(|m| m.id != id);
    store.balance().write().remove(&id);
}
