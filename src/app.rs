//! Menu Planner App
//!
//! Root component: page tabs, shared context, notifications.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{IngredientPage, Page, PageTabs, PlannerPage, RecipePage};
use crate::config::UiConfig;
use crate::context::AppContext;
use crate::notify::{NotificationStack, Notifier};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let config = UiConfig::from_document();
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (week_offset, set_week_offset) = signal(0i32);
    let (current_page, set_current_page) = signal(Page::Planner);

    // Provide context to all children
    provide_context(config);
    provide_context(AppContext::new((reload_trigger, set_reload_trigger), (week_offset, set_week_offset)));
    provide_context(Store::new(AppState::default()));
    provide_context(Notifier::new(config.toast_ms));

    view! {
        <div class="app-layout">
            <header class="app-header">
                <span class="app-title">"Menu Planner"</span>
                <PageTabs current_page=current_page set_current_page=set_current_page />
            </header>

            <main class="main-content">
                {move || match current_page.get() {
                    Page::Planner => view! { <PlannerPage /> }.into_any(),
                    Page::Recipes => view! { <RecipePage /> }.into_any(),
                    Page::Ingredients => view! { <IngredientPage /> }.into_any(),
                }}
            </main>

            <NotificationStack />
        </div>
    }
}
