//! Page Tab Bar Component
//!
//! Tab bar for switching between the planner, recipes and ingredients.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Planner,
    Recipes,
    Ingredients,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Planner, Page::Recipes, Page::Ingredients];

    pub fn title(self) -> &'static str {
        match self {
            Page::Planner => "Menu planner",
            Page::Recipes => "Recipes",
            Page::Ingredients => "Ingredients",
        }
    }
}

#[component]
pub fn PageTabs(current_page: ReadSignal<Page>, set_current_page: WriteSignal<Page>) -> impl IntoView {
    view! {
        <nav class="page-tab-bar">
            {Page::ALL.iter().map(|page| {
                let page = *page;
                let tab_class = move || {
                    if current_page.get() == page { "page-tab active" } else { "page-tab" }
                };
                view! {
                    <button class=tab_class on:click=move |_| set_current_page.set(page)>
                        {page.title()}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
