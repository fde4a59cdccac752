//! Planner Page
//!
//! Week navigation, the menu grid with balance badges, and the menu form.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{BalanceTooltip, BalanceTooltipView, MenuForm, MenuGrid};
use crate::context::use_app_context;
use crate::models::Cell;
use crate::notify::use_notifier;
use crate::planner::week_caption;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn PlannerPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let notifier = use_notifier();

    provide_context(BalanceTooltip(RwSignal::new(None)));

    // Load the week, then its balance badges
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        let week = ctx.week_offset.get();
        web_sys::console::log_1(&format!("[Planner] Loading week {}, trigger={}", week, trigger).into());
        spawn_local(async move {
            let loaded = match api::list_week(week).await {
                Ok(loaded) => loaded,
                Err(_) => {
                    notifier.error("Could not load the menus");
                    return;
                }
            };
            // Another navigation started meanwhile; its load owns the grid
            if !ctx.is_showing(week) {
                return;
            }
            let ids: Vec<u32> = loaded.entries.iter().map(|m| m.id).collect();
            store.week_start().set(loaded.week_start);
            store.menus().set(loaded.entries);
            store.balance().write().clear();

            if ids.is_empty() {
                return;
            }
            match api::load_balance(&ids).await {
                Ok(_) if !ctx.is_showing(week) => {}
                Ok(analyses) => store.balance().set(analyses),
                Err(e) => web_sys::console::warn_1(&format!("[Planner] Balance analysis unavailable: {}", e).into()),
            }
        });
    });

    let (editing_cell, set_editing_cell) = signal::<Option<Cell>>(None);
    let (form_open, set_form_open) = signal(false);

    let on_edit = move |cell: Cell| {
        set_editing_cell.set(Some(cell));
        set_form_open.set(true);
    };

    view! {
        <section class="page planner-page">
            <div class="page-header">
                <h1>{move || week_caption(&store.week_start().get())}</h1>
                <div class="week-nav">
                    <button on:click=move |_| ctx.shift_week(-1)>"‹ Previous"</button>
                    <button on:click=move |_| ctx.current_week()>"Today"</button>
                    <button on:click=move |_| ctx.shift_week(1)>"Next ›"</button>
                </div>
            </div>

            <MenuGrid on_edit=on_edit />
            <MenuForm cell=editing_cell open=form_open set_open=set_form_open />
            <BalanceTooltipView />
        </section>
    }
}
