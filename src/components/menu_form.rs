//! Menu Form Component
//!
//! Edit the menu of one planner cell: a recipe picked from suggestions
//! and/or a free-text description.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, SearchKind};
use crate::components::{Modal, SuggestionPicker};
use crate::config::use_config;
use crate::context::use_app_context;
use crate::forms;
use crate::models::{Cell, SuggestionItem};
use crate::notify::use_notifier;
use crate::picker::PickerState;
use crate::planner::occupant_at;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn MenuForm(cell: ReadSignal<Option<Cell>>, open: ReadSignal<bool>, set_open: WriteSignal<bool>) -> impl IntoView {
    let ctx = use_app_context();
    let config = use_config();
    let store = use_app_store();
    let notifier = use_notifier();

    let (description, set_description) = signal(String::new());
    let (saving, set_saving) = signal(false);
    let recipe = RwSignal::new(PickerState::new(config.min_query_chars));

    // Prefill from the cell's current menu whenever the form opens
    Effect::new(move |_| {
        if !open.get() {
            return;
        }
        let Some(target) = cell.get_untracked() else {
            return;
        };
        let current = store.menus().with_untracked(|m| occupant_at(m, target).cloned());
        set_description.set(current.as_ref().and_then(|m| m.description.clone()).unwrap_or_default());
        let picker = match current.and_then(|m| m.recipe_id.zip(m.recipe_name)) {
            Some((id, label)) => PickerState::with_selection(config.min_query_chars, SuggestionItem { id, label }),
            None => PickerState::new(config.min_query_chars),
        };
        recipe.set(picker);
    });

    let title = Signal::derive(move || match cell.get() {
        Some(c) => format!("{} · {}", c.day.label(), c.slot.label()),
        None => String::from("Menu"),
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(target) = cell.get_untracked() else {
            return;
        };
        let week = store.week_start().get_untracked();
        let args = match recipe.with_untracked(|r| forms::menu_args(target, &week, &description.get_untracked(), r)) {
            Ok(args) => args,
            Err(e) => {
                notifier.error(e.user_message(""));
                return;
            }
        };
        set_saving.set(true);
        spawn_local(async move {
            let result = api::save_menu(&args).await;
            set_saving.set(false);
            match result {
                Ok(()) => {
                    notifier.success("Menu saved");
                    set_open.set(false);
                    ctx.reload();
                }
                Err(e) => notifier.error(e.user_message("Could not save the menu")),
            }
        });
    };

    view! {
        <Modal title=title open=open on_close=move |_| set_open.set(false)>
            <form class="modal-form" on:submit=on_submit>
                <label>
                    "Recipe"
                    <SuggestionPicker kind=SearchKind::Recipes state=recipe placeholder="Search a recipe..." />
                </label>
                <label>
                    "Description"
                    <textarea
                        placeholder="Or describe the meal"
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="form-actions">
                    <button type="button" class="cancel-btn" on:click=move |_| set_open.set(false)>"Cancel"</button>
                    <button type="submit" class="primary-btn" disabled=move || saving.get()>"Save"</button>
                </div>
            </form>
        </Modal>
    }
}
