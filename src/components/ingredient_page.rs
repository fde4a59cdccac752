//! Ingredients Page
//!
//! Ingredient table with create/edit modal and inline delete.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{DeleteConfirmButton, Modal};
use crate::config::use_config;
use crate::context::use_app_context;
use crate::forms;
use crate::models::{Ingredient, DEFAULT_CATEGORY, INGREDIENT_CATEGORIES};
use crate::notify::use_notifier;
use crate::store::{store_remove_ingredient, use_app_store, AppStateStoreFields};

#[component]
pub fn IngredientPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let notifier = use_notifier();

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        spawn_local(async move {
            match api::list_ingredients().await {
                Ok(loaded) => {
                    web_sys::console::log_1(&format!("[Ingredients] Loaded {}", loaded.len()).into());
                    *store.ingredients().write() = loaded;
                }
                Err(_) => notifier.error("Could not load ingredients"),
            }
        });
    });

    // None = create, Some = edit
    let (editing, set_editing) = signal::<Option<Ingredient>>(None);
    let (form_open, set_form_open) = signal(false);

    let open_create = move |_| {
        set_editing.set(None);
        set_form_open.set(true);
    };

    let delete = move |id: u32| {
        spawn_local(async move {
            match api::delete_ingredient(id).await {
                Ok(()) => {
                    store_remove_ingredient(&store, id);
                    notifier.success("Ingredient deleted");
                }
                Err(e) => notifier.error(e.user_message("Could not delete the ingredient")),
            }
        });
    };

    view! {
        <section class="page ingredients-page">
            <div class="page-header">
                <h1>"Ingredients"</h1>
                <button class="primary-btn" on:click=open_create>"+ Add ingredient"</button>
            </div>

            <table class="data-table">
                <thead>
                    <tr><th>"Name"</th><th>"Category"</th><th>"Unit"</th><th></th></tr>
                </thead>
                <tbody>
                    <For
                        each=move || store.ingredients().get()
                        key=|i| (i.id, i.name.clone(), i.category.clone(), i.unit.clone())
                        children=move |ingredient| {
                            let id = ingredient.id;
                            let for_edit = ingredient.clone();
                            view! {
                                <tr>
                                    <td>{ingredient.name.clone()}</td>
                                    <td>{ingredient.category.clone()}</td>
                                    <td>{ingredient.unit.clone()}</td>
                                    <td class="row-actions">
                                        <button
                                            class="edit-btn"
                                            on:click=move |_| {
                                                set_editing.set(Some(for_edit.clone()));
                                                set_form_open.set(true);
                                            }
                                        >
                                            "Edit"
                                        </button>
                                        <DeleteConfirmButton
                                            label=ingredient.name.clone()
                                            on_confirm=move |_| delete(id)
                                        />
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <IngredientForm editing=editing open=form_open set_open=set_form_open />
        </section>
    }
}

/// Create/edit form in a modal
#[component]
fn IngredientForm(
    editing: ReadSignal<Option<Ingredient>>,
    open: ReadSignal<bool>,
    set_open: WriteSignal<bool>,
) -> impl IntoView {
    let ctx = use_app_context();
    let config = use_config();
    let notifier = use_notifier();

    let (name, set_name) = signal(String::new());
    let (category, set_category) = signal(DEFAULT_CATEGORY.to_string());
    let (unit, set_unit) = signal(String::new());
    let (saving, set_saving) = signal(false);

    // Prefill whenever the form opens
    Effect::new(move |_| {
        if !open.get() {
            return;
        }
        match editing.get_untracked() {
            Some(i) => {
                set_name.set(i.name);
                set_category.set(i.category);
                set_unit.set(i.unit);
            }
            None => {
                set_name.set(String::new());
                set_category.set(DEFAULT_CATEGORY.to_string());
                set_unit.set(String::new());
            }
        }
    });

    let title = Signal::derive(move || {
        if editing.get().is_some() { "Edit ingredient".to_string() } else { "New ingredient".to_string() }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let args = match forms::ingredient_args(&name.get(), &category.get(), &unit.get()) {
            Ok(args) => args,
            Err(e) => {
                notifier.error(e.user_message(""));
                return;
            }
        };
        let target = editing.get_untracked().map(|i| i.id);
        set_saving.set(true);
        spawn_local(async move {
            let result = match target {
                Some(id) => api::update_ingredient(id, &args).await,
                None => api::create_ingredient(&args).await,
            };
            set_saving.set(false);
            match result {
                Ok(()) => {
                    notifier.success(if target.is_some() { "Ingredient updated" } else { "Ingredient created" });
                    set_open.set(false);
                    ctx.reload_after(config.reload_delay_ms);
                }
                Err(e) => notifier.error(e.user_message("Could not save the ingredient")),
            }
        });
    };

    view! {
        <Modal title=title open=open on_close=move |_| set_open.set(false)>
            <form class="modal-form" on:submit=on_submit>
                <label>
                    "Name"
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Category"
                    <select
                        prop:value=move || category.get()
                        on:change=move |ev| set_category.set(event_target_value(&ev))
                    >
                        {INGREDIENT_CATEGORIES.iter().map(|c| view! {
                            <option value=*c>{*c}</option>
                        }).collect_view()}
                    </select>
                </label>
                <label>
                    "Unit"
                    <input
                        type="text"
                        placeholder="kg, g, L, ml, pcs..."
                        prop:value=move || unit.get()
                        on:input=move |ev| set_unit.set(event_target_value(&ev))
                    />
                </label>
                <div class="form-actions">
                    <button type="button" class="cancel-btn" on:click=move |_| set_open.set(false)>"Cancel"</button>
                    <button type="submit" class="primary-btn" disabled=move || saving.get()>"Save"</button>
                </div>
            </form>
        </Modal>
    }
}
