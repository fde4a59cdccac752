//! Recipes Page
//!
//! Recipe list and the recipe creation form. Ingredient lines are chosen
//! through the suggestion picker.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, SearchKind};
use crate::components::{DeleteConfirmButton, Modal, SuggestionPicker};
use crate::config::use_config;
use crate::context::use_app_context;
use crate::forms;
use crate::models::RecipeIngredientLine;
use crate::notify::use_notifier;
use crate::picker::PickerState;
use crate::store::{store_remove_recipe, use_app_store, AppStateStoreFields};

#[component]
pub fn RecipePage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let notifier = use_notifier();
    let (form_open, set_form_open) = signal(false);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        spawn_local(async move {
            match api::list_recipes().await {
                Ok(loaded) => store.recipes().set(loaded),
                Err(_) => notifier.error("Could not load recipes"),
            }
        });
    });

    let delete = move |id: u32| {
        spawn_local(async move {
            match api::delete_recipe(id).await {
                Ok(()) => {
                    store_remove_recipe(&store, id);
                    notifier.success("Recipe deleted");
                }
                Err(e) => notifier.error(e.user_message("Could not delete the recipe")),
            }
        });
    };

    view! {
        <section class="page recipes-page">
            <div class="page-header">
                <h1>"Recipes"</h1>
                <button class="primary-btn" on:click=move |_| set_form_open.set(true)>"+ Add recipe"</button>
            </div>

            <div class="recipe-list">
                <For
                    each=move || store.recipes().get()
                    key=|r| r.id
                    children=move |recipe| {
                        let id = recipe.id;
                        let meta = match recipe.prep_minutes {
                            Some(m) => format!("{} min · {} servings", m, recipe.servings),
                            None => format!("{} servings", recipe.servings),
                        };
                        view! {
                            <div class="recipe-card">
                                <div class="recipe-card-header">
                                    <h3>{recipe.name.clone()}</h3>
                                    <DeleteConfirmButton label=recipe.name.clone() on_confirm=move |_| delete(id) />
                                </div>
                                <p class="recipe-meta">{meta}</p>
                                {recipe.description.clone().map(|d| view! { <p class="recipe-description">{d}</p> })}
                            </div>
                        }
                    }
                />
            </div>

            <RecipeForm open=form_open set_open=set_form_open />
        </section>
    }
}

#[component]
fn RecipeForm(open: ReadSignal<bool>, set_open: WriteSignal<bool>) -> impl IntoView {
    let ctx = use_app_context();
    let config = use_config();
    let notifier = use_notifier();

    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (prep_minutes, set_prep_minutes) = signal(String::new());
    let (servings, set_servings) = signal(String::from("4"));
    let (lines, set_lines) = signal(Vec::<RecipeIngredientLine>::new());
    let (saving, set_saving) = signal(false);

    // Line being added
    let picker = RwSignal::new(PickerState::new(config.min_query_chars));
    let (quantity, set_quantity) = signal(String::new());
    let (unit, set_unit) = signal(String::new());

    let reset = move || {
        set_name.set(String::new());
        set_description.set(String::new());
        set_prep_minutes.set(String::new());
        set_servings.set(String::from("4"));
        set_lines.set(Vec::new());
        set_quantity.set(String::new());
        set_unit.set(String::new());
        picker.update(|p| p.reset());
    };

    let add_line = move |_| {
        let line = picker.with(|p| forms::recipe_line(p, &quantity.get(), &unit.get()));
        match line {
            Ok(line) => {
                set_lines.update(|v| v.push(line));
                picker.update(|p| p.reset());
                set_quantity.set(String::new());
                set_unit.set(String::new());
            }
            Err(e) => notifier.error(e.user_message("")),
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let args = picker
            .with(|p| forms::recipe_lines(lines.get(), p, &quantity.get(), &unit.get()))
            .and_then(|lines| {
                forms::recipe_args(&name.get(), &description.get(), &prep_minutes.get(), &servings.get(), lines)
            });
        let args = match args {
            Ok(args) => args,
            Err(e) => {
                notifier.error(e.user_message(""));
                return;
            }
        };
        set_saving.set(true);
        spawn_local(async move {
            let result = api::create_recipe(&args).await;
            set_saving.set(false);
            match result {
                Ok(()) => {
                    notifier.success("Recipe created");
                    reset();
                    set_open.set(false);
                    ctx.reload_after(config.reload_delay_ms);
                }
                Err(e) => notifier.error(e.user_message("Could not create the recipe")),
            }
        });
    };

    view! {
        <Modal title="New recipe".to_string() open=open on_close=move |_| set_open.set(false)>
            <form class="modal-form" on:submit=on_submit>
                <label>
                    "Name"
                    <input type="text" prop:value=move || name.get() on:input=move |ev| set_name.set(event_target_value(&ev)) />
                </label>
                <label>
                    "Description"
                    <textarea prop:value=move || description.get() on:input=move |ev| set_description.set(event_target_value(&ev))></textarea>
                </label>
                <div class="form-row">
                    <label>
                        "Preparation (min)"
                        <input type="number" min="0" prop:value=move || prep_minutes.get() on:input=move |ev| set_prep_minutes.set(event_target_value(&ev)) />
                    </label>
                    <label>
                        "Servings"
                        <input type="number" min="1" prop:value=move || servings.get() on:input=move |ev| set_servings.set(event_target_value(&ev)) />
                    </label>
                </div>

                <fieldset class="ingredient-lines">
                    <legend>"Ingredients"</legend>
                    <ul>
                        {move || lines.get().into_iter().enumerate().map(|(i, line)| view! {
                            <li>
                                {format!("{} {} {}", line.quantity, line.unit, line.label)}
                                <button
                                    type="button"
                                    class="delete-btn"
                                    on:click=move |_| set_lines.update(|v| if i < v.len() { v.remove(i); })
                                >
                                    "×"
                                </button>
                            </li>
                        }).collect_view()}
                    </ul>
                    <div class="form-row">
                        <SuggestionPicker kind=SearchKind::Ingredients state=picker placeholder="Ingredient..." />
                        <input
                            type="text"
                            class="quantity-input"
                            placeholder="Qty"
                            prop:value=move || quantity.get()
                            on:input=move |ev| set_quantity.set(event_target_value(&ev))
                        />
                        <input
                            type="text"
                            class="unit-input"
                            placeholder="Unit"
                            prop:value=move || unit.get()
                            on:input=move |ev| set_unit.set(event_target_value(&ev))
                        />
                        <button type="button" on:click=add_line>"Add"</button>
                    </div>
                </fieldset>

                <div class="form-actions">
                    <button type="button" class="cancel-btn" on:click=move |_| set_open.set(false)>"Cancel"</button>
                    <button type="submit" class="primary-btn" disabled=move || saving.get()>"Save"</button>
                </div>
            </form>
        </Modal>
    }
}
