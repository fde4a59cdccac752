//! Suggestion Picker Component
//!
//! Debounced autocomplete input selecting an existing ingredient or recipe.
//! The hosting form owns the `PickerState` signal and reads the selection
//! from it on submit.

use gloo_timers::callback::Timeout;
use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::{self, SearchKind};
use crate::config::use_config;
use crate::picker::{InputAction, KeyAction, PickerKey, PickerState};

/// Autocomplete input with suggestion list
///
/// Props:
/// - kind: which entity to look up
/// - state: picker state shared with the hosting form
#[component]
pub fn SuggestionPicker(
    kind: SearchKind,
    state: RwSignal<PickerState>,
    #[prop(into)] placeholder: String,
) -> impl IntoView {
    let config = use_config();
    let wrapper = NodeRef::<html::Div>::new();
    // Dropping a Timeout cancels it
    let timer = StoredValue::new_local(None::<Timeout>);

    let lookup = move |query: String| {
        spawn_local(async move {
            let items = match api::search(kind, &query, config.suggestion_limit).await {
                Ok(items) => items,
                Err(e) => {
                    web_sys::console::warn_1(&format!("[Picker] Lookup {:?} failed: {}", query, e).into());
                    Vec::new()
                }
            };
            // In-flight lookups are not cancelled; the latest answer wins
            let _ = state.try_update(|s| s.show_suggestions(items));
        });
    };

    let on_input = move |ev: web_sys::Event| {
        let text = event_target_value(&ev);
        match state.try_update(|s| s.input(&text)) {
            Some(InputAction::Debounce(generation)) => {
                let pending = Timeout::new(config.debounce_ms, move || {
                    if let Some(Some(query)) = state.try_update(|s| s.timer_fired(generation)) {
                        lookup(query);
                    }
                });
                timer.set_value(Some(pending));
            }
            _ => timer.set_value(None),
        }
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let key = PickerKey::from_key(&ev.key());
        match state.try_update(|s| s.key(key)) {
            Some(KeyAction::Handled) => ev.prevent_default(),
            Some(KeyAction::Committed(item)) => {
                ev.prevent_default();
                web_sys::console::log_1(&format!("[Picker] Selected #{} {}", item.id, item.label).into());
            }
            _ => {}
        }
    };

    // Pointer down anywhere outside input and list closes the list
    let outside = window_event_listener(ev::mousedown, move |ev| {
        if !state.with_untracked(|s| s.is_open()) {
            return;
        }
        let Some(root) = wrapper.get_untracked() else {
            return;
        };
        let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        if !root.contains(target.as_ref()) {
            state.update(|s| s.dismiss());
        }
    });
    on_cleanup(move || outside.remove());

    let input_class = move || {
        if state.with(|s| s.selected().is_some()) {
            "picker-input selected"
        } else {
            "picker-input"
        }
    };

    // The list is rebuilt only when its content or visibility changes;
    // highlight moves just restyle the items
    let items = Memo::new(move |_| state.with(|s| s.suggestions().to_vec()));
    let is_open = Memo::new(move |_| state.with(|s| s.is_open()));

    view! {
        <div class="suggestion-picker" node_ref=wrapper>
            <input
                type="text"
                class=input_class
                placeholder=placeholder
                autocomplete="off"
                prop:value=move || state.with(|s| s.query().to_string())
                on:input=on_input
                on:keydown=on_keydown
            />

            {move || {
                if !is_open.get() {
                    return view! { <div></div> }.into_any();
                }
                view! {
                    <ul class="suggestion-list">
                        {items.get().into_iter().enumerate().map(|(i, item)| {
                            let item_class = move || {
                                if state.with(|s| s.highlighted() == Some(i)) {
                                    "suggestion-item highlighted"
                                } else {
                                    "suggestion-item"
                                }
                            };
                            view! {
                                <li
                                    class=item_class
                                    on:mouseenter=move |_| state.maybe_update(|s| s.hover(i))
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        state.update(|s| { s.commit(i); });
                                    }
                                >
                                    {item.label}
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                }.into_any()
            }}
        </div>
    }
}
