//! Modal Component
//!
//! Dialog overlay closed by its × button or a click on the backdrop.

use leptos::prelude::*;

#[component]
pub fn Modal(
    #[prop(into)] title: Signal<String>,
    open: ReadSignal<bool>,
    #[prop(into)] on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div
                class="modal active"
                on:click=move |ev| {
                    // Only the backdrop itself, not clicks bubbling from the dialog
                    if ev.target() == ev.current_target() {
                        on_close.run(());
                    }
                }
            >
                <div class="modal-content">
                    <div class="modal-header">
                        <h2>{move || title.get()}</h2>
                        <button class="close" on:click=move |_| on_close.run(())>"×"</button>
                    </div>
                    {children()}
                </div>
            </div>
        </Show>
    }
}
