//! Menu Grid Component
//!
//! Week grid (days x meal slots). Menus can be dragged to another cell;
//! the server decides, and the grid reloads after a successful move.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{BalanceBadge, DeleteConfirmButton};
use crate::config::use_config;
use crate::context::use_app_context;
use crate::models::{Cell, Day, MenuEntry, Slot};
use crate::notify::use_notifier;
use crate::planner::{day_header, move_feedback, occupant_at};
use crate::store::{store_remove_menu, use_app_store, AppStateStoreFields};

use leptos_dragdrop::*;

#[component]
pub fn MenuGrid(#[prop(into)] on_edit: Callback<Cell>) -> impl IntoView {
    let ctx = use_app_context();
    let config = use_config();
    let store = use_app_store();
    let notifier = use_notifier();

    let dnd = create_grid_dnd::<Cell>();

    let on_move = move |req: MoveRequest<Cell>| {
        web_sys::console::log_1(&format!("[DND] Move menu #{}: {} -> {}", req.occupant, req.from, req.to).into());
        spawn_local(async move {
            let result = api::move_menu(req.occupant, req.to).await;
            dnd.settle();
            let feedback = move_feedback(&result);
            notifier.notify(feedback.kind, feedback.message);
            if feedback.reload {
                web_sys::console::log_1(&"[DND] Backend done, reloading...".into());
                ctx.reload_after(config.reload_delay_ms);
            }
        });
    };

    let delete = move |id: u32| {
        spawn_local(async move {
            match api::delete_menu(id).await {
                Ok(()) => {
                    store_remove_menu(&store, id);
                    notifier.success("Menu deleted");
                }
                Err(e) => notifier.error(e.user_message("Could not delete the menu")),
            }
        });
    };

    let render_cell = move |cell: Cell, entry: Option<MenuEntry>| {
        let occupant = entry.as_ref().map(|e| e.id);

        let cell_class = move || {
            let mut c = String::from("menu-cell");
            if occupant.is_none() {
                c.push_str(" empty");
            }
            if dnd.is_source(cell) {
                c.push_str(" dragging");
            }
            if dnd.is_over(cell) {
                c.push_str(" drag-over");
            }
            c
        };

        view! {
            <td
                class=cell_class
                draggable=if occupant.is_some() { "true" } else { "false" }
                on:dragstart=make_on_dragstart(dnd, cell, occupant)
                on:dragover=make_on_dragover(dnd, cell)
                on:dragleave=make_on_dragleave(dnd, cell)
                on:drop=make_on_drop(dnd, cell, on_move)
                on:dragend=make_on_dragend(dnd)
                on:click=move |_| on_edit.run(cell)
            >
                {match entry {
                    Some(entry) => {
                        let id = entry.id;
                        let title = entry.title();
                        let label = title.clone();
                        view! {
                            <div class="menu-content">
                                <span class="menu-title">{title}</span>
                                <BalanceBadge menu_id=id />
                                <DeleteConfirmButton label=label on_confirm=move |_| delete(id) />
                            </div>
                        }.into_any()
                    }
                    None => view! { <div class="menu-content empty">"+"</div> }.into_any(),
                }}
            </td>
        }
    };

    view! {
        <table class="menu-grid">
            <thead>
                <tr>
                    <th></th>
                    {move || {
                        let week_start = store.week_start().get();
                        Day::ALL.iter().map(|day| view! { <th>{day_header(&week_start, *day)}</th> }).collect_view()
                    }}
                </tr>
            </thead>
            <tbody>
                {move || {
                    let menus = store.menus().get();
                    Slot::ALL.iter().map(|slot| {
                        let slot = *slot;
                        view! {
                            <tr>
                                <th class="slot-label">{slot.label()}</th>
                                {Day::ALL.iter().map(|day| {
                                    let cell = Cell { day: *day, slot };
                                    render_cell(cell, occupant_at(&menus, cell).cloned())
                                }).collect_view()}
                            </tr>
                        }
                    }).collect_view()
                }}
            </tbody>
        </table>
    }
}
