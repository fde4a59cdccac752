//! Balance Badge Component
//!
//! Per-menu nutritional balance indicator with a hover tooltip. The tooltip
//! lives at page level so at most one is shown at a time.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::balance::{icon, level_class, summary_text, tooltip_anchor};
use crate::models::BalanceAnalysis;
use crate::store::{use_app_store, AppStateStoreFields};

/// Tooltip currently shown, with its fixed position
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipState {
    pub analysis: BalanceAnalysis,
    pub x: f64,
    pub y: f64,
}

/// Page-level tooltip slot provided via context
#[derive(Clone, Copy)]
pub struct BalanceTooltip(pub RwSignal<Option<TooltipState>>);

#[component]
pub fn BalanceBadge(menu_id: u32) -> impl IntoView {
    let store = use_app_store();
    let tooltip = expect_context::<BalanceTooltip>();

    let analysis = Memo::new(move |_| store.balance().with(|b| b.get(&menu_id).cloned()));

    let on_mouseenter = move |ev: web_sys::MouseEvent| {
        let Some(analysis) = analysis.get_untracked() else {
            return;
        };
        let Some(el) = ev.current_target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        let (x, y) = tooltip_anchor(rect.left(), rect.width(), rect.bottom());
        tooltip.0.set(Some(TooltipState { analysis, x, y }));
    };

    view! {
        {move || match analysis.get() {
            Some(a) => view! {
                <span
                    class=format!("balance-badge {}", level_class(a.level))
                    title=summary_text(&a)
                    on:mouseenter=on_mouseenter
                    on:mouseleave=move |_| tooltip.0.set(None)
                >
                    <span class="balance-indicator">{icon(a.level)}</span>
                </span>
            }.into_any(),
            None => view! {
                <span class="balance-badge pending">
                    <span class="balance-indicator">"·"</span>
                </span>
            }.into_any(),
        }}
    }
}

/// Floating tooltip, rendered once per page
#[component]
pub fn BalanceTooltipView() -> impl IntoView {
    let tooltip = expect_context::<BalanceTooltip>();

    view! {
        {move || tooltip.0.get().map(|t| {
            let style = format!("position: fixed; left: {}px; top: {}px; transform: translateX(-50%);", t.x, t.y);
            let a = t.analysis;
            view! {
                <div class="balance-tooltip" style=style>
                    <h4>{a.message.clone()}</h4>
                    {(!a.categories.is_empty()).then(|| view! {
                        <div class="tooltip-section"><strong>"Present:"</strong></div>
                        {a.categories.iter().map(|c| view! {
                            <div class="category-item present-item">{format!("✓ {}", c)}</div>
                        }).collect_view()}
                    })}
                    {(!a.missing.is_empty()).then(|| view! {
                        <div class="tooltip-section"><strong>"Missing:"</strong></div>
                        {a.missing.iter().map(|c| view! {
                            <div class="category-item missing-item">{format!("✗ {}", c)}</div>
                        }).collect_view()}
                    })}
                </div>
            }
        })}
    }
}
