//! Notifications
//!
//! Transient success/error toasts. Fire-and-forget: callers push a message
//! and never hear back.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn class(self) -> &'static str {
        match self {
            NotificationKind::Success => "notification success",
            NotificationKind::Error => "notification error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u32,
    pub kind: NotificationKind,
    pub message: String,
}

/// Toast queue provided via context
#[derive(Clone, Copy)]
pub struct Notifier {
    pub items: RwSignal<Vec<Notification>>,
    next_id: StoredValue<u32>,
    lifetime_ms: u32,
}

impl Notifier {
    pub fn new(lifetime_ms: u32) -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
            lifetime_ms,
        }
    }

    pub fn notify(&self, kind: NotificationKind, message: impl Into<String>) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id.wrapping_add(1));
        self.items.update(|v| {
            v.push(Notification {
                id,
                kind,
                message: message.into(),
            })
        });

        let this = *self;
        Timeout::new(self.lifetime_ms, move || this.dismiss(id)).forget();
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(NotificationKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(NotificationKind::Error, message);
    }

    pub fn dismiss(&self, id: u32) {
        // The owner may already be gone when a late timer fires
        let _ = self.items.try_update(|v| v.retain(|n| n.id != id));
    }
}

/// Get the notifier from context
pub fn use_notifier() -> Notifier {
    expect_context::<Notifier>()
}

/// Stack of live toasts, click to close
#[component]
pub fn NotificationStack() -> impl IntoView {
    let notifier = use_notifier();

    view! {
        <div class="notification-stack">
            <For
                each=move || notifier.items.get()
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    view! {
                        <div class=n.kind.class() on:click=move |_| notifier.dismiss(id)>
                            {n.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
