//! Application Context
//!
//! Shared state provided via Leptos Context API.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload page data from the server - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload page data from the server - write
    set_reload_trigger: WriteSignal<u32>,
    /// Planner week, relative to the current one - read
    pub week_offset: ReadSignal<i32>,
    /// Planner week, relative to the current one - write
    set_week_offset: WriteSignal<i32>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        week_offset: (ReadSignal<i32>, WriteSignal<i32>),
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            week_offset: week_offset.0,
            set_week_offset: week_offset.1,
        }
    }

    /// Trigger a reload of page data
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Reload once the user had time to read the success toast
    pub fn reload_after(&self, delay_ms: u32) {
        let this = *self;
        Timeout::new(delay_ms, move || this.reload()).forget();
    }

    pub fn shift_week(&self, delta: i32) {
        self.set_week_offset.update(|w| *w += delta);
    }

    pub fn current_week(&self) {
        self.set_week_offset.set(0);
    }

    /// Whether a load started for `week` still matches the navigation
    pub fn is_showing(&self, week: i32) -> bool {
        self.week_offset.get_untracked() == week
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_for_left_week_is_stale() {
        let ctx = AppContext::new(signal(0), signal(0));
        let started_for = ctx.week_offset.get_untracked();
        ctx.shift_week(1);
        ctx.shift_week(1);
        assert!(!ctx.is_showing(started_for));
        assert!(ctx.is_showing(2));

        ctx.current_week();
        assert!(ctx.is_showing(started_for));
    }
}
