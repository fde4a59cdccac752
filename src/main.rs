//! Menu Planner Frontend Entry Point

mod api;
mod app;
mod balance;
mod components;
mod config;
mod context;
mod error;
mod forms;
mod models;
mod notify;
mod picker;
mod planner;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
