#![allow(warnings)]
//! Clinic Admin Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod debounce;
mod dom_table;
mod feedback;
mod models;
mod store;
mod validation;

fn main() {
    console_error_panic_hook::set_once();
    app::start();
}
