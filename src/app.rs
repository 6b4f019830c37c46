//! Clinic Admin App
//!
//! Each server-rendered page carries at most a few mount points; the view
//! for each one is mounted under its own root with its own store.

use leptos::prelude::*;
use reactive_stores::Store;
use wasm_bindgen::JsCast;

use crate::components::{EmployeeForm, PatientLookup, ScheduleBlock, ServiceCatalog};
use crate::config::MOUNT_POINTS;
use crate::dom_table;
use crate::store::AppState;

/// Which view a mount point hosts
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    ServiceCatalog,
    PatientLookup,
    ScheduleBlock,
    EmployeeForm,
}

#[component]
pub fn App(section: Section) -> impl IntoView {
    provide_context(Store::new(AppState::default()));

    match section {
        Section::ServiceCatalog => view! { <ServiceCatalog /> }.into_any(),
        Section::PatientLookup => view! { <PatientLookup /> }.into_any(),
        Section::ScheduleBlock => view! { <ScheduleBlock /> }.into_any(),
        Section::EmployeeForm => view! { <EmployeeForm /> }.into_any(),
    }
}

/// Paginate server-rendered tables, then mount a view on every mount
/// point found in the document
pub fn start() {
    dom_table::attach_configured();

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    for &(id, section) in MOUNT_POINTS {
        let Some(root) = document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            continue;
        };
        web_sys::console::log_1(&format!("[APP] Mounting {:?} on #{}", section, id).into());
        leptos::mount::mount_to(root, move || view! { <App section=section /> }).forget();
    }
}
