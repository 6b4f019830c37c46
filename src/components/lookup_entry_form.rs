//! Lookup Entry Form Component
//!
//! Inline form adding a service type or a specialty to the catalog.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::feedback::notify_failure;
use crate::store::{self, use_app_store};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LookupKind {
    ServiceType,
    Specialty,
}

impl LookupKind {
    fn placeholder(self) -> &'static str {
        match self {
            LookupKind::ServiceType => "Nuevo tipo de servicio...",
            LookupKind::Specialty => "Nueva especialidad...",
        }
    }
}

#[component]
pub fn LookupEntryForm(kind: LookupKind) -> impl IntoView {
    let app_store = use_app_store();
    let (name, set_name) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = name.get().trim().to_string();
        if text.is_empty() { return; }

        spawn_local(async move {
            let result = match kind {
                LookupKind::ServiceType => api::create_service_type(&text)
                    .await
                    .map(|t| store::store_add_service_type(&app_store, t)),
                LookupKind::Specialty => api::create_specialty(&text)
                    .await
                    .map(|s| store::store_add_specialty(&app_store, s)),
            };
            match result {
                Ok(()) => set_name.set(String::new()),
                Err(e) => notify_failure("Catalog", &e),
            }
        });
    };

    view! {
        <form class="lookup-entry-form" on:submit=on_submit>
            <input
                type="text"
                placeholder=kind.placeholder()
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <button type="submit">"+"</button>
        </form>
    }
}
