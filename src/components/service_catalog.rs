//! Service Catalog View
//!
//! Filters (service type, specialty, free-text term) drive a debounced
//! search; results are paginated client-side.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_pager::{use_paginator, PageControls, PageRange};

use crate::api;
use crate::components::{LookupEntryForm, LookupKind, NewServiceForm};
use crate::config::{DEBOUNCE_MS, SERVICE_PAGER};
use crate::debounce::{use_debounced, LiveTicket};
use crate::feedback::notify_failure;
use crate::models::{Service, ServiceSearch};
use crate::store::{self, use_app_store};

fn format_price(price: Option<f64>) -> String {
    price.map(|p| format!("S/ {:.2}", p)).unwrap_or_else(|| "-".to_string())
}

#[component]
pub fn ServiceCatalog() -> impl IntoView {
    let app_store = use_app_store();
    let service_types = store::service_types(&app_store);
    let specialties = store::specialties(&app_store);

    let (service_type, set_service_type) = signal(String::new());
    let (specialty, set_specialty) = signal(String::new());
    let (term, set_term) = signal(String::new());
    let (services, set_services) = signal(Vec::<Service>::new());
    let (loading, set_loading) = signal(false);

    let search = use_debounced(DEBOUNCE_MS, move |(), ticket: LiveTicket| {
        let filter = ServiceSearch {
            service_type: service_type.get_untracked(),
            specialty: specialty.get_untracked(),
            term: term.get_untracked().trim().to_string(),
        };
        set_loading.set(true);
        spawn_local(async move {
            let result = api::search_services(&filter).await;
            if !ticket.is_current() {
                web_sys::console::log_1(&"[Catalog] Dropping stale search response".into());
                return;
            }
            match result {
                Ok(list) => set_services.set(list),
                Err(e) => notify_failure("Catalog", &e),
            }
            set_loading.set(false);
        });
    });

    // Lookups and the unfiltered list, once on mount. The list shares the
    // search ticket sequence: a search started meanwhile wins.
    Effect::new(move |_| {
        let ticket = search.issue();
        spawn_local(async move {
            match api::list_service_types().await {
                Ok(types) => store::store_set_service_types(&app_store, types),
                Err(e) => web_sys::console::error_1(&format!("[Catalog] Service types: {}", e).into()),
            }
            match api::list_specialties().await {
                Ok(list) => store::store_set_specialties(&app_store, list),
                Err(e) => web_sys::console::error_1(&format!("[Catalog] Specialties: {}", e).into()),
            }
            if !ticket.is_current() {
                return;
            }
            set_loading.set(true);
            let result = api::list_services().await;
            if !ticket.is_current() {
                web_sys::console::log_1(&"[Catalog] Dropping initial list, a search superseded it".into());
                return;
            }
            match result {
                Ok(list) => {
                    web_sys::console::log_1(&format!("[Catalog] Loaded {} services", list.len()).into());
                    set_services.set(list);
                }
                Err(e) => notify_failure("Catalog", &e),
            }
            set_loading.set(false);
        });
    });

    let pager = use_paginator(services.into(), SERVICE_PAGER);

    let on_created = Callback::new(move |service: Service| {
        set_services.update(|list| list.insert(0, service));
    });

    view! {
        <section class="service-catalog">
            <div class="catalog-filters">
                <select
                    on:change=move |ev| {
                        set_service_type.set(event_target_value(&ev));
                        search.run(());
                    }
                >
                    <option value="">"Todos los tipos"</option>
                    <For
                        each=move || service_types.get()
                        key=|t| t.id
                        children=move |t| view! { <option value=t.id.to_string()>{t.name}</option> }
                    />
                </select>
                <select
                    on:change=move |ev| {
                        set_specialty.set(event_target_value(&ev));
                        search.run(());
                    }
                >
                    <option value="">"Todas las especialidades"</option>
                    <For
                        each=move || specialties.get()
                        key=|s| s.id
                        children=move |s| view! { <option value=s.id.to_string()>{s.name}</option> }
                    />
                </select>
                <input
                    type="search"
                    placeholder="Buscar servicio..."
                    prop:value=move || term.get()
                    on:input=move |ev| {
                        set_term.set(event_target_value(&ev));
                        search.run(());
                    }
                />
            </div>

            <Show when=move || loading.get()>
                <div class="loading">"Cargando..."</div>
            </Show>

            <table class="catalog-table">
                <thead>
                    <tr>
                        <th>"Servicio"</th>
                        <th>"Tipo"</th>
                        <th>"Especialidad"</th>
                        <th>"Precio"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || pager.rows.get()
                        key=|s| s.id
                        children=move |s| view! {
                            <tr>
                                <td title=s.description.clone().unwrap_or_default()>{s.name}</td>
                                <td>{s.service_type.unwrap_or_default()}</td>
                                <td>{s.specialty.unwrap_or_default()}</td>
                                <td>{format_price(s.price)}</td>
                            </tr>
                        }
                    />
                </tbody>
            </table>

            <div class="pager">
                <PageRange snapshot=pager.snapshot />
                <PageControls snapshot=pager.snapshot on_select=pager.go_to />
            </div>

            <div class="catalog-admin">
                <NewServiceForm on_created=on_created />
                <LookupEntryForm kind=LookupKind::ServiceType />
                <LookupEntryForm kind=LookupKind::Specialty />
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(Some(45.5)), "S/ 45.50");
        assert_eq!(format_price(None), "-");
    }
}
