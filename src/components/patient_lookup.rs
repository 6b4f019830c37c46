//! Patient Lookup View
//!
//! Client-side name filter over the patient list, paginated. Picking a row
//! fills the hidden `id_paciente` field of the surrounding form.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_pager::{use_paginator, PageControls, PageRange};

use crate::api;
use crate::config::{DEBOUNCE_MS, PATIENT_PAGER};
use crate::debounce::use_debounced;
use crate::feedback::notify_failure;
use crate::models::Patient;

/// Lowercase and strip Spanish diacritics so "Núñez" matches "nunez"
fn fold(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' | 'à' | 'ä' => 'a',
            'é' | 'è' | 'ë' => 'e',
            'í' | 'ì' | 'ï' => 'i',
            'ó' | 'ò' | 'ö' => 'o',
            'ú' | 'ù' | 'ü' => 'u',
            'ñ' => 'n',
            other => other,
        })
        .collect()
}

/// Every whitespace-separated word of `query` occurs in `name`
pub fn matches_name(query: &str, name: &str) -> bool {
    let name = fold(name);
    fold(query).split_whitespace().all(|word| name.contains(word))
}

#[component]
pub fn PatientLookup() -> impl IntoView {
    let (patients, set_patients) = signal(Vec::<Patient>::new());
    let (query, set_query) = signal(String::new());
    let (applied, set_applied) = signal(String::new());
    let (selected, set_selected) = signal::<Option<Patient>>(None);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::list_patients().await {
                Ok(list) => {
                    web_sys::console::log_1(&format!("[Patients] Loaded {} patients", list.len()).into());
                    set_patients.set(list);
                }
                Err(e) => notify_failure("Patients", &e),
            }
        });
    });

    let apply_filter = use_debounced(DEBOUNCE_MS, move |(), _| set_applied.set(query.get_untracked()));

    let filtered = Memo::new(move |_| {
        let q = applied.get();
        patients.with(|list| {
            list.iter()
                .filter(|p| matches_name(&q, &p.full_name))
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    let pager = use_paginator(filtered.into(), PATIENT_PAGER);

    view! {
        <div class="patient-lookup">
            <input
                type="hidden"
                name="id_paciente"
                prop:value=move || selected.get().map(|p| p.id.to_string()).unwrap_or_default()
            />
            <input
                type="search"
                placeholder="Buscar paciente por nombre..."
                prop:value=move || query.get()
                on:input=move |ev| {
                    set_query.set(event_target_value(&ev));
                    apply_filter.run(());
                }
            />
            {move || selected.get().map(|p| view! {
                <p class="selected-patient">"Paciente: " {p.full_name}</p>
            })}
            <ul class="patient-list">
                <For
                    each=move || pager.rows.get()
                    key=|p| p.id
                    children=move |p| {
                        let id = p.id;
                        let chosen = p.clone();
                        view! {
                            <li
                                class:selected=move || selected.get().map(|s| s.id) == Some(id)
                                on:click=move |_| set_selected.set(Some(chosen.clone()))
                            >
                                {p.full_name}
                            </li>
                        }
                    }
                />
            </ul>
            <div class="pager">
                <PageRange snapshot=pager.snapshot />
                <PageControls snapshot=pager.snapshot on_select=pager.go_to />
            </div>
        </div>
    }
}
