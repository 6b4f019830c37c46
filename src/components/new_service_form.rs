//! New Service Form Component
//!
//! Creates a catalog service through the JSON endpoint.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::feedback::{alert, notify_failure};
use crate::models::{NewService, Service};
use crate::store::{self, use_app_store};

/// Optional numeric field from a text input; blank means absent
fn parse_optional<T: std::str::FromStr>(value: &str) -> Result<Option<T>, ()> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value.parse().map(Some).map_err(|_| ())
}

/// Build the request body, `None` when a required field is missing or a
/// number does not parse
fn build_service(name: &str, description: &str, type_id: &str, specialty_id: &str, price: &str) -> Option<NewService> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    let description = description.trim();
    Some(NewService {
        name: name.to_string(),
        description: (!description.is_empty()).then(|| description.to_string()),
        service_type_id: parse_optional(type_id).ok()??,
        specialty_id: parse_optional(specialty_id).ok()?,
        price: parse_optional(price.replace(',', ".").as_str()).ok()?,
    })
}

#[component]
pub fn NewServiceForm(#[prop(into)] on_created: Callback<Service>) -> impl IntoView {
    let app_store = use_app_store();
    let service_types = store::service_types(&app_store);
    let specialties = store::specialties(&app_store);

    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (type_id, set_type_id) = signal(String::new());
    let (specialty_id, set_specialty_id) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let (sending, set_sending) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(body) = build_service(
            &name.get(),
            &description.get(),
            &type_id.get(),
            &specialty_id.get(),
            &price.get(),
        ) else {
            alert("Complete el nombre y el tipo de servicio; el precio debe ser numérico.");
            return;
        };
        set_sending.set(true);
        spawn_local(async move {
            match api::create_service(&body).await {
                Ok(service) => {
                    web_sys::console::log_1(&format!("[Catalog] Created service #{}", service.id).into());
                    set_name.set(String::new());
                    set_description.set(String::new());
                    set_price.set(String::new());
                    on_created.run(service);
                }
                Err(e) => notify_failure("Catalog", &e),
            }
            set_sending.set(false);
        });
    };

    view! {
        <form class="new-service-form" on:submit=on_submit>
            <h3>"Nuevo servicio"</h3>
            <input
                type="text"
                placeholder="Nombre"
                required=true
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <textarea
                placeholder="Descripción"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            ></textarea>
            <select required=true on:change=move |ev| set_type_id.set(event_target_value(&ev))>
                <option value="">"Tipo de servicio"</option>
                <For
                    each=move || service_types.get()
                    key=|t| t.id
                    children=move |t| view! { <option value=t.id.to_string()>{t.name}</option> }
                />
            </select>
            <select on:change=move |ev| set_specialty_id.set(event_target_value(&ev))>
                <option value="">"Sin especialidad"</option>
                <For
                    each=move || specialties.get()
                    key=|s| s.id
                    children=move |s| view! { <option value=s.id.to_string()>{s.name}</option> }
                />
            </select>
            <input
                type="text"
                inputmode="decimal"
                placeholder="Precio"
                prop:value=move || price.get()
                on:input=move |ev| set_price.set(event_target_value(&ev))
            />
            <button type="submit" disabled=move || sending.get()>"Guardar"</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_service() {
        let service = build_service(" Ecografía ", "", "3", "", "80,50").unwrap();
        assert_eq!(service.name, "Ecografía");
        assert_eq!(service.description, None);
        assert_eq!(service.service_type_id, 3);
        assert_eq!(service.specialty_id, None);
        assert_eq!(service.price, Some(80.5));
    }

    #[test]
    fn test_build_service_requires_name_and_type() {
        assert!(build_service("", "", "3", "", "").is_none());
        assert!(build_service("Rayos X", "", "", "", "").is_none());
        assert!(build_service("Rayos X", "", "3", "", "abc").is_none());
    }
}
