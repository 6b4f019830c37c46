//! Employee Registration Form
//!
//! Multipart form with masked document and phone fields.

use leptos::prelude::*;
use web_sys::HtmlFormElement;

use crate::components::NumericInput;
use crate::config::actions;
use crate::feedback::{alert, submit_with_feedback};
use crate::validation::NumericField;

/// Document types accepted for employees
const DOCUMENT_TYPES: &[(&str, &str, NumericField)] = &[
    ("DNI", "DNI", NumericField::Dni),
    ("CE", "Carné de extranjería", NumericField::ForeignId),
];

fn field_for(code: &str) -> NumericField {
    DOCUMENT_TYPES
        .iter()
        .find(|(c, _, _)| *c == code)
        .map(|(_, _, field)| *field)
        .unwrap_or(NumericField::Dni)
}

#[component]
pub fn EmployeeForm() -> impl IntoView {
    let (document_type, set_document_type) = signal(String::from("DNI"));
    let (sending, set_sending) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = event_target::<HtmlFormElement>(&ev);
        submit_with_feedback("Employee", form, set_sending, |form| {
            form.reset();
            alert("Empleado registrado correctamente.");
        });
    };

    view! {
        <form
            class="employee-form"
            action=actions::REGISTER_EMPLOYEE
            method="post"
            enctype="multipart/form-data"
            on:submit=on_submit
        >
            <input type="text" name="nombres" placeholder="Nombres" required=true />
            <input type="text" name="apellidos" placeholder="Apellidos" required=true />

            <select
                name="tipo_documento"
                on:change=move |ev| set_document_type.set(event_target_value(&ev))
            >
                {DOCUMENT_TYPES.iter().map(|(code, label, _)| view! {
                    <option value=*code>{*label}</option>
                }).collect_view()}
            </select>
            // Re-created on type change so the mask and length follow the type
            {move || view! {
                <NumericInput
                    field=field_for(&document_type.get())
                    name="numero_documento"
                    id="numero_documento"
                    placeholder="Número de documento"
                    required=true
                />
            }}

            <NumericInput field=NumericField::Phone name="telefono" id="telefono" placeholder="Teléfono" />
            <input type="email" name="correo" placeholder="Correo" />
            <input type="text" name="cargo" placeholder="Cargo" required=true />

            <button type="submit" disabled=move || sending.get()>"Registrar"</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_for_document_type() {
        assert_eq!(field_for("CE"), NumericField::ForeignId);
        assert_eq!(field_for("DNI"), NumericField::Dni);
        assert_eq!(field_for("??"), NumericField::Dni);
    }
}
