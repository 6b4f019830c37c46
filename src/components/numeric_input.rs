//! Numeric Input Component
//!
//! Text input that only ever holds digits, with a length check on blur.

use leptos::prelude::*;
use web_sys::HtmlInputElement;

use crate::validation::{accepts_key, apply_paste, sanitize, validity_message, NumericField};

#[component]
pub fn NumericInput(
    field: NumericField,
    #[prop(into)] name: String,
    #[prop(into)] id: String,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let with_modifier = ev.ctrl_key() || ev.meta_key() || ev.alt_key();
        if !accepts_key(&ev.key(), with_modifier) {
            ev.prevent_default();
        }
    };

    // Covers autofill and IME input that bypass keydown
    let on_input = move |ev: web_sys::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let raw = input.value();
        let clean = sanitize(&raw, field);
        if clean != raw {
            input.set_value(&clean);
        }
        input.set_custom_validity("");
    };

    let on_paste = move |ev: web_sys::ClipboardEvent| {
        let Some(pasted) = ev.clipboard_data().and_then(|data| data.get_data("text").ok()) else {
            return;
        };
        ev.prevent_default();
        let input = event_target::<HtmlInputElement>(&ev);
        let value = input.value();
        let start = input.selection_start().ok().flatten().map(|v| v as usize).unwrap_or(value.len());
        let end = input.selection_end().ok().flatten().map(|v| v as usize).unwrap_or(start);
        let (next, caret) = apply_paste(&value, start, end, &pasted, field);
        input.set_value(&next);
        let _ = input.set_selection_range(caret as u32, caret as u32);
        input.set_custom_validity("");
    };

    let on_blur = move |ev: web_sys::FocusEvent| {
        let input = event_target::<HtmlInputElement>(&ev);
        match validity_message(&input.value(), field) {
            Some(message) => {
                input.set_custom_validity(&message);
                input.report_validity();
            }
            None => input.set_custom_validity(""),
        }
    };

    view! {
        <input
            type="text"
            inputmode="numeric"
            autocomplete="off"
            id=id
            name=name
            placeholder=placeholder
            maxlength=field.max_len()
            required=required
            on:keydown=on_keydown
            on:input=on_input
            on:paste=on_paste
            on:blur=on_blur
        />
    }
}
