//! User Feedback
//!
//! Failures of an action surface as a blocking alert with a generic retry
//! message; details only go to the console.

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::HtmlFormElement;

use crate::api::{self, ApiError};
use crate::config::GENERIC_FAILURE;

pub fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

/// Log `err` under `context` and tell the user the action failed
pub fn notify_failure(context: &str, err: &ApiError) {
    web_sys::console::error_1(&format!("[{}] {}", context, err).into());
    alert(GENERIC_FAILURE);
}

/// Validate and submit `form`, toggling `sending` around the request.
/// `on_success` runs after a 2xx response.
pub fn submit_with_feedback<F>(context: &'static str, form: HtmlFormElement, sending: WriteSignal<bool>, on_success: F)
where
    F: FnOnce(&HtmlFormElement) + 'static,
{
    if !form.report_validity() {
        return;
    }
    sending.set(true);
    spawn_local(async move {
        match api::submit_form(&form).await {
            Ok(()) => {
                web_sys::console::log_1(&format!("[{}] Submitted to {}", context, form.action()).into());
                on_success(&form);
            }
            Err(e) => notify_failure(context, &e),
        }
        sending.set(false);
    });
}
