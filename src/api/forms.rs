//! Multipart form submission

use wasm_bindgen::JsValue;
use web_sys::{FormData, HtmlFormElement, Request, RequestInit};

use super::{send, ApiError};

/// POST the form's fields as `multipart/form-data` to its declared action.
/// Any 2xx counts as success; the response body is ignored.
pub async fn submit_form(form: &HtmlFormElement) -> Result<(), ApiError> {
    let data = FormData::new_with_form(form).map_err(ApiError::network)?;
    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&JsValue::from(data));
    let request = Request::new_with_str_and_init(&form.action(), &init).map_err(ApiError::network)?;
    send(request).await.map(|_| ())
}
