//! Patient lookups

use super::{get_json, ApiError};
use crate::config::endpoints;
use crate::models::Patient;

pub async fn list_patients() -> Result<Vec<Patient>, ApiError> {
    get_json(endpoints::PATIENTS).await
}
