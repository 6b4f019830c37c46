//! Service Catalog
//!
//! Service types, specialties and the services themselves.

use super::{get_json, post_json, ApiError};
use crate::config::endpoints;
use crate::models::{NamedEntry, NewService, Service, ServiceSearch, ServiceType, Specialty};

// ========================
// Lookups
// ========================

pub async fn list_service_types() -> Result<Vec<ServiceType>, ApiError> {
    get_json(endpoints::SERVICE_TYPES).await
}

pub async fn create_service_type(name: &str) -> Result<ServiceType, ApiError> {
    post_json(endpoints::SERVICE_TYPES, &NamedEntry { name }).await
}

pub async fn list_specialties() -> Result<Vec<Specialty>, ApiError> {
    get_json(endpoints::SPECIALTIES).await
}

pub async fn create_specialty(name: &str) -> Result<Specialty, ApiError> {
    post_json(endpoints::SPECIALTIES, &NamedEntry { name }).await
}

// ========================
// Services
// ========================

pub async fn list_services() -> Result<Vec<Service>, ApiError> {
    get_json(endpoints::SERVICES).await
}

pub async fn create_service(service: &NewService) -> Result<Service, ApiError> {
    post_json(endpoints::SERVICES, service).await
}

pub async fn search_services(filter: &ServiceSearch) -> Result<Vec<Service>, ApiError> {
    post_json(endpoints::SERVICE_SEARCH, filter).await
}
