//! Catalog Lookup Store
//!
//! Uses Leptos reactive_stores so the filters and the new-service form share
//! one copy of the service types and specialties.

use leptos::prelude::*;
use reactive_stores::Store;
use crate::models::{ServiceType, Specialty};

#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    pub service_types: Vec<ServiceType>,
    pub specialties: Vec<Specialty>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_service_types(store: &AppStore, types: Vec<ServiceType>) {
    *store.service_types().write() = types;
}

pub fn store_add_service_type(store: &AppStore, service_type: ServiceType) {
    store.service_types().write().push(service_type);
}

pub fn store_set_specialties(store: &AppStore, specialties: Vec<Specialty>) {
    *store.specialties().write() = specialties;
}

pub fn store_add_specialty(store: &AppStore, specialty: Specialty) {
    store.specialties().write().push(specialty);
}

pub fn service_types(store: &AppStore) -> Signal<Vec<ServiceType>> {
    let store = *store;
    Signal::derive(move || store.service_types().get())
}

pub fn specialties(store: &AppStore) -> Signal<Vec<Specialty>> {
    let store = *store;
    Signal::derive(move || store.specialties().get())
}
