//! Application Configuration
//!
//! Endpoints, timings and the per-page pagination/anchor setup. The backend
//! serves this bundle from the same origin, so paths are relative.

use leptos_pager::{PagerConfig, SinglePagePolicy};

use crate::app::Section;
use crate::dom_table::TableAnchors;

pub mod endpoints {
    pub const PATIENTS: &str = "/seguridad/api/pacientes";
    pub const SERVICE_TYPES: &str = "/admin/api/tipos-servicio";
    pub const SPECIALTIES: &str = "/admin/api/especialidades";
    pub const SERVICES: &str = "/admin/api/servicios";
    pub const SERVICE_SEARCH: &str = "/admin/api/servicios/buscar";
    pub const SCHEDULES: &str = "/api/programaciones";
}

/// Form actions for the views that render their own `<form>`
pub mod actions {
    pub const REGISTER_EMPLOYEE: &str = "/admin/empleados/registrar";
    pub const BLOCK_SCHEDULE: &str = "/admin/programaciones/bloquear";
}

/// Quiet period before a search/filter input fires
pub const DEBOUNCE_MS: u32 = 300;

pub const GENERIC_FAILURE: &str = "No se pudo completar la operación. Inténtelo nuevamente.";

pub const SERVICE_PAGER: PagerConfig = PagerConfig::new(10);
pub const PATIENT_PAGER: PagerConfig = PagerConfig::new(20).with_single_page(SinglePagePolicy::ShowActive);

/// A server-rendered table paginated in place
pub struct DomTable {
    pub name: &'static str,
    pub anchors: TableAnchors,
    pub pager: PagerConfig,
}

pub const DOM_TABLES: &[DomTable] = &[
    DomTable {
        name: "incidencias",
        anchors: TableAnchors {
            rows: "tablaIncidencias",
            range_start: "inicioIncidencias",
            range_end: "finIncidencias",
            range_total: Some("totalIncidencias"),
            controls: "paginacionIncidencias",
        },
        pager: PagerConfig::new(10),
    },
    DomTable {
        name: "empleados",
        anchors: TableAnchors {
            rows: "tablaEmpleados",
            range_start: "inicioEmpleados",
            range_end: "finEmpleados",
            range_total: Some("totalEmpleados"),
            controls: "paginacionEmpleados",
        },
        pager: PagerConfig::new(10),
    },
    DomTable {
        name: "roles",
        anchors: TableAnchors {
            rows: "tablaRoles",
            range_start: "inicioRoles",
            range_end: "finRoles",
            range_total: None,
            controls: "paginacionRoles",
        },
        pager: PagerConfig::new(8).with_single_page(SinglePagePolicy::ShowActive),
    },
];

/// Element ids where a view is mounted when present on the page
pub const MOUNT_POINTS: &[(&str, Section)] = &[
    ("catalogo-servicios", Section::ServiceCatalog),
    ("buscar-paciente", Section::PatientLookup),
    ("bloqueo-horarios", Section::ScheduleBlock),
    ("registro-empleado", Section::EmployeeForm),
];
