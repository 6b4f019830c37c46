//! UI Components
//!
//! Views mounted into the server-rendered pages, and their building blocks.

mod numeric_input;
mod service_catalog;
mod new_service_form;
mod lookup_entry_form;
mod patient_lookup;
mod schedule_block;
mod employee_form;

pub use numeric_input::NumericInput;
pub use service_catalog::ServiceCatalog;
pub use new_service_form::NewServiceForm;
pub use lookup_entry_form::{LookupEntryForm, LookupKind};
pub use patient_lookup::PatientLookup;
pub use schedule_block::ScheduleBlock;
pub use employee_form::EmployeeForm;
