//! Frontend Models
//!
//! Data structures matching the JSON returned by the clinic backend.
//! Wire names are Spanish; fields are renamed on the Rust side.

use serde::{Deserialize, Serialize};

/// `GET /seguridad/api/pacientes`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    #[serde(rename = "id_paciente")]
    pub id: u32,
    #[serde(rename = "nombre_completo")]
    pub full_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceType {
    #[serde(rename = "id_tipo_servicio")]
    pub id: u32,
    #[serde(rename = "nombre")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Specialty {
    #[serde(rename = "id_especialidad")]
    pub id: u32,
    #[serde(rename = "nombre")]
    pub name: String,
}

/// Catalog row. Listing and search endpoints do not always send every column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    #[serde(rename = "id_servicio")]
    pub id: u32,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,
    #[serde(rename = "tipo_servicio", default)]
    pub service_type: Option<String>,
    #[serde(rename = "especialidad", default)]
    pub specialty: Option<String>,
    #[serde(rename = "precio", default)]
    pub price: Option<f64>,
}

/// `GET /api/programaciones?fecha=YYYY-MM-DD`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSlot {
    #[serde(rename = "id_programacion")]
    pub id: u32,
    #[serde(rename = "dia_texto")]
    pub day_label: String,
    #[serde(rename = "hora_inicio")]
    pub starts_at: String,
    #[serde(rename = "hora_fin")]
    pub ends_at: String,
    #[serde(rename = "medico", default)]
    pub doctor: Option<String>,
    #[serde(rename = "estado", default)]
    pub status: Option<String>,
}

/// Body of `POST /admin/api/servicios/buscar`. Empty strings mean "any".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ServiceSearch {
    #[serde(rename = "tipo_servicio")]
    pub service_type: String,
    #[serde(rename = "especialidad")]
    pub specialty: String,
    #[serde(rename = "termino")]
    pub term: String,
}

/// Body of `POST /admin/api/servicios`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewService {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: Option<String>,
    #[serde(rename = "id_tipo_servicio")]
    pub service_type_id: u32,
    #[serde(rename = "id_especialidad")]
    pub specialty_id: Option<u32>,
    #[serde(rename = "precio")]
    pub price: Option<f64>,
}

/// Body of `POST /admin/api/tipos-servicio` and `/admin/api/especialidades`
#[derive(Debug, Serialize)]
pub struct NamedEntry<'a> {
    #[serde(rename = "nombre")]
    pub name: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patient_from_wire() {
        let json = r#"[{"id_paciente": 4, "nombre_completo": "Ana Quispe"}]"#;
        let patients: Vec<Patient> = serde_json::from_str(json).unwrap();
        assert_eq!(patients, vec![Patient { id: 4, full_name: "Ana Quispe".to_string() }]);
    }

    #[test]
    fn test_service_tolerates_missing_columns() {
        let json = r#"{"id_servicio": 9, "nombre": "Electrocardiograma", "precio": 45.5}"#;
        let service: Service = serde_json::from_str(json).unwrap();
        assert_eq!(service.id, 9);
        assert_eq!(service.price, Some(45.5));
        assert_eq!(service.specialty, None);
    }

    #[test]
    fn test_schedule_slot_ignores_extra_fields() {
        let json = r#"{
            "id_programacion": 31,
            "dia_texto": "Lunes",
            "hora_inicio": "08:00",
            "hora_fin": "12:00",
            "consultorio": "B-2"
        }"#;
        let slot: ScheduleSlot = serde_json::from_str(json).unwrap();
        assert_eq!(slot.day_label, "Lunes");
        assert_eq!(slot.ends_at, "12:00");
        assert_eq!(slot.status, None);
    }

    #[test]
    fn test_search_body_uses_wire_names() {
        let body = ServiceSearch {
            service_type: "2".to_string(),
            specialty: String::new(),
            term: "cardio".to_string(),
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"tipo_servicio": "2", "especialidad": "", "termino": "cardio"})
        );
    }
}
