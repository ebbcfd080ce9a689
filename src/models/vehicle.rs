//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle de la colección `/veiculos`.
//! Cada vehículo referencia a su dueño por `clienteId`.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{validate_record_ref, RecordId};
use crate::clients::Resource;
use crate::utils::validation::{validate_not_empty, validate_plate};

/// Datos editables de un vehículo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct VehicleData {
    #[serde(rename = "clienteId")]
    #[validate(custom = "validate_record_ref")]
    pub customer_id: RecordId,

    #[serde(rename = "marca")]
    #[validate(custom = "validate_not_empty", length(max = 100))]
    pub brand: String,

    #[serde(rename = "modelo")]
    #[validate(custom = "validate_not_empty", length(max = 100))]
    pub model: String,

    #[serde(rename = "ano")]
    #[validate(range(min = 1900, max = 2100))]
    pub year: i32,

    #[serde(rename = "placa")]
    #[validate(custom = "validate_plate")]
    pub plate: String,
}

/// Vehicle persistido
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: RecordId,
    #[serde(flatten)]
    pub data: VehicleData,
}

super::impl_record!(Vehicle, VehicleData, Resource::Vehicles, "Veículo");

impl Vehicle {
    /// Etiqueta `marca modelo (placa)` usada en listados
    pub fn label(&self) -> String {
        format!("{} {} ({})", self.data.brand, self.data.model, self.data.plate)
    }
}
