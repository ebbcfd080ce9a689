//! Modelo de Serviço (catálogo de servicios del taller)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::RecordId;
use crate::clients::Resource;
use crate::utils::validation::{validate_non_negative, validate_not_empty};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ServiceData {
    #[serde(rename = "nome")]
    #[validate(custom = "validate_not_empty", length(max = 120))]
    pub name: String,

    #[serde(rename = "descricao", default)]
    pub description: String,

    /// Precio fijo del servicio
    #[serde(rename = "valor")]
    #[validate(custom = "validate_non_negative")]
    pub price: Decimal,

    /// Texto libre, p. ej. "2 horas"
    #[serde(rename = "tempoEstimado", default)]
    pub estimated_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: RecordId,
    #[serde(flatten)]
    pub data: ServiceData,
}

super::impl_record!(Service, ServiceData, Resource::Services, "Serviço");
