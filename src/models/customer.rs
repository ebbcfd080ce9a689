//! Modelo de Cliente
//!
//! Mapea la colección `/clientes` de la API del taller.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::RecordId;
use crate::clients::Resource;
use crate::utils::validation::{validate_not_empty, validate_phone};

/// Datos editables de un cliente
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CustomerData {
    #[serde(rename = "nome")]
    #[validate(custom = "validate_not_empty", length(max = 120))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[serde(rename = "telefone")]
    #[validate(custom = "validate_phone")]
    pub phone: String,

    #[serde(rename = "endereco", default)]
    #[validate(length(max = 255))]
    pub address: String,
}

/// Cliente persistido
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: RecordId,
    #[serde(flatten)]
    pub data: CustomerData,
}

super::impl_record!(Customer, CustomerData, Resource::Customers, "Cliente");
