//! Modelo de Peça (inventario)
//!
//! `quantidade` es el stock disponible; las órdenes de servicio lo
//! decrementan de a una unidad por uso.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::RecordId;
use crate::clients::Resource;
use crate::utils::validation::{validate_non_negative, validate_not_empty};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct PartData {
    #[serde(rename = "nome")]
    #[validate(custom = "validate_not_empty", length(max = 120))]
    pub name: String,

    #[serde(rename = "codigo", default)]
    #[validate(length(max = 60))]
    pub code: String,

    #[serde(rename = "marca", default)]
    pub brand: String,

    #[serde(rename = "preco")]
    #[validate(custom = "validate_non_negative")]
    pub price: Decimal,

    #[serde(rename = "quantidade")]
    #[validate(range(min = 0))]
    pub quantity: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub id: RecordId,
    #[serde(flatten)]
    pub data: PartData,
}

super::impl_record!(Part, PartData, Resource::Parts, "Peça");

impl Part {
    pub fn in_stock(&self) -> bool {
        self.data.quantity > 0
    }
}
