//! Modelos del sistema
//!
//! Este módulo contiene los registros del taller tal como viajan por la API
//! REST externa (nombres de campo en portugués, camelCase).

pub mod customer;
pub mod part;
pub mod service;
pub mod vehicle;
pub mod work_order;

pub use customer::{Customer, CustomerData};
pub use part::{Part, PartData};
pub use service::{Service, ServiceData};
pub use vehicle::{Vehicle, VehicleData};
pub use work_order::{WorkOrder, WorkOrderData, WorkOrderStatus};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use validator::{Validate, ValidationError};

use crate::clients::Resource;

/// Identificador de un registro en la API del taller.
///
/// json-server asigna ids numéricos o de texto según la versión; ambos se
/// normalizan a texto.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Default)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(value) => RecordId(value),
            RawId::Signed(value) => RecordId(value.to_string()),
            RawId::Unsigned(value) => RecordId(value.to_string()),
        })
    }
}

/// Referencia obligatoria a otro registro
pub fn validate_record_ref(value: &RecordId) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new("record_ref"));
    }
    Ok(())
}

/// Registro persistido en una colección de la API del taller.
///
/// `Draft` es el cuerpo sin `id` que se envía al crear o reemplazar.
pub trait Record: Serialize + DeserializeOwned + Clone + fmt::Debug + Send + Sync + 'static {
    type Draft: Serialize + DeserializeOwned + Validate + Clone + fmt::Debug + Send + Sync + 'static;

    const RESOURCE: Resource;
    /// Nombre legible usado en mensajes ("Cliente", "Peça", ...)
    const LABEL: &'static str;

    fn id(&self) -> &RecordId;
    fn data(&self) -> &Self::Draft;
    fn from_draft(id: RecordId, draft: Self::Draft) -> Self;
}

macro_rules! impl_record {
    ($record:ty, $draft:ty, $resource:expr, $label:expr) => {
        impl $crate::models::Record for $record {
            type Draft = $draft;

            const RESOURCE: $crate::clients::Resource = $resource;
            const LABEL: &'static str = $label;

            fn id(&self) -> &$crate::models::RecordId {
                &self.id
            }

            fn data(&self) -> &Self::Draft {
                &self.data
            }

            fn from_draft(id: $crate::models::RecordId, draft: Self::Draft) -> Self {
                Self { id, data: draft }
            }
        }
    };
}

pub(crate) use impl_record;
