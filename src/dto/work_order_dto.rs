use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{RecordId, WorkOrder};

// Request para previsualizar el total de una selección
#[derive(Debug, Default, Deserialize)]
pub struct TotalPreviewRequest {
    #[serde(rename = "servicosIds", default)]
    pub service_ids: Vec<RecordId>,
    #[serde(rename = "pecasIds", default)]
    pub part_ids: Vec<RecordId>,
}

#[derive(Debug, Serialize)]
pub struct TotalPreviewResponse {
    #[serde(rename = "valorTotal")]
    pub total: Decimal,
}

// Orden con las etiquetas que muestra el listado
#[derive(Debug, Serialize)]
pub struct WorkOrderListItem {
    #[serde(flatten)]
    pub order: WorkOrder,
    /// Nombre del dueño del vehículo o placeholder
    pub cliente: String,
    /// `marca modelo (placa)` o placeholder
    pub veiculo: String,
}

// Resultado de guardar una orden, con el detalle del descuento de stock
#[derive(Debug, Serialize)]
pub struct WorkOrderSubmitResponse {
    #[serde(flatten)]
    pub order: WorkOrder,
    #[serde(rename = "pecasBaixadas")]
    pub decremented_parts: Vec<RecordId>,
    #[serde(rename = "pecasIgnoradas", skip_serializing_if = "Vec::is_empty")]
    pub skipped_parts: Vec<RecordId>,
}
