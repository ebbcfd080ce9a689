//! Modelo de Ordem de Serviço
//!
//! Una orden vincula un vehículo con servicios y piezas del catálogo. El
//! `valorTotal` es derivado: siempre se recalcula a partir del catálogo.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use super::{validate_record_ref, RecordId};
use crate::clients::Resource;

/// Estado de la orden - conjunto cerrado, valores de wire en portugués
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum WorkOrderStatus {
    #[default]
    #[serde(rename = "Aguardando aprovação")]
    AwaitingApproval,
    #[serde(rename = "Orçamento aprovado")]
    BudgetApproved,
    #[serde(rename = "Em andamento")]
    InProgress,
    #[serde(rename = "Concluído")]
    Completed,
    #[serde(rename = "Entregue")]
    Delivered,
    #[serde(rename = "Cancelado")]
    Canceled,
}

impl WorkOrderStatus {
    pub const ALL: [WorkOrderStatus; 6] = [
        WorkOrderStatus::AwaitingApproval,
        WorkOrderStatus::BudgetApproved,
        WorkOrderStatus::InProgress,
        WorkOrderStatus::Completed,
        WorkOrderStatus::Delivered,
        WorkOrderStatus::Canceled,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            WorkOrderStatus::AwaitingApproval => "Aguardando aprovação",
            WorkOrderStatus::BudgetApproved => "Orçamento aprovado",
            WorkOrderStatus::InProgress => "Em andamento",
            WorkOrderStatus::Completed => "Concluído",
            WorkOrderStatus::Delivered => "Entregue",
            WorkOrderStatus::Canceled => "Cancelado",
        }
    }
}

impl fmt::Display for WorkOrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Cuerpo completo de una orden (sin id)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct WorkOrderData {
    #[serde(rename = "veiculoId")]
    #[validate(custom = "validate_record_ref")]
    pub vehicle_id: RecordId,

    #[serde(rename = "dataEntrada", default = "Utc::now")]
    pub entry_date: DateTime<Utc>,

    #[serde(rename = "dataSaida", default)]
    pub exit_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub status: WorkOrderStatus,

    #[serde(rename = "descricao", default)]
    #[validate(length(max = 2000))]
    pub description: String,

    #[serde(rename = "servicosIds", default)]
    pub service_ids: Vec<RecordId>,

    #[serde(rename = "pecasIds", default)]
    pub part_ids: Vec<RecordId>,

    #[serde(rename = "valorTotal", default)]
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkOrder {
    pub id: RecordId,
    #[serde(flatten)]
    pub data: WorkOrderData,
}

super::impl_record!(WorkOrder, WorkOrderData, Resource::WorkOrders, "Ordem de serviço");
