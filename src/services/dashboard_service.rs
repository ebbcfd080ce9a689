//! Resumen del dashboard: contadores, facturación y órdenes recientes

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;

use super::catalog::VEHICLE_NOT_FOUND;
use crate::models::{Customer, RecordId, Vehicle, WorkOrder, WorkOrderStatus};

const RECENT_ORDERS: usize = 5;

#[derive(Debug, Clone, Serialize)]
pub struct RecentOrder {
    pub id: RecordId,
    /// `marca modelo` o placeholder
    #[serde(rename = "veiculo")]
    pub vehicle: String,
    pub status: WorkOrderStatus,
    #[serde(rename = "dataEntrada")]
    pub entry_date: DateTime<Utc>,
    #[serde(rename = "valorTotal")]
    pub total: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    #[serde(rename = "totalClientes")]
    pub total_customers: usize,
    #[serde(rename = "totalVeiculos")]
    pub total_vehicles: usize,
    #[serde(rename = "ordensEmAndamento")]
    pub orders_in_progress: usize,
    /// Suma de `valorTotal` de todas las órdenes, sin filtrar por estado
    #[serde(rename = "faturamentoTotal")]
    pub revenue: Decimal,
    #[serde(rename = "ordensRecentes")]
    pub recent_orders: Vec<RecentOrder>,
}

pub fn summarize(customers: &[Customer], vehicles: &[Vehicle], orders: &[WorkOrder]) -> DashboardSummary {
    let by_id: HashMap<&RecordId, &Vehicle> = vehicles.iter().map(|v| (&v.id, v)).collect();

    let mut recent: Vec<&WorkOrder> = orders.iter().collect();
    recent.sort_by(|a, b| b.data.entry_date.cmp(&a.data.entry_date));

    let recent_orders = recent
        .into_iter()
        .take(RECENT_ORDERS)
        .map(|o| RecentOrder {
            id: o.id.clone(),
            vehicle: by_id
                .get(&o.data.vehicle_id)
                .map(|v| format!("{} {}", v.data.brand, v.data.model))
                .unwrap_or_else(|| VEHICLE_NOT_FOUND.to_string()),
            status: o.data.status,
            entry_date: o.data.entry_date,
            total: o.data.total,
        })
        .collect();

    DashboardSummary {
        total_customers: customers.len(),
        total_vehicles: vehicles.len(),
        orders_in_progress: orders
            .iter()
            .filter(|o| o.data.status == WorkOrderStatus::InProgress)
            .count(),
        revenue: orders.iter().map(|o| o.data.total).sum(),
        recent_orders,
    }
}
