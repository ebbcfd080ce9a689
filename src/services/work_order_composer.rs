//! Composición de órdenes de servicio
//!
//! Calcula el total derivado de una selección de servicios y piezas, bloquea
//! órdenes con piezas sin stock y, al guardar, descuenta una unidad de stock
//! por cada pieza recién agregada.
//!
//! El flujo es secuencial y no transaccional: si un descuento falla después
//! de persistir la orden, la orden queda guardada y el error se propaga.

use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use super::catalog::CatalogSnapshot;
use crate::models::{Part, RecordId, WorkOrder, WorkOrderData};
use crate::repositories::{RecordStore, Stores};
use crate::utils::errors::{AppError, AppResult};

/// Total = precios de servicios + precios de piezas resolubles en el catálogo.
/// Ids desconocidos suman cero.
pub fn compute_total(
    service_ids: &[RecordId],
    part_ids: &[RecordId],
    catalog: &CatalogSnapshot,
) -> Decimal {
    let services: Decimal = service_ids
        .iter()
        .filter_map(|id| catalog.service(id))
        .map(|s| s.data.price)
        .sum();

    let parts: Decimal = part_ids
        .iter()
        .filter_map(|id| catalog.part(id))
        .map(|p| p.data.price)
        .sum();

    services + parts
}

/// Falla con la primera pieza cuyo stock sea <= 0.
/// Piezas que no están en el catálogo no bloquean.
pub fn check_availability(part_ids: &[RecordId], catalog: &CatalogSnapshot) -> AppResult<()> {
    for id in part_ids {
        if let Some(part) = catalog.part(id) {
            if !part.in_stock() {
                return Err(AppError::InsufficientStock {
                    part_id: part.id.to_string(),
                    part_name: part.data.name.clone(),
                });
            }
        }
    }
    Ok(())
}

/// Piezas que disparan descuento de stock.
///
/// En una edición son las que no estaban en la revisión anterior (quitar una
/// pieza no repone stock). En una creación son todas, duplicados incluidos.
pub fn newly_added_parts(part_ids: &[RecordId], previous: Option<&WorkOrder>) -> Vec<RecordId> {
    match previous {
        Some(previous) => part_ids
            .iter()
            .filter(|id| !previous.data.part_ids.contains(id))
            .cloned()
            .collect(),
        None => part_ids.to_vec(),
    }
}

/// Resultado de guardar una orden
#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    pub order: WorkOrder,
    /// Piezas descontadas, en orden y con repeticiones
    pub decremented_parts: Vec<RecordId>,
    /// Piezas nuevas que ya no existían en el catálogo al descontar
    pub skipped_parts: Vec<RecordId>,
}

pub struct WorkOrderComposer {
    orders: Arc<dyn RecordStore<WorkOrder>>,
    parts: Arc<dyn RecordStore<Part>>,
}

impl WorkOrderComposer {
    pub fn new(orders: Arc<dyn RecordStore<WorkOrder>>, parts: Arc<dyn RecordStore<Part>>) -> Self {
        Self { orders, parts }
    }

    pub fn from_stores(stores: &Stores) -> Self {
        Self::new(Arc::clone(&stores.work_orders), Arc::clone(&stores.parts))
    }

    /// Guardar una orden nueva (`previous = None`) o editar `previous`.
    ///
    /// 1. verificar stock de todas las piezas de la orden
    /// 2. calcular las piezas recién agregadas
    /// 3. persistir la orden con el total recalculado
    /// 4. descontar 1 unidad por pieza recién agregada, una llamada por pieza
    pub async fn submit(
        &self,
        mut order: WorkOrderData,
        previous: Option<&WorkOrder>,
        catalog: &CatalogSnapshot,
    ) -> AppResult<SubmitOutcome> {
        check_availability(&order.part_ids, catalog)?;

        let new_parts = newly_added_parts(&order.part_ids, previous);
        order.total = compute_total(&order.service_ids, &order.part_ids, catalog);

        let saved = match previous {
            Some(previous) => {
                info!("✏️ Atualizando ordem de serviço {}", previous.id);
                self.orders.replace(&previous.id, &order).await?
            }
            None => {
                info!("🆕 Criando ordem de serviço para veículo {}", order.vehicle_id);
                self.orders.create(&order).await?
            }
        };

        let mut decremented_parts = Vec::with_capacity(new_parts.len());
        let mut skipped_parts = Vec::new();
        for part_id in new_parts {
            match self.decrement_stock(&part_id).await {
                Ok(true) => decremented_parts.push(part_id),
                Ok(false) => skipped_parts.push(part_id),
                Err(e) => {
                    error!(
                        "❌ Ordem {} salva, mas falhou a baixa de estoque da peça {}: {}",
                        saved.id, part_id, e
                    );
                    return Err(e);
                }
            }
        }

        info!(
            "✅ Ordem {} salva (total {}, {} baixas de estoque)",
            saved.id,
            saved.data.total,
            decremented_parts.len()
        );

        Ok(SubmitOutcome {
            order: saved,
            decremented_parts,
            skipped_parts,
        })
    }

    /// Lee el valor actual y escribe `actual - 1`. Sin lock: dos sesiones
    /// concurrentes pueden perder una actualización.
    async fn decrement_stock(&self, part_id: &RecordId) -> AppResult<bool> {
        let Some(part) = self.parts.find_by_id(part_id).await? else {
            warn!("⚠️ Peça {} não encontrada, baixa de estoque ignorada", part_id);
            return Ok(false);
        };

        let mut data = part.data;
        data.quantity -= 1;
        debug!("📦 Peça {} estoque -> {}", part_id, data.quantity);
        self.parts.replace(part_id, &data).await?;
        Ok(true)
    }
}
