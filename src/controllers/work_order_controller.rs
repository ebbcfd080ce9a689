//! Controller de órdenes de servicio
//!
//! Cada operación carga un snapshot fresco del catálogo; la creación y la
//! edición pasan por el `WorkOrderComposer`.

use chrono::Utc;
use tracing::info;
use validator::Validate;

use crate::dto::work_order_dto::{
    TotalPreviewRequest, TotalPreviewResponse, WorkOrderListItem, WorkOrderSubmitResponse,
};
use crate::dto::ApiResponse;
use crate::models::{Record, RecordId, WorkOrder, WorkOrderData};
use crate::repositories::Stores;
use crate::services::order_sheet::render_order_sheet;
use crate::services::work_order_composer::compute_total;
use crate::services::{apply_query, CatalogSnapshot, ListQuery, SubmitOutcome, WorkOrderComposer};
use crate::utils::errors::{not_found_error, AppResult};

pub struct WorkOrderController {
    stores: Stores,
}

impl From<SubmitOutcome> for WorkOrderSubmitResponse {
    fn from(outcome: SubmitOutcome) -> Self {
        Self {
            order: outcome.order,
            decremented_parts: outcome.decremented_parts,
            skipped_parts: outcome.skipped_parts,
        }
    }
}

impl WorkOrderController {
    pub fn new(stores: Stores) -> Self {
        Self { stores }
    }

    async fn find(&self, id: &RecordId) -> AppResult<WorkOrder> {
        self.stores
            .work_orders
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error(WorkOrder::LABEL, id.as_str()))
    }

    pub async fn list(&self, query: &ListQuery) -> AppResult<Vec<WorkOrderListItem>> {
        let (orders, catalog) = futures::try_join!(
            self.stores.work_orders.list(),
            CatalogSnapshot::load_owners(&self.stores),
        )?;

        let orders = apply_query(orders, query, &catalog)?;
        Ok(orders
            .into_iter()
            .map(|order| WorkOrderListItem {
                cliente: catalog.owner_name(&order.data.vehicle_id),
                veiculo: catalog.vehicle_label(&order.data.vehicle_id),
                order,
            })
            .collect())
    }

    pub async fn get_by_id(&self, id: &RecordId) -> AppResult<WorkOrder> {
        self.find(id).await
    }

    pub async fn create(
        &self,
        draft: WorkOrderData,
    ) -> AppResult<ApiResponse<WorkOrderSubmitResponse>> {
        draft.validate()?;

        let catalog = CatalogSnapshot::load(&self.stores).await?;
        let outcome = WorkOrderComposer::from_stores(&self.stores)
            .submit(draft, None, &catalog)
            .await?;

        Ok(ApiResponse::success_with_message(
            outcome.into(),
            "Ordem de serviço criada com sucesso".to_string(),
        ))
    }

    pub async fn replace(
        &self,
        id: &RecordId,
        draft: WorkOrderData,
    ) -> AppResult<ApiResponse<WorkOrderSubmitResponse>> {
        draft.validate()?;

        let (previous, catalog) =
            futures::try_join!(self.find(id), CatalogSnapshot::load(&self.stores))?;
        let outcome = WorkOrderComposer::from_stores(&self.stores)
            .submit(draft, Some(&previous), &catalog)
            .await?;

        Ok(ApiResponse::success_with_message(
            outcome.into(),
            "Ordem de serviço atualizada com sucesso".to_string(),
        ))
    }

    /// Borrado físico; no repone stock
    pub async fn delete(&self, id: &RecordId) -> AppResult<ApiResponse<()>> {
        self.stores.work_orders.delete(id).await?;
        info!("🗑️ Ordem de serviço {} excluída", id);

        Ok(ApiResponse::message(
            "Ordem de serviço excluída com sucesso".to_string(),
        ))
    }

    pub async fn preview_total(&self, request: TotalPreviewRequest) -> AppResult<TotalPreviewResponse> {
        let catalog = CatalogSnapshot::load(&self.stores).await?;
        Ok(TotalPreviewResponse {
            total: compute_total(&request.service_ids, &request.part_ids, &catalog),
        })
    }

    pub async fn print(&self, id: &RecordId) -> AppResult<String> {
        let (order, catalog) =
            futures::try_join!(self.find(id), CatalogSnapshot::load(&self.stores))?;
        info!("🖨️ Gerando impressão da ordem {}", id);
        Ok(render_order_sheet(&order, &catalog, Utc::now()))
    }
}
