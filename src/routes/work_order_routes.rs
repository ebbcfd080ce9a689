use axum::{
    extract::{Path, Query, State},
    response::Html,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::WorkOrderController;
use crate::dto::work_order_dto::{
    TotalPreviewRequest, TotalPreviewResponse, WorkOrderListItem, WorkOrderSubmitResponse,
};
use crate::dto::ApiResponse;
use crate::models::{RecordId, WorkOrder, WorkOrderData};
use crate::services::ListQuery;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_work_order_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_work_orders).post(create_work_order))
        .route("/total", post(preview_total))
        .route(
            "/:id",
            get(get_work_order)
                .put(replace_work_order)
                .delete(delete_work_order),
        )
        .route("/:id/impressao", get(print_work_order))
}

async fn list_work_orders(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<WorkOrderListItem>>, AppError> {
    let controller = WorkOrderController::new(state.stores.clone());
    let response = controller.list(&query).await?;
    Ok(Json(response))
}

async fn get_work_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<WorkOrder>, AppError> {
    let controller = WorkOrderController::new(state.stores.clone());
    let response = controller.get_by_id(&RecordId::new(id)).await?;
    Ok(Json(response))
}

async fn create_work_order(
    State(state): State<AppState>,
    Json(draft): Json<WorkOrderData>,
) -> Result<Json<ApiResponse<WorkOrderSubmitResponse>>, AppError> {
    let controller = WorkOrderController::new(state.stores.clone());
    let response = controller.create(draft).await?;
    Ok(Json(response))
}

async fn replace_work_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(draft): Json<WorkOrderData>,
) -> Result<Json<ApiResponse<WorkOrderSubmitResponse>>, AppError> {
    let controller = WorkOrderController::new(state.stores.clone());
    let response = controller.replace(&RecordId::new(id), draft).await?;
    Ok(Json(response))
}

async fn delete_work_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = WorkOrderController::new(state.stores.clone());
    let response = controller.delete(&RecordId::new(id)).await?;
    Ok(Json(response))
}

async fn preview_total(
    State(state): State<AppState>,
    Json(request): Json<TotalPreviewRequest>,
) -> Result<Json<TotalPreviewResponse>, AppError> {
    let controller = WorkOrderController::new(state.stores.clone());
    let response = controller.preview_total(request).await?;
    Ok(Json(response))
}

async fn print_work_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let controller = WorkOrderController::new(state.stores.clone());
    let html = controller.print(&RecordId::new(id)).await?;
    Ok(Html(html))
}
