use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::DashboardController;
use crate::services::dashboard_service::DashboardSummary;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_dashboard_router() -> Router<AppState> {
    Router::new().route("/", get(get_dashboard))
}

async fn get_dashboard(
    State(state): State<AppState>,
) -> Result<Json<DashboardSummary>, AppError> {
    let controller = DashboardController::new(state.stores.clone());
    let summary = controller.summary().await?;
    Ok(Json(summary))
}
