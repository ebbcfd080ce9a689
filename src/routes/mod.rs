//! Rutas de la consola del taller

pub mod dashboard_routes;
pub mod record_routes;
pub mod work_order_routes;

use axum::{response::Json, routing::get, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_middleware;
use crate::models::{Customer, Part, Service, Vehicle};
use crate::state::AppState;

use dashboard_routes::create_dashboard_router;
use record_routes::create_record_router;
use work_order_routes::create_work_order_router;

/// Router completo de la consola, con CORS y trazas por request
pub fn create_app(state: AppState) -> Router {
    let cors = cors_middleware(&state.config.cors_origins);

    Router::new()
        .route("/health", get(health))
        .nest("/api/clientes", create_record_router::<Customer>())
        .nest("/api/veiculos", create_record_router::<Vehicle>())
        .nest("/api/servicos", create_record_router::<Service>())
        .nest("/api/pecas", create_record_router::<Part>())
        .nest("/api/ordens-servico", create_work_order_router())
        .nest("/api/dashboard", create_dashboard_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
