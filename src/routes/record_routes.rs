use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

use crate::controllers::RecordController;
use crate::dto::ApiResponse;
use crate::models::{Record, RecordId};
use crate::repositories::{StoreFor, Stores};
use crate::services::{ListQuery, Listable};
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Router CRUD para un catálogo (`/`, `/:id`)
pub fn create_record_router<T>() -> Router<AppState>
where
    T: Listable,
    Stores: StoreFor<T>,
{
    Router::new()
        .route("/", get(list_records::<T>).post(create_record::<T>))
        .route(
            "/:id",
            get(get_record::<T>)
                .put(replace_record::<T>)
                .delete(delete_record::<T>),
        )
}

async fn list_records<T>(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<T>>, AppError>
where
    T: Listable,
    Stores: StoreFor<T>,
{
    let controller = RecordController::<T>::new(state.stores.clone());
    let records = controller.list(&query).await?;
    Ok(Json(records))
}

async fn get_record<T>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<T>, AppError>
where
    T: Listable,
    Stores: StoreFor<T>,
{
    let controller = RecordController::<T>::new(state.stores.clone());
    let record = controller.get_by_id(&RecordId::new(id)).await?;
    Ok(Json(record))
}

async fn create_record<T>(
    State(state): State<AppState>,
    Json(draft): Json<<T as Record>::Draft>,
) -> Result<Json<ApiResponse<T>>, AppError>
where
    T: Listable,
    Stores: StoreFor<T>,
{
    let controller = RecordController::<T>::new(state.stores.clone());
    let response = controller.create(draft).await?;
    Ok(Json(response))
}

async fn replace_record<T>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(draft): Json<<T as Record>::Draft>,
) -> Result<Json<ApiResponse<T>>, AppError>
where
    T: Listable,
    Stores: StoreFor<T>,
{
    let controller = RecordController::<T>::new(state.stores.clone());
    let response = controller.replace(&RecordId::new(id), draft).await?;
    Ok(Json(response))
}

async fn delete_record<T>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, AppError>
where
    T: Listable,
    Stores: StoreFor<T>,
{
    let controller = RecordController::<T>::new(state.stores.clone());
    let response = controller.delete(&RecordId::new(id)).await?;
    Ok(Json(response))
}
