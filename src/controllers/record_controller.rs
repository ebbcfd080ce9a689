//! Controller genérico para los catálogos del taller
//!
//! Clientes, vehículos, servicios y piezas comparten el mismo flujo:
//! listar con búsqueda/orden, leer, validar y crear, validar y reemplazar,
//! eliminar.

use std::sync::Arc;
use tracing::info;
use validator::Validate;

use crate::dto::ApiResponse;
use crate::models::RecordId;
use crate::repositories::{RecordStore, StoreFor, Stores};
use crate::services::{apply_query, CatalogSnapshot, ListQuery, Listable};
use crate::utils::errors::{not_found_error, AppResult};

pub struct RecordController<T: Listable> {
    stores: Stores,
    store: Arc<dyn RecordStore<T>>,
}

impl<T: Listable> RecordController<T>
where
    Stores: StoreFor<T>,
{
    pub fn new(stores: Stores) -> Self {
        let store = stores.store();
        Self { stores, store }
    }

    pub async fn list(&self, query: &ListQuery) -> AppResult<Vec<T>> {
        let records = self.store.list().await?;
        let catalog = if T::NEEDS_OWNERS {
            CatalogSnapshot::load_owners(&self.stores).await?
        } else {
            CatalogSnapshot::default()
        };
        apply_query(records, query, &catalog)
    }

    pub async fn get_by_id(&self, id: &RecordId) -> AppResult<T> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error(T::LABEL, id.as_str()))
    }

    pub async fn create(&self, draft: T::Draft) -> AppResult<ApiResponse<T>> {
        draft.validate()?;

        let record = self.store.create(&draft).await?;
        info!("✅ {} {} cadastrado", T::LABEL, record.id());

        Ok(ApiResponse::success_with_message(
            record,
            format!("{}: cadastro realizado com sucesso", T::LABEL),
        ))
    }

    pub async fn replace(&self, id: &RecordId, draft: T::Draft) -> AppResult<ApiResponse<T>> {
        draft.validate()?;

        let record = self.store.replace(id, &draft).await?;
        info!("✏️ {} {} atualizado", T::LABEL, id);

        Ok(ApiResponse::success_with_message(
            record,
            format!("{}: alterações salvas com sucesso", T::LABEL),
        ))
    }

    pub async fn delete(&self, id: &RecordId) -> AppResult<ApiResponse<()>> {
        self.store.delete(id).await?;
        info!("🗑️ {} {} excluído", T::LABEL, id);

        Ok(ApiResponse::message(format!(
            "{}: registro excluído com sucesso",
            T::LABEL
        )))
    }
}
