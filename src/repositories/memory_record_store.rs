//! Store en memoria con la misma semántica que json-server
//!
//! Se usa en los tests del composer, de los controllers y del router.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::record_store::{RecordStore, Stores};
use crate::models::{Customer, Part, Record, RecordId, Service, Vehicle, WorkOrder};
use crate::utils::errors::{not_found_error, AppResult};

#[derive(Debug)]
pub struct InMemoryRecordStore<T> {
    records: RwLock<Vec<T>>,
}

impl<T: Record> InMemoryRecordStore<T> {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Copia del contenido actual
    pub async fn snapshot(&self) -> Vec<T> {
        self.records.read().await.clone()
    }
}

impl<T: Record> Default for InMemoryRecordStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> RecordStore<T> for InMemoryRecordStore<T> {
    async fn list(&self) -> AppResult<Vec<T>> {
        Ok(self.records.read().await.clone())
    }

    async fn find_by_id(&self, id: &RecordId) -> AppResult<Option<T>> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id() == id).cloned())
    }

    async fn create(&self, draft: &T::Draft) -> AppResult<T> {
        let id = RecordId::new(Uuid::new_v4().simple().to_string());
        let record = T::from_draft(id, draft.clone());
        self.records.write().await.push(record.clone());
        Ok(record)
    }

    async fn replace(&self, id: &RecordId, draft: &T::Draft) -> AppResult<T> {
        let mut records = self.records.write().await;
        let slot = records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| not_found_error(T::RESOURCE.path(), id.as_str()))?;
        *slot = T::from_draft(id.clone(), draft.clone());
        Ok(slot.clone())
    }

    async fn delete(&self, id: &RecordId) -> AppResult<()> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.id() != id);
        if records.len() == before {
            return Err(not_found_error(T::RESOURCE.path(), id.as_str()));
        }
        Ok(())
    }
}

impl Stores {
    /// Stores vacíos en memoria
    pub fn in_memory() -> Self {
        Self::seeded(Vec::new(), Vec::new(), Vec::new(), Vec::new(), Vec::new())
    }

    /// Stores en memoria con datos iniciales
    pub fn seeded(
        customers: Vec<Customer>,
        vehicles: Vec<Vehicle>,
        services: Vec<Service>,
        parts: Vec<Part>,
        work_orders: Vec<WorkOrder>,
    ) -> Self {
        Self {
            customers: Arc::new(InMemoryRecordStore::with_records(customers)),
            vehicles: Arc::new(InMemoryRecordStore::with_records(vehicles)),
            services: Arc::new(InMemoryRecordStore::with_records(services)),
            parts: Arc::new(InMemoryRecordStore::with_records(parts)),
            work_orders: Arc::new(InMemoryRecordStore::with_records(work_orders)),
        }
    }
}
