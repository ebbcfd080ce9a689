//! Store respaldado por la API REST del taller

use async_trait::async_trait;
use std::marker::PhantomData;
use std::sync::Arc;

use super::record_store::{RecordStore, Stores};
use crate::clients::ShopApiClient;
use crate::models::{Record, RecordId};
use crate::utils::errors::AppResult;

pub struct HttpRecordStore<T> {
    client: ShopApiClient,
    _record: PhantomData<fn() -> T>,
}

impl<T> HttpRecordStore<T> {
    pub fn new(client: ShopApiClient) -> Self {
        Self {
            client,
            _record: PhantomData,
        }
    }
}

#[async_trait]
impl<T: Record> RecordStore<T> for HttpRecordStore<T> {
    async fn list(&self) -> AppResult<Vec<T>> {
        self.client.list(T::RESOURCE).await
    }

    async fn find_by_id(&self, id: &RecordId) -> AppResult<Option<T>> {
        self.client.get(T::RESOURCE, id).await
    }

    async fn create(&self, draft: &T::Draft) -> AppResult<T> {
        self.client.create(T::RESOURCE, draft).await
    }

    async fn replace(&self, id: &RecordId, draft: &T::Draft) -> AppResult<T> {
        // PUT envía el registro completo, id incluido
        let record = T::from_draft(id.clone(), draft.clone());
        self.client.replace(T::RESOURCE, id, &record).await
    }

    async fn delete(&self, id: &RecordId) -> AppResult<()> {
        self.client.delete(T::RESOURCE, id).await
    }
}

impl Stores {
    /// Stores que hablan con la API REST del taller
    pub fn http(client: ShopApiClient) -> Self {
        Self {
            customers: Arc::new(HttpRecordStore::new(client.clone())),
            vehicles: Arc::new(HttpRecordStore::new(client.clone())),
            services: Arc::new(HttpRecordStore::new(client.clone())),
            parts: Arc::new(HttpRecordStore::new(client.clone())),
            work_orders: Arc::new(HttpRecordStore::new(client)),
        }
    }
}
