//! Contrato común de acceso a las colecciones del taller

use async_trait::async_trait;
use std::sync::Arc;

use crate::models::{Customer, Part, Record, RecordId, Service, Vehicle, WorkOrder};
use crate::utils::errors::AppResult;

/// Operaciones CRUD sobre una colección de registros `T`
#[async_trait]
pub trait RecordStore<T: Record>: Send + Sync {
    async fn list(&self) -> AppResult<Vec<T>>;

    async fn find_by_id(&self, id: &RecordId) -> AppResult<Option<T>>;

    async fn create(&self, draft: &T::Draft) -> AppResult<T>;

    /// Reemplazo completo del registro, sin semántica de patch
    async fn replace(&self, id: &RecordId, draft: &T::Draft) -> AppResult<T>;

    async fn delete(&self, id: &RecordId) -> AppResult<()>;
}

/// Conjunto de stores que usa la consola
#[derive(Clone)]
pub struct Stores {
    pub customers: Arc<dyn RecordStore<Customer>>,
    pub vehicles: Arc<dyn RecordStore<Vehicle>>,
    pub services: Arc<dyn RecordStore<Service>>,
    pub parts: Arc<dyn RecordStore<Part>>,
    pub work_orders: Arc<dyn RecordStore<WorkOrder>>,
}

/// Selecciona el store de un tipo de registro
pub trait StoreFor<T: Record> {
    fn store(&self) -> Arc<dyn RecordStore<T>>;
}

macro_rules! store_for {
    ($record:ty, $field:ident) => {
        impl StoreFor<$record> for Stores {
            fn store(&self) -> Arc<dyn RecordStore<$record>> {
                Arc::clone(&self.$field)
            }
        }
    };
}

store_for!(Customer, customers);
store_for!(Vehicle, vehicles);
store_for!(Service, services);
store_for!(Part, parts);
store_for!(WorkOrder, work_orders);
