//! Repositorios
//!
//! Acceso a las colecciones del taller: un contrato común (`RecordStore`),
//! su implementación sobre la API REST y una en memoria.

pub mod http_record_store;
pub mod memory_record_store;
pub mod record_store;

pub use http_record_store::HttpRecordStore;
pub use memory_record_store::InMemoryRecordStore;
pub use record_store::{RecordStore, StoreFor, Stores};
