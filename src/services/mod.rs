//! Services module
//!
//! Lógica de negocio de la consola: snapshot del catálogo, composición de
//! órdenes de servicio, listados, dashboard y hoja imprimible.

pub mod catalog;
pub mod dashboard_service;
pub mod listing;
pub mod order_sheet;
pub mod work_order_composer;

pub use catalog::CatalogSnapshot;
pub use listing::{apply_query, ListQuery, Listable, SortDirection};
pub use work_order_composer::{SubmitOutcome, WorkOrderComposer};
