//! Controllers
//!
//! Orquestan stores y servicios para cada ruta de la consola.

pub mod dashboard_controller;
pub mod record_controller;
pub mod work_order_controller;

pub use dashboard_controller::DashboardController;
pub use record_controller::RecordController;
pub use work_order_controller::WorkOrderController;
