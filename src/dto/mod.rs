pub mod api_response;
pub mod work_order_dto;

pub use api_response::ApiResponse;
