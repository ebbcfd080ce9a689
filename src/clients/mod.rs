//! Clients - HTTP Clients for External APIs
//!
//! This module contains the HTTP client for the shop REST API.

pub mod shop_api_client;

pub use shop_api_client::{Resource, ShopApiClient};
