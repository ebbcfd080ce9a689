//! Consola de la oficina mecánica
//!
//! Backend-for-frontend sobre la API REST del taller: catálogos de clientes,
//! vehículos, servicios y piezas, y composición de órdenes de servicio con
//! control de stock.

pub mod clients;
pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
