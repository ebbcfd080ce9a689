//! Shared application state
//!
//! Estado compartido que se pasa a través del router de Axum: la
//! configuración y los stores de las colecciones del taller.

use crate::config::environment::EnvironmentConfig;
use crate::repositories::Stores;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub stores: Stores,
}

impl AppState {
    pub fn new(config: EnvironmentConfig, stores: Stores) -> Self {
        Self { config, stores }
    }
}
