//! Snapshot de solo lectura del catálogo del taller
//!
//! Se carga al inicio de cada operación y se pasa explícitamente a las
//! funciones que lo necesitan. Las referencias que no resuelven se
//! muestran con placeholders, nunca como error.

use std::collections::HashMap;
use tracing::debug;

use crate::models::{Customer, Part, Record, RecordId, Service, Vehicle};
use crate::repositories::Stores;
use crate::utils::errors::AppResult;

pub const VEHICLE_NOT_FOUND: &str = "Veículo não encontrado";
pub const CUSTOMER_NOT_FOUND: &str = "Cliente não encontrado";

#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    services: HashMap<RecordId, Service>,
    parts: HashMap<RecordId, Part>,
    vehicles: HashMap<RecordId, Vehicle>,
    customers: HashMap<RecordId, Customer>,
}

fn index<T: Record>(records: Vec<T>) -> HashMap<RecordId, T> {
    records.into_iter().map(|r| (r.id().clone(), r)).collect()
}

impl CatalogSnapshot {
    pub fn new(
        services: Vec<Service>,
        parts: Vec<Part>,
        vehicles: Vec<Vehicle>,
        customers: Vec<Customer>,
    ) -> Self {
        Self {
            services: index(services),
            parts: index(parts),
            vehicles: index(vehicles),
            customers: index(customers),
        }
    }

    /// Cargar las cuatro colecciones en paralelo
    pub async fn load(stores: &Stores) -> AppResult<Self> {
        let (services, parts, vehicles, customers) = futures::try_join!(
            stores.services.list(),
            stores.parts.list(),
            stores.vehicles.list(),
            stores.customers.list(),
        )?;

        debug!(
            "📚 Catálogo cargado: {} serviços, {} peças, {} veículos, {} clientes",
            services.len(),
            parts.len(),
            vehicles.len(),
            customers.len()
        );

        Ok(Self::new(services, parts, vehicles, customers))
    }

    /// Solo vehículos y clientes, para listados que muestran el dueño
    pub async fn load_owners(stores: &Stores) -> AppResult<Self> {
        let (vehicles, customers) =
            futures::try_join!(stores.vehicles.list(), stores.customers.list())?;
        Ok(Self::new(Vec::new(), Vec::new(), vehicles, customers))
    }

    pub fn service(&self, id: &RecordId) -> Option<&Service> {
        self.services.get(id)
    }

    pub fn part(&self, id: &RecordId) -> Option<&Part> {
        self.parts.get(id)
    }

    pub fn vehicle(&self, id: &RecordId) -> Option<&Vehicle> {
        self.vehicles.get(id)
    }

    pub fn customer(&self, id: &RecordId) -> Option<&Customer> {
        self.customers.get(id)
    }

    /// Dueño del vehículo, si ambos existen
    pub fn owner_of(&self, vehicle_id: &RecordId) -> Option<&Customer> {
        self.vehicle(vehicle_id)
            .and_then(|v| self.customer(&v.data.customer_id))
    }

    /// `marca modelo (placa)` o placeholder
    pub fn vehicle_label(&self, vehicle_id: &RecordId) -> String {
        self.vehicle(vehicle_id)
            .map(Vehicle::label)
            .unwrap_or_else(|| VEHICLE_NOT_FOUND.to_string())
    }

    /// Nombre del cliente de un vehículo o placeholder
    pub fn owner_name(&self, vehicle_id: &RecordId) -> String {
        self.owner_of(vehicle_id)
            .map(|c| c.data.name.clone())
            .unwrap_or_else(|| CUSTOMER_NOT_FOUND.to_string())
    }

    /// Nombre de un cliente por id o placeholder
    pub fn customer_name(&self, customer_id: &RecordId) -> String {
        self.customer(customer_id)
            .map(|c| c.data.name.clone())
            .unwrap_or_else(|| CUSTOMER_NOT_FOUND.to_string())
    }
}
