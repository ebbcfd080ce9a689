//! Búsqueda y ordenamiento en memoria de los listados de la consola
//!
//! Cada listado trae la colección completa de la API y la filtra/ordena aquí:
//! la API externa no pagina ni filtra.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::cmp::Ordering;

use super::catalog::CatalogSnapshot;
use crate::models::{Customer, Part, Record, Service, Vehicle, WorkOrder, WorkOrderStatus};
use crate::utils::errors::{bad_request_error, AppResult};
use crate::utils::format::format_date_br;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Query string de los listados: `?q=&sort=&dir=&status=`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub q: Option<String>,
    pub sort: Option<String>,
    #[serde(default)]
    pub dir: SortDirection,
    pub status: Option<WorkOrderStatus>,
}

/// Registro que se puede buscar y ordenar en un listado
pub trait Listable: Record {
    /// Campos válidos para `sort`, con el nombre de wire
    const SORT_FIELDS: &'static [&'static str];

    /// Si la búsqueda necesita vehículos/clientes del catálogo
    const NEEDS_OWNERS: bool = false;

    /// `needle` ya viene en minúsculas
    fn matches(&self, needle: &str, catalog: &CatalogSnapshot) -> bool;

    fn compare_by(&self, other: &Self, field: &str, catalog: &CatalogSnapshot) -> Ordering;

    fn has_status(&self, _status: WorkOrderStatus) -> bool {
        true
    }
}

/// Aplica filtro de texto, filtro de estado y orden (estable)
pub fn apply_query<T: Listable>(
    records: Vec<T>,
    query: &ListQuery,
    catalog: &CatalogSnapshot,
) -> AppResult<Vec<T>> {
    let sort_field = match query.sort.as_deref().map(str::trim) {
        Some(field) if !field.is_empty() => {
            if !T::SORT_FIELDS.contains(&field) {
                return Err(bad_request_error(&format!(
                    "Campo de ordenação inválido '{}'; use um de: {}",
                    field,
                    T::SORT_FIELDS.join(", ")
                )));
            }
            Some(field)
        }
        _ => None,
    };

    let needle = query
        .q
        .as_deref()
        .map(|q| q.trim().to_lowercase())
        .filter(|q| !q.is_empty());

    let mut result: Vec<T> = records
        .into_iter()
        .filter(|r| needle.as_deref().map_or(true, |n| r.matches(n, catalog)))
        .filter(|r| query.status.map_or(true, |s| r.has_status(s)))
        .collect();

    if let Some(field) = sort_field {
        result.sort_by(|a, b| {
            let ordering = a.compare_by(b, field, catalog);
            match query.dir {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
    }

    Ok(result)
}

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn text_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

fn money_text(value: &Decimal) -> String {
    value.normalize().to_string()
}

impl Listable for Customer {
    const SORT_FIELDS: &'static [&'static str] = &["id", "nome", "email", "telefone", "endereco"];

    fn matches(&self, needle: &str, _catalog: &CatalogSnapshot) -> bool {
        let d = &self.data;
        contains(&d.name, needle)
            || contains(&d.email, needle)
            || contains(&d.phone, needle)
            || contains(&d.address, needle)
    }

    fn compare_by(&self, other: &Self, field: &str, _catalog: &CatalogSnapshot) -> Ordering {
        let (a, b) = (&self.data, &other.data);
        match field {
            "nome" => text_cmp(&a.name, &b.name),
            "email" => text_cmp(&a.email, &b.email),
            "telefone" => text_cmp(&a.phone, &b.phone),
            "endereco" => text_cmp(&a.address, &b.address),
            _ => text_cmp(self.id.as_str(), other.id.as_str()),
        }
    }
}

impl Listable for Vehicle {
    const SORT_FIELDS: &'static [&'static str] =
        &["id", "clienteId", "marca", "modelo", "ano", "placa"];
    const NEEDS_OWNERS: bool = true;

    fn matches(&self, needle: &str, catalog: &CatalogSnapshot) -> bool {
        let d = &self.data;
        contains(&d.brand, needle)
            || contains(&d.model, needle)
            || contains(&d.plate, needle)
            || contains(&catalog.customer_name(&d.customer_id), needle)
            || d.year.to_string().contains(needle)
    }

    fn compare_by(&self, other: &Self, field: &str, catalog: &CatalogSnapshot) -> Ordering {
        let (a, b) = (&self.data, &other.data);
        match field {
            // por nombre del dueño, no por id
            "clienteId" => text_cmp(
                &catalog.customer_name(&a.customer_id),
                &catalog.customer_name(&b.customer_id),
            ),
            "marca" => text_cmp(&a.brand, &b.brand),
            "modelo" => text_cmp(&a.model, &b.model),
            "ano" => a.year.cmp(&b.year),
            "placa" => text_cmp(&a.plate, &b.plate),
            _ => text_cmp(self.id.as_str(), other.id.as_str()),
        }
    }
}

impl Listable for Service {
    const SORT_FIELDS: &'static [&'static str] =
        &["id", "nome", "descricao", "valor", "tempoEstimado"];

    fn matches(&self, needle: &str, _catalog: &CatalogSnapshot) -> bool {
        let d = &self.data;
        contains(&d.name, needle)
            || contains(&d.description, needle)
            || money_text(&d.price).contains(needle)
            || contains(&d.estimated_time, needle)
    }

    fn compare_by(&self, other: &Self, field: &str, _catalog: &CatalogSnapshot) -> Ordering {
        let (a, b) = (&self.data, &other.data);
        match field {
            "nome" => text_cmp(&a.name, &b.name),
            "descricao" => text_cmp(&a.description, &b.description),
            "valor" => a.price.cmp(&b.price),
            "tempoEstimado" => text_cmp(&a.estimated_time, &b.estimated_time),
            _ => text_cmp(self.id.as_str(), other.id.as_str()),
        }
    }
}

impl Listable for Part {
    const SORT_FIELDS: &'static [&'static str] =
        &["id", "nome", "codigo", "marca", "preco", "quantidade"];

    fn matches(&self, needle: &str, _catalog: &CatalogSnapshot) -> bool {
        let d = &self.data;
        contains(&d.name, needle)
            || contains(&d.code, needle)
            || contains(&d.brand, needle)
            || money_text(&d.price).contains(needle)
            || d.quantity.to_string().contains(needle)
    }

    fn compare_by(&self, other: &Self, field: &str, _catalog: &CatalogSnapshot) -> Ordering {
        let (a, b) = (&self.data, &other.data);
        match field {
            "nome" => text_cmp(&a.name, &b.name),
            "codigo" => text_cmp(&a.code, &b.code),
            "marca" => text_cmp(&a.brand, &b.brand),
            "preco" => a.price.cmp(&b.price),
            "quantidade" => a.quantity.cmp(&b.quantity),
            _ => text_cmp(self.id.as_str(), other.id.as_str()),
        }
    }
}

impl Listable for WorkOrder {
    const SORT_FIELDS: &'static [&'static str] = &[
        "id",
        "veiculoId",
        "dataEntrada",
        "dataSaida",
        "status",
        "descricao",
        "valorTotal",
    ];
    const NEEDS_OWNERS: bool = true;

    fn matches(&self, needle: &str, catalog: &CatalogSnapshot) -> bool {
        let d = &self.data;
        contains(&catalog.owner_name(&d.vehicle_id), needle)
            || contains(&catalog.vehicle_label(&d.vehicle_id), needle)
            || format_date_br(&d.entry_date).contains(needle)
            || money_text(&d.total).contains(needle)
            || contains(d.status.label(), needle)
    }

    fn compare_by(&self, other: &Self, field: &str, catalog: &CatalogSnapshot) -> Ordering {
        let (a, b) = (&self.data, &other.data);
        match field {
            "veiculoId" => text_cmp(
                &catalog.vehicle_label(&a.vehicle_id),
                &catalog.vehicle_label(&b.vehicle_id),
            ),
            "dataEntrada" => a.entry_date.cmp(&b.entry_date),
            // sin fecha de salida ordena primero
            "dataSaida" => a.exit_date.cmp(&b.exit_date),
            "status" => text_cmp(a.status.label(), b.status.label()),
            "descricao" => text_cmp(&a.description, &b.description),
            "valorTotal" => a.total.cmp(&b.total),
            _ => text_cmp(self.id.as_str(), other.id.as_str()),
        }
    }

    fn has_status(&self, status: WorkOrderStatus) -> bool {
        self.data.status == status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CustomerData, PartData, RecordId, VehicleData, WorkOrderData};
    use crate::utils::errors::AppError;
    use chrono::{TimeZone, Utc};

    fn customer(id: &str, name: &str) -> Customer {
        Customer {
            id: RecordId::from(id),
            data: CustomerData {
                name: name.to_string(),
                email: format!("{}@mail.com", id),
                phone: "11999990000".to_string(),
                address: "Rua das Flores".to_string(),
            },
        }
    }

    fn vehicle(id: &str, owner: &str, brand: &str, year: i32) -> Vehicle {
        Vehicle {
            id: RecordId::from(id),
            data: VehicleData {
                customer_id: RecordId::from(owner),
                brand: brand.to_string(),
                model: "Modelo".to_string(),
                year,
                plate: format!("ABC{}", year),
            },
        }
    }

    fn part(id: &str, name: &str, price: i64, quantity: i64) -> Part {
        Part {
            id: RecordId::from(id),
            data: PartData {
                name: name.to_string(),
                code: format!("C-{}", id),
                brand: "Marca".to_string(),
                price: Decimal::new(price, 0),
                quantity,
            },
        }
    }

    fn order(id: &str, vehicle_id: &str, day: u32, status: WorkOrderStatus, total: i64) -> WorkOrder {
        WorkOrder {
            id: RecordId::from(id),
            data: WorkOrderData {
                vehicle_id: RecordId::from(vehicle_id),
                entry_date: Utc.with_ymd_and_hms(2024, 5, day, 9, 0, 0).unwrap(),
                exit_date: None,
                status,
                description: String::new(),
                service_ids: Vec::new(),
                part_ids: Vec::new(),
                total: Decimal::new(total, 0),
            },
        }
    }

    fn query(q: Option<&str>, sort: Option<&str>, dir: SortDirection) -> ListQuery {
        ListQuery {
            q: q.map(str::to_string),
            sort: sort.map(str::to_string),
            dir,
            status: None,
        }
    }

    #[test]
    fn parts_search_is_case_insensitive_over_all_columns() {
        let parts = vec![
            part("1", "Filtro de Óleo", 35, 4),
            part("2", "Pastilha", 120, 0),
            part("3", "Correia", 80, 12),
        ];
        let catalog = CatalogSnapshot::default();

        let found = apply_query(parts.clone(), &query(Some("FILTRO"), None, SortDirection::Asc), &catalog).unwrap();
        assert_eq!(found.len(), 1);

        let by_price = apply_query(parts.clone(), &query(Some("120"), None, SortDirection::Asc), &catalog).unwrap();
        assert_eq!(by_price[0].id.as_str(), "2");

        let by_quantity = apply_query(parts, &query(Some("12"), None, SortDirection::Asc), &catalog).unwrap();
        assert_eq!(by_quantity.len(), 2, "matches quantity 12 and price 120");
    }

    #[test]
    fn numeric_fields_sort_numerically() {
        let parts = vec![
            part("1", "a", 100, 9),
            part("2", "b", 20, 10),
            part("3", "c", 3, 1),
        ];
        let sorted = apply_query(
            parts,
            &query(None, Some("preco"), SortDirection::Desc),
            &CatalogSnapshot::default(),
        )
        .unwrap();
        let order: Vec<&str> = sorted.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(order, vec!["1", "2", "3"]);
    }

    #[test]
    fn vehicles_search_and_sort_by_owner_name() {
        let catalog = CatalogSnapshot::new(
            Vec::new(),
            Vec::new(),
            Vec::new(),
            vec![customer("c1", "Zélia"), customer("c2", "André")],
        );
        let vehicles = vec![vehicle("v1", "c1", "Fiat", 2010), vehicle("v2", "c2", "Ford", 2018)];

        let found = apply_query(vehicles.clone(), &query(Some("andré"), None, SortDirection::Asc), &catalog).unwrap();
        assert_eq!(found[0].id.as_str(), "v2");

        let by_year = apply_query(vehicles.clone(), &query(Some("2010"), None, SortDirection::Asc), &catalog).unwrap();
        assert_eq!(by_year[0].id.as_str(), "v1");

        let sorted = apply_query(vehicles, &query(None, Some("clienteId"), SortDirection::Asc), &catalog).unwrap();
        assert_eq!(sorted[0].id.as_str(), "v2");
    }

    #[test]
    fn orders_filter_by_status_and_search_by_date() {
        let orders = vec![
            order("o1", "v1", 3, WorkOrderStatus::InProgress, 100),
            order("o2", "v1", 15, WorkOrderStatus::Completed, 300),
            order("o3", "v9", 20, WorkOrderStatus::InProgress, 50),
        ];
        let catalog = CatalogSnapshot::default();

        let mut in_progress = query(None, Some("valorTotal"), SortDirection::Asc);
        in_progress.status = Some(WorkOrderStatus::InProgress);
        let result = apply_query(orders.clone(), &in_progress, &catalog).unwrap();
        let ids: Vec<&str> = result.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["o3", "o1"]);

        let by_date = apply_query(orders.clone(), &query(Some("15/05/2024"), None, SortDirection::Asc), &catalog).unwrap();
        assert_eq!(by_date[0].id.as_str(), "o2");

        let by_placeholder = apply_query(orders, &query(Some("não encontrado"), None, SortDirection::Asc), &catalog).unwrap();
        assert_eq!(by_placeholder.len(), 3);
    }

    #[test]
    fn unknown_sort_field_is_a_bad_request() {
        let result = apply_query(
            vec![customer("c1", "Ana")],
            &query(None, Some("senha"), SortDirection::Asc),
            &CatalogSnapshot::default(),
        );
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}
