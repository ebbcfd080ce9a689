//! Utilidades compartidas por los tests de integración
#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body, Bytes},
    extract::{Path, State},
    http::{header, Method, Request, StatusCode},
    routing::get,
    Json, Router,
};
use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

use oficina_console::config::environment::EnvironmentConfig;
use oficina_console::models::*;
use oficina_console::repositories::Stores;
use oficina_console::routes::create_app;
use oficina_console::state::AppState;

// ---------------------------------------------------------------------------
// Datos de prueba
// ---------------------------------------------------------------------------

pub fn customers() -> Vec<Customer> {
    vec![
        Customer {
            id: RecordId::from("c1"),
            data: CustomerData {
                name: "Ana Souza".to_string(),
                email: "ana@mail.com".to_string(),
                phone: "11987654321".to_string(),
                address: "Rua das Flores, 10".to_string(),
            },
        },
        Customer {
            id: RecordId::from("c2"),
            data: CustomerData {
                name: "Bruno Lima".to_string(),
                email: "bruno@mail.com".to_string(),
                phone: "21912345678".to_string(),
                address: String::new(),
            },
        },
    ]
}

pub fn vehicles() -> Vec<Vehicle> {
    vec![
        Vehicle {
            id: RecordId::from("v1"),
            data: VehicleData {
                customer_id: RecordId::from("c2"),
                brand: "Fiat".to_string(),
                model: "Uno".to_string(),
                year: 2010,
                plate: "ABC1234".to_string(),
            },
        },
        Vehicle {
            id: RecordId::from("v2"),
            data: VehicleData {
                customer_id: RecordId::from("c1"),
                brand: "Honda".to_string(),
                model: "Civic".to_string(),
                year: 2020,
                plate: "BRA2E19".to_string(),
            },
        },
    ]
}

pub fn services() -> Vec<Service> {
    vec![Service {
        id: RecordId::from("s1"),
        data: ServiceData {
            name: "Troca de óleo".to_string(),
            description: "Óleo e filtro".to_string(),
            price: Decimal::new(100, 0),
            estimated_time: "1h".to_string(),
        },
    }]
}

pub fn parts() -> Vec<Part> {
    vec![
        Part {
            id: RecordId::from("p1"),
            data: PartData {
                name: "Filtro de óleo".to_string(),
                code: "FO-01".to_string(),
                brand: "Tecfil".to_string(),
                price: Decimal::new(50, 0),
                quantity: 2,
            },
        },
        Part {
            id: RecordId::from("p2"),
            data: PartData {
                name: "Vela de ignição".to_string(),
                code: "VI-04".to_string(),
                brand: "NGK".to_string(),
                price: Decimal::new(30, 0),
                quantity: 0,
            },
        },
    ]
}

pub fn work_orders() -> Vec<WorkOrder> {
    vec![WorkOrder {
        id: RecordId::from("o1"),
        data: WorkOrderData {
            vehicle_id: RecordId::from("v1"),
            entry_date: Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap(),
            exit_date: None,
            status: WorkOrderStatus::InProgress,
            description: "Barulho no motor".to_string(),
            service_ids: vec![RecordId::from("s1")],
            part_ids: Vec::new(),
            total: Decimal::new(100, 0),
        },
    }]
}

pub fn seeded_stores() -> Stores {
    Stores::seeded(customers(), vehicles(), services(), parts(), work_orders())
}

// ---------------------------------------------------------------------------
// Cliente de test sobre el router
// ---------------------------------------------------------------------------

pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is not JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

pub struct TestApp {
    router: Router,
    pub stores: Stores,
}

impl TestApp {
    pub fn new(stores: Stores) -> Self {
        let state = AppState::new(EnvironmentConfig::default(), stores.clone());
        Self {
            router: create_app(state),
            stores,
        }
    }

    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        TestResponse { status, content_type, body }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> TestResponse {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> TestResponse {
        self.request(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.request(Method::DELETE, uri, None).await
    }
}

// ---------------------------------------------------------------------------
// API del taller falsa (estilo json-server)
// ---------------------------------------------------------------------------

#[derive(Clone, Default)]
pub struct FakeShopApi {
    pub collections: Arc<Mutex<HashMap<String, Vec<Value>>>>,
    /// `METHOD /path` de cada request recibido
    pub requests: Arc<Mutex<Vec<String>>>,
}

fn id_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl FakeShopApi {
    pub fn seeded(seed: Value) -> Self {
        let api = Self::default();
        if let Value::Object(map) = seed {
            let mut collections = api.collections.lock().unwrap();
            for (name, records) in map {
                let records = records.as_array().cloned().unwrap_or_default();
                collections.insert(name, records);
            }
        }
        api
    }

    pub fn collection(&self, name: &str) -> Vec<Value> {
        self.collections
            .lock()
            .unwrap()
            .get(name)
            .cloned()
            .unwrap_or_default()
    }

    pub fn record(&self, name: &str, id: &str) -> Option<Value> {
        self.collection(name)
            .into_iter()
            .find(|r| id_text(&r["id"]) == id)
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn log(&self, line: String) {
        self.requests.lock().unwrap().push(line);
    }

    /// Levanta el servidor en un puerto efímero y devuelve su URL base
    pub async fn spawn(&self) -> String {
        let app = Router::new()
            .route("/:collection", get(fake_list).post(fake_create))
            .route(
                "/:collection/:id",
                get(fake_get).put(fake_replace).delete(fake_delete),
            )
            .with_state(self.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }
}

async fn fake_list(
    State(api): State<FakeShopApi>,
    Path(collection): Path<String>,
) -> Result<Json<Vec<Value>>, StatusCode> {
    api.log(format!("GET /{}", collection));
    let collections = api.collections.lock().unwrap();
    collections
        .get(&collection)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn fake_get(
    State(api): State<FakeShopApi>,
    Path((collection, id)): Path<(String, String)>,
) -> Result<Json<Value>, StatusCode> {
    api.log(format!("GET /{}/{}", collection, id));
    api.record(&collection, &id).map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn fake_create(
    State(api): State<FakeShopApi>,
    Path(collection): Path<String>,
    Json(mut body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), StatusCode> {
    api.log(format!("POST /{}", collection));
    let mut collections = api.collections.lock().unwrap();
    let records = collections.get_mut(&collection).ok_or(StatusCode::NOT_FOUND)?;
    let next_id = records
        .iter()
        .filter_map(|r| r["id"].as_i64())
        .max()
        .unwrap_or(0)
        + 1;
    body["id"] = json!(next_id);
    records.push(body.clone());
    Ok((StatusCode::CREATED, Json(body)))
}

async fn fake_replace(
    State(api): State<FakeShopApi>,
    Path((collection, id)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    api.log(format!("PUT /{}/{}", collection, id));
    let mut collections = api.collections.lock().unwrap();
    let records = collections.get_mut(&collection).ok_or(StatusCode::NOT_FOUND)?;
    let slot = records
        .iter_mut()
        .find(|r| id_text(&r["id"]) == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    *slot = body.clone();
    Ok(Json(body))
}

async fn fake_delete(
    State(api): State<FakeShopApi>,
    Path((collection, id)): Path<(String, String)>,
) -> StatusCode {
    api.log(format!("DELETE /{}/{}", collection, id));
    let mut collections = api.collections.lock().unwrap();
    let Some(records) = collections.get_mut(&collection) else {
        return StatusCode::NOT_FOUND;
    };
    let before = records.len();
    records.retain(|r| id_text(&r["id"]) != id);
    if records.len() == before {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    }
}
