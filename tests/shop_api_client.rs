mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};
use std::time::Duration;

use common::{FakeShopApi, TestApp};
use oficina_console::clients::{Resource, ShopApiClient};
use oficina_console::models::{Customer, Part, RecordId, Service};
use oficina_console::repositories::{RecordStore, Stores};
use oficina_console::utils::errors::AppError;

fn seed() -> Value {
    json!({
        "clientes": [
            { "id": 1, "nome": "Ana Souza", "email": "ana@mail.com", "telefone": "11987654321", "endereco": "" }
        ],
        "veiculos": [
            { "id": 1, "clienteId": 1, "marca": "Fiat", "modelo": "Uno", "ano": 2010, "placa": "ABC1234" }
        ],
        "servicos": [
            { "id": 1, "nome": "Troca de óleo", "descricao": "", "valor": 100, "tempoEstimado": "1h" }
        ],
        "pecas": [
            { "id": 1, "nome": "Filtro de óleo", "codigo": "FO-01", "marca": "Tecfil", "preco": 50.5, "quantidade": 2 }
        ],
        "ordens_servico": []
    })
}

async fn client_for(api: &FakeShopApi) -> ShopApiClient {
    let url = api.spawn().await;
    ShopApiClient::new(url, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_list_and_get_normalize_numeric_ids() {
    let api = FakeShopApi::seeded(seed());
    let client = client_for(&api).await;

    let customers: Vec<Customer> = client.list(Resource::Customers).await.unwrap();
    assert_eq!(customers.len(), 1);
    assert_eq!(customers[0].id, RecordId::from("1"));
    assert_eq!(customers[0].data.name, "Ana Souza");

    let part: Option<Part> = client.get(Resource::Parts, &RecordId::from("1")).await.unwrap();
    let part = part.expect("part 1 exists");
    assert_eq!(part.data.price.to_string(), "50.5");

    let missing: Option<Part> = client.get(Resource::Parts, &RecordId::from("99")).await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_http_store_replace_sends_full_record() {
    let api = FakeShopApi::seeded(seed());
    let stores = Stores::http(client_for(&api).await);

    let id = RecordId::from("1");
    let mut part = stores.parts.find_by_id(&id).await.unwrap().unwrap();
    part.data.quantity = 7;
    let saved = stores.parts.replace(&id, &part.data).await.unwrap();
    assert_eq!(saved.id, id);

    let stored = api.record("pecas", "1").unwrap();
    assert_eq!(stored["id"], "1");
    assert_eq!(stored["quantidade"], 7);
    assert_eq!(stored["nome"], "Filtro de óleo");
    assert!(api.requests().contains(&"PUT /pecas/1".to_string()));
}

#[tokio::test]
async fn test_missing_records_map_to_not_found() {
    let api = FakeShopApi::seeded(seed());
    let stores = Stores::http(client_for(&api).await);
    let id = RecordId::from("42");

    let part = stores.parts.find_by_id(&RecordId::from("1")).await.unwrap().unwrap();
    let err = stores.parts.replace(&id, &part.data).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let err = stores.customers.delete(&id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_api_failures_map_to_external_error() {
    let mut seed = seed();
    seed.as_object_mut().unwrap().remove("servicos");
    let api = FakeShopApi::seeded(seed);
    let client = client_for(&api).await;

    let err = client.list::<Service>(Resource::Services).await.unwrap_err();
    assert!(matches!(err, AppError::ExternalApi(ref msg) if msg.contains("404")));

    let unreachable = ShopApiClient::new("http://127.0.0.1:1", Duration::from_secs(2)).unwrap();
    let err = unreachable.list::<Service>(Resource::Services).await.unwrap_err();
    assert!(matches!(err, AppError::ExternalApi(_)));
}

#[tokio::test]
async fn test_console_reports_bad_gateway_when_api_is_down() {
    let client = ShopApiClient::new("http://127.0.0.1:1", Duration::from_secs(2)).unwrap();
    let app = TestApp::new(Stores::http(client));

    let response = app.get("/api/clientes").await;
    assert_eq!(response.status, StatusCode::BAD_GATEWAY);
    assert_eq!(response.json()["code"], "EXTERNAL_API_ERROR");
}

#[tokio::test]
async fn test_submit_decrements_each_part_with_one_call() {
    let api = FakeShopApi::seeded(seed());
    let app = TestApp::new(Stores::http(client_for(&api).await));

    let response = app
        .post(
            "/api/ordens-servico",
            json!({ "veiculoId": 1, "servicosIds": [1], "pecasIds": [1, 1] }),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["data"]["id"], "1");
    assert_eq!(body["data"]["valorTotal"].as_f64(), Some(201.0));
    assert_eq!(body["data"]["status"], "Aguardando aprovação");

    let requests = api.requests();
    let tail = &requests[requests.len() - 5..];
    assert_eq!(
        tail,
        [
            "POST /ordens_servico",
            "GET /pecas/1",
            "PUT /pecas/1",
            "GET /pecas/1",
            "PUT /pecas/1",
        ]
    );
    assert_eq!(api.record("pecas", "1").unwrap()["quantidade"], 0);

    let order = api.record("ordens_servico", "1").unwrap();
    assert_eq!(order["valorTotal"].as_f64(), Some(201.0));
    assert_eq!(order["pecasIds"], json!(["1", "1"]));

    let rejected = app
        .post("/api/ordens-servico", json!({ "veiculoId": 1, "pecasIds": [1] }))
        .await;
    assert_eq!(rejected.status, StatusCode::CONFLICT);
    assert_eq!(api.collection("ordens_servico").len(), 1);
}
