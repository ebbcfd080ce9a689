//! Cliente HTTP para la API REST del taller
//!
//! La API externa (estilo json-server) expone una colección por recurso con
//! GET / POST / PUT/:id / DELETE/:id. No hay PATCH: cada PUT envía el
//! registro completo. Tampoco hay autenticación ni paginación.

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::time::Duration;
use tracing::debug;

use crate::models::RecordId;
use crate::utils::errors::{internal_error, not_found_error, AppError, AppResult};

/// Colecciones expuestas por la API del taller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Customers,
    Vehicles,
    Services,
    Parts,
    WorkOrders,
}

impl Resource {
    /// Segmento de ruta en la API externa
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Customers => "clientes",
            Resource::Vehicles => "veiculos",
            Resource::Services => "servicos",
            Resource::Parts => "pecas",
            Resource::WorkOrders => "ordens_servico",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Cliente HTTP para la API del taller
#[derive(Debug, Clone)]
pub struct ShopApiClient {
    client: Client,
    base_url: String,
}

impl ShopApiClient {
    /// Crear nuevo cliente HTTP con URL base configurable
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| internal_error(&format!("Error creando cliente HTTP: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self, resource: Resource) -> String {
        format!("{}/{}", self.base_url, resource.path())
    }

    fn record_url(&self, resource: Resource, id: &RecordId) -> String {
        format!("{}/{}/{}", self.base_url, resource.path(), id)
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.client
            .request(method, url)
            .header("Accept", "application/json")
    }

    /// Listar la colección completa
    pub async fn list<T: DeserializeOwned>(&self, resource: Resource) -> AppResult<Vec<T>> {
        let url = self.collection_url(resource);
        debug!("📥 GET {}", url);

        let response = self.request(Method::GET, &url).send().await?;
        let response = ensure_success(Method::GET, &url, response).await?;
        Ok(response.json().await?)
    }

    /// Obtener un registro; `None` si la API responde 404
    pub async fn get<T: DeserializeOwned>(
        &self,
        resource: Resource,
        id: &RecordId,
    ) -> AppResult<Option<T>> {
        let url = self.record_url(resource, id);
        debug!("📥 GET {}", url);

        let response = self.request(Method::GET, &url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = ensure_success(Method::GET, &url, response).await?;
        Ok(Some(response.json().await?))
    }

    /// Crear un registro (POST); la API asigna el id
    pub async fn create<B, T>(&self, resource: Resource, body: &B) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.collection_url(resource);
        debug!("📤 POST {}", url);

        let response = self.request(Method::POST, &url).json(body).send().await?;
        let response = ensure_success(Method::POST, &url, response).await?;
        Ok(response.json().await?)
    }

    /// Reemplazar un registro completo (PUT)
    pub async fn replace<B, T>(&self, resource: Resource, id: &RecordId, body: &B) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.record_url(resource, id);
        debug!("📤 PUT {}", url);

        let response = self.request(Method::PUT, &url).json(body).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(not_found_error(resource.path(), id.as_str()));
        }
        let response = ensure_success(Method::PUT, &url, response).await?;
        Ok(response.json().await?)
    }

    /// Eliminar un registro (DELETE)
    pub async fn delete(&self, resource: Resource, id: &RecordId) -> AppResult<()> {
        let url = self.record_url(resource, id);
        debug!("🗑️ DELETE {}", url);

        let response = self.request(Method::DELETE, &url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(not_found_error(resource.path(), id.as_str()));
        }
        ensure_success(Method::DELETE, &url, response).await?;
        Ok(())
    }
}

async fn ensure_success(method: Method, url: &str, response: Response) -> AppResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(AppError::ExternalApi(format!(
        "{} {} -> HTTP {}: {}",
        method, url, status, body
    )))
}
