use crate::shared::http_client::{HttpClient, HttpMethod, HttpResponse};
use contracts::domain::a025_production_order::aggregate::{
    CreateProductionOrderDto, ProductionOrder, PRODUCTION_ORDERS_PATH,
};
use serde::de::DeserializeOwned;
use std::rc::Rc;
use thiserror::Error;

/// Why a request against the orders resource failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureCause {
    #[error("{0}")]
    Network(String),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("invalid JSON: {0}")]
    Format(String),
}

/// User-facing failure of a page operation. Display is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error("Failed to load orders")]
    Load(FailureCause),
    #[error("Failed to create order")]
    Create(FailureCause),
}

impl OrderError {
    pub fn cause(&self) -> &FailureCause {
        match self {
            OrderError::Load(cause) | OrderError::Create(cause) => cause,
        }
    }
}

/// Client for the production orders collection resource
pub struct ProductionOrderApi {
    client: Rc<dyn HttpClient>,
}

impl ProductionOrderApi {
    pub fn new(client: Rc<dyn HttpClient>) -> Self {
        Self { client }
    }

    /// GET the full order list
    pub async fn fetch_list(&self) -> Result<Vec<ProductionOrder>, OrderError> {
        let response = self
            .client
            .request(HttpMethod::Get, PRODUCTION_ORDERS_PATH, None)
            .await
            .map_err(|e| OrderError::Load(FailureCause::Network(e.0)))?;

        decode(response).map_err(OrderError::Load)
    }

    /// POST a new order, returning the server's copy
    pub async fn create(
        &self,
        dto: &CreateProductionOrderDto,
    ) -> Result<ProductionOrder, OrderError> {
        let body = serde_json::to_string(dto)
            .map_err(|e| OrderError::Create(FailureCause::Format(e.to_string())))?;

        let response = self
            .client
            .request(HttpMethod::Post, PRODUCTION_ORDERS_PATH, Some(body))
            .await
            .map_err(|e| OrderError::Create(FailureCause::Network(e.0)))?;

        decode(response).map_err(OrderError::Create)
    }
}

// Non-2xx bodies are discarded.
fn decode<T: DeserializeOwned>(response: HttpResponse) -> Result<T, FailureCause> {
    if !response.ok() {
        return Err(FailureCause::Status(response.status));
    }
    serde_json::from_str(&response.body).map_err(|e| FailureCause::Format(e.to_string()))
}
