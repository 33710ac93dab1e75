//! HTTP client for the customer import endpoint

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::models::{ImportRecord, ImportResult};

const IMPORT_PATH: &str = "/api/customers/import";
const USER_AGENT: &str = concat!("cscx-import/", env!("CARGO_PKG_VERSION"));

/// Import client errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure (connection refused, timeout, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("Server returned {0}: {1}")]
    Status(u16, String),

    /// The response body was not a valid import result
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Body of an import request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRequest {
    pub workspace_id: String,
    pub customers: Vec<ImportRecord>,
}

impl ImportRequest {
    pub fn new(workspace_id: impl Into<String>, customers: Vec<ImportRecord>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            customers,
        }
    }
}

/// Something that can ingest a batch of customer records
#[async_trait]
pub trait ImportApi: Send + Sync {
    async fn import_customers(&self, request: &ImportRequest) -> Result<ImportResult, ApiError>;
}

/// `ImportApi` over HTTP
#[derive(Debug, Clone)]
pub struct HttpImportClient {
    http_client: reqwest::Client,
    endpoint: String,
}

impl HttpImportClient {
    /// Create a client for `base_url` (e.g. `http://localhost:3001`)
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), IMPORT_PATH),
        })
    }

    /// Create a client from the configured base URL and timeout
    pub fn from_settings(settings: &Settings) -> Result<Self, ApiError> {
        Self::new(&settings.api_base_url, settings.request_timeout())
    }

    /// The full import URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ImportApi for HttpImportClient {
    async fn import_customers(&self, request: &ImportRequest) -> Result<ImportResult, ApiError> {
        debug!(
            url = %self.endpoint,
            workspace = %request.workspace_id,
            customers = request.customers.len(),
            "Sending import request"
        );

        let response = self
            .http_client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Import request rejected");
            return Err(ApiError::Status(status.as_u16(), body));
        }

        let result: ImportResult = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        info!(
            imported = result.imported,
            errors = result.errors,
            "Import request completed"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FieldKey;

    #[test]
    fn test_endpoint_joins_base_url() {
        let client = HttpImportClient::new("http://localhost:3001/", Duration::from_secs(5)).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:3001/api/customers/import");
    }

    #[test]
    fn test_request_body_shape() {
        let mut record = ImportRecord::new();
        record.insert(FieldKey::Name, "Acme".into());
        let request = ImportRequest::new("ws-1", vec![record]);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"workspaceId": "ws-1", "customers": [{"name": "Acme"}]})
        );
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        crate::logging::init_test();
        // Port 9 (discard) is expected to refuse connections locally
        let client = HttpImportClient::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
        let err = client
            .import_customers(&ImportRequest::new("default", vec![]))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }
}
