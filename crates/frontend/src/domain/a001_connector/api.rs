//! Connector service client
//!
//! The backend owns connector persistence and the indexing pipeline;
//! this module only registers configurations and lists what exists.

use contracts::domain::a001_connector::{SearchSourceConnector, SearchSourceConnectorCreateDto};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_base, error_message};

/// Register a new connector with the backend.
pub async fn create_connector(
    access_token: &str,
    dto: &SearchSourceConnectorCreateDto,
) -> Result<(), String> {
    let response = Request::post(&format!("{}/api/v1/search-source-connectors/", api_base()))
        .header("Authorization", &format!("Bearer {}", access_token))
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        let fallback = format!("Failed to create connector (HTTP {})", response.status());
        let body = response.text().await.unwrap_or_default();
        return Err(error_message(&body, &fallback));
    }

    Ok(())
}

/// List the connectors registered for the current user.
pub async fn fetch_connectors(access_token: &str) -> Result<Vec<SearchSourceConnector>, String> {
    let response = Request::get(&format!("{}/api/v1/search-source-connectors/", api_base()))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        let fallback = format!("Failed to load connectors (HTTP {})", response.status());
        let body = response.text().await.unwrap_or_default();
        return Err(error_message(&body, &fallback));
    }

    response
        .json::<Vec<SearchSourceConnector>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
