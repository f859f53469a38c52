use contracts::domain::a002_obsidian_vault::{VaultFilesRequest, VaultPreview};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_base, error_message};

/// Ask the backend for statistics and a capped file listing covering the
/// given vault paths. Non-committing; nothing is persisted server-side.
pub async fn preview_vault_files(
    access_token: &str,
    vault_paths: Vec<String>,
) -> Result<VaultPreview, String> {
    let request = VaultFilesRequest { vault_paths };

    let response = Request::post(&format!("{}/api/v1/obsidian/vault-files/", api_base()))
        .header("Authorization", &format!("Bearer {}", access_token))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        let fallback = format!("Failed to load vault preview (HTTP {})", response.status());
        let body = response.text().await.unwrap_or_default();
        return Err(error_message(&body, &fallback));
    }

    response
        .json::<VaultPreview>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
