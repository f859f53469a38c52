use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Connector type tag
// ============================================================================

/// Connector kinds understood by the indexing backend.
///
/// Serialized with the backend's wire tags. Only the Obsidian variant is
/// creatable from this frontend; the rest exist so list responses
/// round-trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchSourceConnectorType {
    #[serde(rename = "SERPER_API")]
    SerperApi,
    #[serde(rename = "TAVILY_API")]
    TavilyApi,
    #[serde(rename = "LINKUP_API")]
    LinkupApi,
    #[serde(rename = "SLACK_CONNECTOR")]
    SlackConnector,
    #[serde(rename = "NOTION_CONNECTOR")]
    NotionConnector,
    #[serde(rename = "GITHUB_CONNECTOR")]
    GithubConnector,
    #[serde(rename = "LINEAR_CONNECTOR")]
    LinearConnector,
    #[serde(rename = "DISCORD_CONNECTOR")]
    DiscordConnector,
    #[serde(rename = "OBSIDIAN_CONNECTOR")]
    ObsidianConnector,
}

impl SearchSourceConnectorType {
    /// Display name used in list views.
    pub fn label(&self) -> &'static str {
        match self {
            Self::SerperApi => "Serper API",
            Self::TavilyApi => "Tavily API",
            Self::LinkupApi => "Linkup API",
            Self::SlackConnector => "Slack",
            Self::NotionConnector => "Notion",
            Self::GithubConnector => "GitHub",
            Self::LinearConnector => "Linear",
            Self::DiscordConnector => "Discord",
            Self::ObsidianConnector => "Obsidian Vault",
        }
    }
}

// ============================================================================
// Aggregate (read shape)
// ============================================================================

/// A connector as the backend returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchSourceConnector {
    pub id: i64,
    pub name: String,
    pub connector_type: SearchSourceConnectorType,
    pub is_indexable: bool,
    pub last_indexed_at: Option<DateTime<Utc>>,
    pub config: serde_json::Value,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Config payload for an Obsidian-vault connector.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObsidianConnectorConfig {
    pub vault_paths: Vec<String>,
}

/// DTO for registering a new connector with the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchSourceConnectorCreateDto {
    pub name: String,
    pub connector_type: SearchSourceConnectorType,
    pub config: ObsidianConnectorConfig,
    pub is_indexable: bool,
    pub last_indexed_at: Option<DateTime<Utc>>,
}

/// Minimum length of a connector name, counted after trimming.
pub const MIN_CONNECTOR_NAME_LEN: usize = 3;

impl SearchSourceConnectorCreateDto {
    /// Build the descriptor for an Obsidian-vault connector.
    ///
    /// A fresh connector is always indexable and has never been indexed.
    pub fn obsidian(name: String, vault_paths: Vec<String>) -> Self {
        Self {
            name,
            connector_type: SearchSourceConnectorType::ObsidianConnector,
            config: ObsidianConnectorConfig { vault_paths },
            is_indexable: true,
            last_indexed_at: None,
        }
    }

    /// Validate the descriptor before it goes over the wire.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().chars().count() < MIN_CONNECTOR_NAME_LEN {
            return Err(format!(
                "Connector name must be at least {} characters",
                MIN_CONNECTOR_NAME_LEN
            ));
        }
        if self.config.vault_paths.is_empty() {
            return Err("At least one vault path is required".into());
        }
        if self
            .config
            .vault_paths
            .iter()
            .any(|p| p.trim().is_empty())
        {
            return Err("Vault paths must be non-empty strings".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn obsidian_descriptor_carries_fixed_flags() {
        let dto = SearchSourceConnectorCreateDto::obsidian(
            "My Vault".to_string(),
            vec!["/vault/a".to_string()],
        );
        assert_eq!(
            dto.connector_type,
            SearchSourceConnectorType::ObsidianConnector
        );
        assert!(dto.is_indexable);
        assert!(dto.last_indexed_at.is_none());
        assert_eq!(dto.config.vault_paths, vec!["/vault/a".to_string()]);
    }

    #[test]
    fn connector_type_uses_wire_tags() {
        let json = serde_json::to_string(&SearchSourceConnectorType::ObsidianConnector).unwrap();
        assert_eq!(json, "\"OBSIDIAN_CONNECTOR\"");

        let parsed: SearchSourceConnectorType =
            serde_json::from_str("\"GITHUB_CONNECTOR\"").unwrap();
        assert_eq!(parsed, SearchSourceConnectorType::GithubConnector);
    }

    #[test]
    fn validate_rejects_short_names() {
        let dto =
            SearchSourceConnectorCreateDto::obsidian("ab".to_string(), vec!["/v".to_string()]);
        assert!(dto.validate().is_err());

        let dto =
            SearchSourceConnectorCreateDto::obsidian("  ab  ".to_string(), vec!["/v".to_string()]);
        assert!(dto.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_or_blank_paths() {
        let dto = SearchSourceConnectorCreateDto::obsidian("Vault".to_string(), vec![]);
        assert!(dto.validate().is_err());

        let dto = SearchSourceConnectorCreateDto::obsidian(
            "Vault".to_string(),
            vec!["/vault/a".to_string(), "   ".to_string()],
        );
        assert!(dto.validate().is_err());
    }

    #[test]
    fn create_dto_serializes_snake_case_fields() {
        let dto = SearchSourceConnectorCreateDto::obsidian(
            "Notes".to_string(),
            vec!["/home/me/notes".to_string()],
        );
        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["connector_type"], "OBSIDIAN_CONNECTOR");
        assert_eq!(value["is_indexable"], true);
        assert_eq!(value["last_indexed_at"], serde_json::Value::Null);
        assert_eq!(value["config"]["vault_paths"][0], "/home/me/notes");
    }
}
