//! Wire types for the vault preview endpoint.
//!
//! The backend walks the candidate vault directories and reports what it
//! would index, without persisting anything. Shapes mirror the backend's
//! JSON exactly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request body: the candidate vault paths to inspect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaultFilesRequest {
    pub vault_paths: Vec<String>,
}

/// Per-vault statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaultStatsEntry {
    pub name: String,
    pub path: String,
    pub total_files: u64,
    /// Aggregate size of all markdown files, in bytes.
    pub total_size: u64,
    /// Most recent modification across the vault; absent for empty vaults.
    pub last_modified: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaultStats {
    pub total_vaults: u32,
    pub vaults: Vec<VaultStatsEntry>,
}

/// One markdown file found during the scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaultFileEntry {
    pub vault_name: String,
    pub vault_path: String,
    pub file_path: String,
    pub relative_path: String,
    pub filename: String,
    pub size: u64,
    pub modified_time: DateTime<Utc>,
    pub created_time: DateTime<Utc>,
}

/// The full preview response.
///
/// `files` is capped by the backend; `truncated` says the cap was hit and
/// `total_files` is the true count across all vaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaultPreview {
    pub vault_stats: VaultStats,
    pub total_files: u64,
    pub files: Vec<VaultFileEntry>,
    #[serde(default)]
    pub truncated: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_deserializes_backend_shape() {
        let json = r#"{
            "vault_stats": {
                "total_vaults": 1,
                "vaults": [{
                    "name": "notes",
                    "path": "/home/me/notes",
                    "total_files": 42,
                    "total_size": 1536,
                    "last_modified": "2025-11-03T09:15:00Z"
                }]
            },
            "total_files": 42,
            "files": [{
                "vault_name": "notes",
                "vault_path": "/home/me/notes",
                "file_path": "/home/me/notes/daily/today.md",
                "relative_path": "daily/today.md",
                "filename": "today.md",
                "size": 812,
                "modified_time": "2025-11-03T09:15:00Z",
                "created_time": "2025-10-01T08:00:00Z"
            }],
            "truncated": false
        }"#;

        let preview: VaultPreview = serde_json::from_str(json).unwrap();
        assert_eq!(preview.vault_stats.total_vaults, 1);
        assert_eq!(preview.vault_stats.vaults[0].total_size, 1536);
        assert_eq!(preview.files.len(), 1);
        assert_eq!(preview.files[0].relative_path, "daily/today.md");
        assert!(!preview.truncated);
    }

    #[test]
    fn truncated_defaults_to_false_and_last_modified_may_be_absent() {
        let json = r#"{
            "vault_stats": {
                "total_vaults": 1,
                "vaults": [{
                    "name": "empty",
                    "path": "/home/me/empty",
                    "total_files": 0,
                    "total_size": 0,
                    "last_modified": null
                }]
            },
            "total_files": 0,
            "files": []
        }"#;

        let preview: VaultPreview = serde_json::from_str(json).unwrap();
        assert!(!preview.truncated);
        assert!(preview.vault_stats.vaults[0].last_modified.is_none());
    }
}
