use contracts::domain::a001_connector::{SearchSourceConnectorCreateDto, MIN_CONNECTOR_NAME_LEN};

/// In-memory draft of the connector form.
///
/// The path list never shrinks below one entry. Blank entries are fine
/// while editing; `non_empty_paths` drops them before anything goes
/// over the wire.
#[derive(Clone, Debug, PartialEq)]
pub struct ObsidianConnectorDraft {
    pub name: String,
    pub vault_paths: Vec<String>,
}

impl Default for ObsidianConnectorDraft {
    fn default() -> Self {
        Self {
            name: "Obsidian Connector".to_string(),
            vault_paths: vec![String::new()],
        }
    }
}

impl ObsidianConnectorDraft {
    /// Append an empty path row. No upper bound.
    pub fn add_path(&mut self) {
        self.vault_paths.push(String::new());
    }

    /// Remove the row at `index`. Removing the last remaining row (or an
    /// out-of-range one) is silently ignored.
    pub fn remove_path(&mut self, index: usize) {
        if self.vault_paths.len() > 1 && index < self.vault_paths.len() {
            self.vault_paths.remove(index);
        }
    }

    /// Replace the row at `index` verbatim; no trimming at this layer.
    pub fn update_path(&mut self, index: usize, value: String) {
        if let Some(slot) = self.vault_paths.get_mut(index) {
            *slot = value;
        }
    }

    /// Trimmed paths with blanks dropped. Recomputed on every call;
    /// preview and submit never share a cached result.
    pub fn non_empty_paths(&self) -> Vec<String> {
        self.vault_paths
            .iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn is_name_valid(&self) -> bool {
        self.name.trim().chars().count() >= MIN_CONNECTOR_NAME_LEN
    }

    /// Build the creation descriptor, or explain what is still missing.
    pub fn to_create_dto(&self) -> Result<SearchSourceConnectorCreateDto, String> {
        if !self.is_name_valid() {
            return Err(format!(
                "Connector name must be at least {} characters",
                MIN_CONNECTOR_NAME_LEN
            ));
        }
        let paths = self.non_empty_paths();
        if paths.is_empty() {
            return Err("Please enter at least one vault path".to_string());
        }
        Ok(SearchSourceConnectorCreateDto::obsidian(
            self.name.trim().to_string(),
            paths,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_connector::SearchSourceConnectorType;

    #[test]
    fn starts_with_one_empty_path() {
        let draft = ObsidianConnectorDraft::default();
        assert_eq!(draft.vault_paths, vec![String::new()]);
    }

    #[test]
    fn path_list_never_shrinks_below_one() {
        let mut draft = ObsidianConnectorDraft::default();
        draft.remove_path(0);
        assert_eq!(draft.vault_paths.len(), 1);

        draft.add_path();
        draft.add_path();
        assert_eq!(draft.vault_paths.len(), 3);
        draft.remove_path(1);
        draft.remove_path(0);
        assert_eq!(draft.vault_paths.len(), 1);
        draft.remove_path(0);
        assert_eq!(draft.vault_paths.len(), 1);
    }

    #[test]
    fn remove_out_of_range_is_ignored() {
        let mut draft = ObsidianConnectorDraft::default();
        draft.add_path();
        draft.remove_path(5);
        assert_eq!(draft.vault_paths.len(), 2);
    }

    #[test]
    fn update_touches_only_its_index() {
        let mut draft = ObsidianConnectorDraft::default();
        draft.add_path();
        draft.add_path();
        draft.update_path(0, "/vault/a".to_string());
        draft.update_path(2, "  spaced  ".to_string());

        assert_eq!(draft.vault_paths[0], "/vault/a");
        assert_eq!(draft.vault_paths[1], "");
        // Stored verbatim, whitespace included.
        assert_eq!(draft.vault_paths[2], "  spaced  ");
    }

    #[test]
    fn non_empty_paths_trims_and_drops_blanks() {
        let mut draft = ObsidianConnectorDraft::default();
        draft.add_path();
        draft.add_path();
        draft.update_path(1, "  ".to_string());
        draft.update_path(2, " /vault/a ".to_string());

        assert_eq!(draft.non_empty_paths(), vec!["/vault/a".to_string()]);
    }

    #[test]
    fn create_dto_requires_a_name_and_a_path() {
        let mut draft = ObsidianConnectorDraft::default();
        draft.name = "ab".to_string();
        draft.update_path(0, "/vault/a".to_string());
        assert!(draft.to_create_dto().is_err());

        draft.name = "My Vault".to_string();
        draft.update_path(0, "   ".to_string());
        assert!(draft.to_create_dto().is_err());
    }

    #[test]
    fn create_dto_sends_only_non_empty_paths() {
        let mut draft = ObsidianConnectorDraft::default();
        draft.name = "My Vault".to_string();
        draft.add_path();
        draft.add_path();
        draft.update_path(1, "  ".to_string());
        draft.update_path(2, "/vault/a".to_string());

        let dto = draft.to_create_dto().unwrap();
        assert_eq!(dto.config.vault_paths, vec!["/vault/a".to_string()]);
        assert_eq!(
            dto.connector_type,
            SearchSourceConnectorType::ObsidianConnector
        );
        assert!(dto.is_indexable);
        assert!(dto.last_indexed_at.is_none());
    }
}
