pub mod dto;

pub use dto::{VaultFileEntry, VaultFilesRequest, VaultPreview, VaultStats, VaultStatsEntry};
