pub mod aggregate;

pub use aggregate::{
    ObsidianConnectorConfig, SearchSourceConnector, SearchSourceConnectorCreateDto,
    SearchSourceConnectorType, MIN_CONNECTOR_NAME_LEN,
};
