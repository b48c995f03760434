//! Loading of generated API configuration documents

use std::path::Path;

use tracing::{debug, info};

use super::types::WunderGraphConfiguration;
use crate::errors::{LoadError, LoadResult};

/// Parse a configuration document from a JSON string
pub fn parse_api_config(content: &str) -> LoadResult<WunderGraphConfiguration> {
    Ok(serde_json::from_str(content)?)
}

/// Load a configuration document from disk
pub async fn load_api_config(path: impl AsRef<Path>) -> LoadResult<WunderGraphConfiguration> {
    let path = path.as_ref();
    debug!("Loading API configuration from: {}", path.display());

    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| match source.kind() {
            std::io::ErrorKind::NotFound => LoadError::NotFound {
                path: path.to_path_buf(),
            },
            _ => LoadError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;

    let config = parse_api_config(&content)?;
    info!(
        "Loaded API configuration from: {} (api present: {})",
        path.display(),
        config.api.is_some()
    );
    Ok(config)
}
