//! Import configuration

use crate::error::{ImportError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Library import settings
///
/// Keys are camelCase; the lowercase aliases accept keys that the config
/// loader has folded to lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScanConfig {
    /// Follow symbolic links while scanning
    #[serde(alias = "followsymlinks")]
    pub follow_symlinks: bool,

    /// Run MIME validation on every imported file
    #[serde(alias = "validatemime")]
    pub validate_mime: bool,

    /// Extract metadata for every imported file
    #[serde(alias = "loadmetadata")]
    pub load_metadata: bool,

    /// Capacity of the MIME detection cache (0 disables it)
    #[serde(alias = "mimecachecapacity")]
    pub mime_cache_capacity: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            follow_symlinks: false,
            validate_mime: true,
            load_metadata: true,
            mime_cache_capacity: 0,
        }
    }
}

impl ScanConfig {
    /// Load configuration from a TOML, JSON or YAML file
    ///
    /// The format is chosen from the file extension. Keys missing from the
    /// file keep their default value.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(ImportError::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }

        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .build()
            .map_err(|e| ImportError::Config(e.to_string()))?;

        let config: Self = settings
            .try_deserialize()
            .map_err(|e| ImportError::Config(e.to_string()))?;

        tracing::debug!("Loaded scan config from {}: {:?}", path.display(), config);
        Ok(config)
    }
}
