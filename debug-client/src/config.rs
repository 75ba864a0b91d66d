// Client configuration
//
// Read from a JSON file; every field has a default so a partial (or empty)
// file is valid. Unknown keys are ignored.

use crate::protocol::{DebugError, DebugResult, DEFAULT_ATTACH_HOST, DEFAULT_ATTACH_PORT};
use crate::types::AttachTarget;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ClientConfig {
    /// Project root; breakpoint paths are compared relative to it
    pub root_dir: PathBuf,
    /// Default host for `attach` without arguments
    pub attach_host: String,
    /// Default port for `attach` without arguments
    pub attach_port: u16,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            root_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            attach_host: DEFAULT_ATTACH_HOST.to_string(),
            attach_port: DEFAULT_ATTACH_PORT,
        }
    }
}

impl ClientConfig {
    pub fn with_root(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
            ..Self::default()
        }
    }

    pub fn load(path: &Path) -> DebugResult<Self> {
        debug!("Loading client config from {}", path.display());

        let text = std::fs::read_to_string(path).map_err(|source| DebugError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&text).map_err(|source| DebugError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn attach_target(&self) -> AttachTarget {
        AttachTarget::new(self.attach_host.clone(), self.attach_port)
    }
}
