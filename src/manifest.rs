//! Batch manifest (identicon.yaml) parsing.
//!
//! The manifest lists inputs to render in one `generate` run, along with
//! the output directory and overwrite behaviour.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{IdenticonError, Result};

/// Default manifest filename.
pub const MANIFEST_FILENAME: &str = "identicon.yaml";

/// Batch configuration loaded from identicon.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Directory to write PNG files into.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Strings to render, one identicon each.
    #[serde(default)]
    pub inputs: Vec<String>,

    /// Overwrite existing files.
    #[serde(default)]
    pub force: bool,
}

fn default_output() -> PathBuf {
    PathBuf::from(".")
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            output: default_output(),
            inputs: vec![],
            force: false,
        }
    }
}

impl Manifest {
    /// Load manifest from an identicon.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| IdenticonError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| IdenticonError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some(format!("Check {} syntax", MANIFEST_FILENAME)),
        })
    }

    /// Serialize back to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| IdenticonError::Build {
            message: format!("Failed to serialize manifest: {}", e),
            help: None,
        })
    }
}
