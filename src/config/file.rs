// src/config/file.rs

//! The optional YAML config file layer.

use crate::errors::ConfigError;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;

/// Settings read from a `.tfsgit.yaml` file. Keys mirror the long flag names.
///
/// Unknown keys are ignored so a shared file can carry settings for other tools.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct FileConfig {
    pub tfscred: Option<String>,
    pub tfsrepo: Option<String>,
    pub tfsbranch: Option<String>,
    pub tfsmatch: Option<String>,
    pub tfspath: Option<String>,
    pub tfsdepth: Option<u32>,
    pub tfsquiet: Option<bool>,
    pub tfstimeout: Option<u64>,
    pub tfsverbosity: Option<u8>,
}

impl FileConfig {
    /// Parses YAML text. An empty document yields an empty layer.
    pub fn from_yaml_str(content: &str, origin: &Path) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml_ng::from_str(content).map_err(|source| ConfigError::FileParse {
            path: origin.display().to_string(),
            source,
        })
    }

    /// Reads a config file that must exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&content, path)
    }

    /// Reads a config file if it exists; a missing file is an empty layer.
    pub fn load_optional(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(content) => Self::from_yaml_str(&content, path),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("No config file at '{}', skipping.", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::FileRead {
                path: path.display().to_string(),
                source,
            }),
        }
    }
}
