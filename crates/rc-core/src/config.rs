//! Configuration management for recipe-comments

use crate::error::{CommentsError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Comment settings
    pub comments: CommentConfig,
    /// Storage settings
    pub storage: StorageConfig,
}

impl Config {
    /// Parse configuration from TOML text; missing keys fall back to defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CommentsError::Toml(e.to_string()))
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CommentsError::FileNotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
            .map_err(|e| e.with_context(format!("Failed to load {}", path.display())))
    }

    /// Render configuration as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| CommentsError::Toml(e.to_string()))
    }
}

/// Comment-related configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentConfig {
    /// Maximum comment text length in characters; unlimited when unset
    pub max_text_length: Option<usize>,
}

/// Storage-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Base directory for stored comments; platform data dir when unset
    pub data_dir: Option<PathBuf>,
    /// Pretty-print stored documents
    pub pretty: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            pretty: true,
        }
    }
}
