//! Configuration File
//!
//! JSON設定ファイルの読み込み（全キー省略可能）

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;

use crate::domain::services::field_listing::DEFAULT_MAX_FIELDS;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub max_fields: usize,
    pub recursive: bool,
    pub follow_links: bool,
    pub sort: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_fields: DEFAULT_MAX_FIELDS,
            recursive: false,
            follow_links: true,
            sort: false,
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);
        let content = fs::read_to_string(&*expanded)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path))?;
        info!("Loaded configuration from {}", path);
        Ok(config)
    }

    /// パスが指定されていれば読み込み、無ければ既定値を返す
    pub fn load_optional(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
