use crate::domain::page_view::DEFAULT_PAGE_SIZE;
use crate::domain::status_message::DEFAULT_STATUS_TTL_MS;
use crate::services::error_handling::CustomerError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_ENDPOINT: &str = "https://fakerapi.it/api/v2/persons";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Read endpoint returning `{ "data": [...] }`
    pub endpoint: String,

    /// Records requested per fetch, sent as `_quantity`
    pub quantity: u32,

    /// Rows per table page
    pub page_size: usize,

    /// Key of the persisted collection slot
    pub storage_key: String,

    /// How long a status message stays visible
    pub status_ttl_ms: i64,

    /// Message shown after a local delete
    pub delete_message: String,

    /// Directory holding the slot on desktop; browser builds use localStorage
    pub cache_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            quantity: 50,
            page_size: DEFAULT_PAGE_SIZE,
            storage_key: "customers".to_string(),
            status_ttl_ms: DEFAULT_STATUS_TTL_MS,
            delete_message: "User deleted (locally)".to_string(),
            cache_dir: None,
        }
    }
}

impl AppConfig {
    /// Parses a (possibly partial) JSON document over the defaults.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content).context("Failed to parse configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file, falling back to defaults if it is missing
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration at {}", path.display()))?;
        Self::from_json_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if self.quantity == 0 {
            return Err(CustomerError::InvalidQuantity { quantity: 0 }.into());
        }
        if self.page_size == 0 {
            return Err(CustomerError::Configuration {
                message: "page_size must be at least 1".to_string(),
            }
            .into());
        }
        if self.endpoint.trim().is_empty() {
            return Err(CustomerError::Configuration {
                message: "endpoint must not be empty".to_string(),
            }
            .into());
        }
        Ok(())
    }

    pub fn status_ttl(&self) -> chrono::Duration {
        chrono::Duration::milliseconds(self.status_ttl_ms.max(0))
    }
}
