//! Storefront configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use trendify_observability::{LogFormat, LogLevel, SessionId, StructuredLogger};

/// Storefront configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Persistent store keys.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Toast notifications.
    #[serde(default)]
    pub notifications: NotificationConfig,

    /// Logging.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StorefrontConfig {
    /// Load config from a file. Paths ending in `.json` are read as JSON, anything else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            Self::from_toml_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Parse TOML config text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Build a logger for a new session according to the logging section.
    pub fn logger(&self, component: &str) -> StructuredLogger {
        StructuredLogger::new(SessionId::generate())
            .with_component(component)
            .with_min_level(self.logging.level)
            .with_format(self.logging.format)
    }
}

/// Keys the cart and wishlist are stored under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_cart_key")]
    pub cart_key: String,
    #[serde(default = "default_wishlist_key")]
    pub wishlist_key: String,
}

fn default_cart_key() -> String {
    "trendify_cart".to_string()
}

fn default_wishlist_key() -> String {
    "trendify_wishlist".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            cart_key: default_cart_key(),
            wishlist_key: default_wishlist_key(),
        }
    }
}

/// Toast notification settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// How long each toast stays up.
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
}

fn default_true() -> bool {
    true
}

fn default_duration_ms() -> u64 {
    3000
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            duration_ms: default_duration_ms(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub level: LogLevel,
    #[serde(default)]
    pub format: LogFormat,
}
