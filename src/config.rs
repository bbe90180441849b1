//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Base URL used when no share_base_url is configured
pub const DEFAULT_SHARE_BASE_URL: &str = "https://forma.app";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Base URL for copied share links
    pub share_base_url: Option<String>,
    /// Forms-list sort field
    pub form_sort_field: Option<String>,
    /// Forms-list sort direction
    pub form_sort_direction: Option<String>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "forma", "forma-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// The share-link base, falling back to the default
    pub fn share_base(&self) -> &str {
        self.share_base_url
            .as_deref()
            .unwrap_or(DEFAULT_SHARE_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.share_base_url.is_none());
        assert!(config.form_sort_field.is_none());
        assert!(config.form_sort_direction.is_none());
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            share_base_url: Some("https://forms.example.com".to_string()),
            form_sort_field: Some("title".to_string()),
            form_sort_direction: Some("asc".to_string()),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(
            parsed.share_base_url,
            Some("https://forms.example.com".to_string())
        );
        assert_eq!(parsed.form_sort_field, Some("title".to_string()));
        assert_eq!(parsed.form_sort_direction, Some("asc".to_string()));
    }

    #[test]
    fn test_partial_serialization() {
        let config = TuiConfig {
            form_sort_field: Some("created".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.form_sort_field, Some("created".to_string()));
        assert!(parsed.form_sort_direction.is_none());
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let json = "{}";
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert!(parsed.share_base_url.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"share_base_url": "https://x.dev", "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.share_base_url, Some("https://x.dev".to_string()));
    }

    #[test]
    fn test_share_base_falls_back_to_default() {
        let config = TuiConfig::default();
        assert_eq!(config.share_base(), DEFAULT_SHARE_BASE_URL);
        let config = TuiConfig {
            share_base_url: Some("https://forms.example.com".to_string()),
            ..Default::default()
        };
        assert_eq!(config.share_base(), "https://forms.example.com");
    }

    #[test]
    fn test_config_path_returns_option() {
        // Just test that the function doesn't panic
        let _path = TuiConfig::config_path();
    }

    #[test]
    fn test_load_returns_default_when_no_file() {
        // Load should return default config when file doesn't exist
        let result = TuiConfig::load();
        assert!(result.is_ok());
    }
}
