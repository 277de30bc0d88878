//! YAML configuration file I/O

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{Result, TfeError};
use crate::hcp::QueryMode;

/// Contents of the audit configuration file
///
/// ```yaml
/// tfe_url: https://tfe.example.com
/// organizations:
///   - org-a
///   - org-b
/// mode: empty-only
/// max_workers: 10
/// ```
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditConfig {
    pub tfe_url: Option<String>,
    #[serde(alias = "orgs")]
    pub organizations: Option<Vec<String>>,
    pub mode: Option<QueryMode>,
    pub max_workers: Option<usize>,
}

impl AuditConfig {
    /// Load and validate the configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            TfeError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config = Self::parse(&content).map_err(|e| match e {
            TfeError::Config(msg) => {
                TfeError::Config(format!("{} (config file {})", msg, path.display()))
            }
            other => other,
        })?;

        Ok(config)
    }

    /// Parse and validate configuration from YAML text
    pub fn parse(content: &str) -> Result<Self> {
        let config: AuditConfig = serde_yml::from_str(content)
            .map_err(|e| TfeError::Config(format!("Failed to parse YAML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Check required keys and value ranges
    fn validate(&self) -> Result<()> {
        let url = self
            .tfe_url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .ok_or_else(|| TfeError::Config("Missing required config key: tfe_url".to_string()))?;

        match reqwest::Url::parse(url) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
            _ => {
                return Err(TfeError::Config(format!(
                    "tfe_url must be an http(s) URL, got '{}'",
                    url
                )))
            }
        }

        if self.max_workers == Some(0) {
            return Err(TfeError::Config(
                "max_workers must be a positive integer".to_string(),
            ));
        }

        Ok(())
    }

    /// Validated TFE URL
    pub fn tfe_url(&self) -> &str {
        self.tfe_url.as_deref().map(str::trim).unwrap_or_default()
    }

    /// Organizations listed in the file, empty when absent
    pub fn organizations(&self) -> &[String] {
        self.organizations.as_deref().unwrap_or_default()
    }
}
