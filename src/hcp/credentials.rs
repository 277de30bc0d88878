//! TFE token resolution from multiple sources

use dialoguer::Password;
use log::debug;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::credentials;
use crate::error::{Result, TfeError};

/// Credentials file structure
#[derive(Deserialize, Debug)]
struct TfeCredentials {
    credentials: HashMap<String, TfeCredential>,
}

/// Single credential entry
#[derive(Deserialize, Debug)]
struct TfeCredential {
    token: String,
}

/// Token resolution with fallback logic
pub struct TokenResolver {
    host: String,
}

impl TokenResolver {
    /// Create a new token resolver for the given host
    pub fn new(host: &str) -> Self {
        Self {
            host: host.to_string(),
        }
    }

    /// Create a resolver for the host part of a TFE URL
    pub fn for_url(tfe_url: &str) -> Self {
        let host = reqwest::Url::parse(tfe_url)
            .ok()
            .and_then(|u| u.host_str().map(String::from))
            .unwrap_or_else(|| tfe_url.to_string());
        Self::new(&host)
    }

    /// Resolve token from multiple sources with fallback:
    /// 1. CLI argument (`--token`, or `TFE_ADMIN_TOKEN` through clap)
    /// 2. Environment variables (TFE_TOKEN, TFC_TOKEN, HCP_TOKEN - in order)
    /// 3. Credentials file (~/.terraform.d/credentials.tfrc.json)
    /// 4. Interactive hidden prompt, unless `batch_mode`
    pub fn resolve(&self, cli_token: Option<&str>, batch_mode: bool) -> Result<String> {
        if let Some(token) = cli_token.filter(|t| !t.is_empty()) {
            debug!("Using token from CLI argument");
            return Ok(token.to_string());
        }

        for env_var in credentials::TOKEN_ENV_VARS {
            if let Ok(token) = std::env::var(env_var) {
                if !token.is_empty() {
                    debug!("Using token from {} environment variable", env_var);
                    return Ok(token);
                }
            }
        }

        let credentials_path = Self::get_credentials_path();
        if let Some(ref path) = credentials_path {
            if let Some(token) = self.read_from_credentials_file(path)? {
                return Ok(token);
            }
        }

        if batch_mode {
            return Err(TfeError::TokenNotFound(
                self.token_not_found_message(credentials_path.as_deref()),
            ));
        }

        debug!("No token in arguments, environment or credentials file; prompting");
        Password::new()
            .with_prompt("Enter your admin token")
            .interact()
            .map_err(|e| TfeError::TokenNotFound(format!("Failed to read token: {}", e)))
    }

    /// Read token for this host from a Terraform credentials file
    ///
    /// A missing file or host entry is `Ok(None)`; a corrupt file is an error.
    fn read_from_credentials_file(&self, credentials_path: &Path) -> Result<Option<String>> {
        debug!(
            "Looking for credentials file at: {}",
            credentials_path.display()
        );

        let content = match fs::read_to_string(credentials_path) {
            Ok(content) => content,
            Err(_) => return Ok(None),
        };

        let creds: TfeCredentials = serde_json::from_str(&content).map_err(|e| {
            TfeError::Credentials(format!(
                "Could not parse credentials file {}: {}",
                credentials_path.display(),
                e
            ))
        })?;

        Ok(creds.credentials.get(&self.host).map(|cred| {
            debug!(
                "Using token from credentials file {} for host: {}",
                credentials_path.display(),
                self.host
            );
            cred.token.clone()
        }))
    }

    /// Generate helpful error message when token is not found
    fn token_not_found_message(&self, credentials_path: Option<&Path>) -> String {
        let env_vars = credentials::TOKEN_ENV_VARS.join(", ");
        let creds_info = credentials_path
            .map(|p| format!(" and credentials file {}", p.display()))
            .unwrap_or_default();

        format!(
            "No API token found for host '{}'. Please provide a token using one of:\n\
             \n\
             1. CLI argument:      --token <TOKEN>\n\
             2. Environment var:   export {}=<TOKEN>  (also: {})\n\
             3. Terraform login:   terraform login {}\n\
             4. Interactive:       run without --batch to be prompted\n\
             \n\
             Checked: env vars [{}, {}]{}",
            self.host,
            credentials::ADMIN_TOKEN_ENV_VAR,
            env_vars,
            self.host,
            credentials::ADMIN_TOKEN_ENV_VAR,
            env_vars,
            creds_info
        )
    }

    /// Get the path to Terraform credentials file (platform-specific)
    /// - Windows: %APPDATA%\terraform.d\credentials.tfrc.json
    /// - Linux/macOS: ~/.terraform.d/credentials.tfrc.json
    fn get_credentials_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            dirs::config_dir().map(|p| p.join(credentials::FILE_NAME))
        }

        #[cfg(not(windows))]
        {
            dirs::home_dir().map(|p| p.join(credentials::FILE_PATH_UNIX))
        }
    }
}
