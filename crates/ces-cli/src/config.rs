/*
[INPUT]:  YAML configuration file, environment, CLI overrides
[OUTPUT]: Resolved client settings and a ready CesClient
[POS]:    Configuration layer - client setup for the CLI
[UPDATE]: When adding new configuration options
*/

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use ces_sdk::{CesClient, ClientConfig, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};

/// CLI configuration file
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CliConfig {
    /// API key sent in the CES_API_KEY header
    #[serde(default)]
    pub api_key: Option<String>,
    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Whole-request timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl CliConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content).context("parse config yaml")?;
        Ok(config)
    }

    /// Environment key wins over the file; a CLI base URL wins over both
    pub fn apply_overrides(&mut self, env_api_key: Option<String>, base_url: Option<String>) {
        if let Some(key) = env_api_key.filter(|key| !key.is_empty()) {
            self.api_key = Some(key);
        }
        if let Some(url) = base_url {
            self.base_url = url;
        }
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: self.timeout_secs.map(Duration::from_secs),
            ..ClientConfig::with_base_url(self.base_url.clone())
        }
    }

    pub fn build_client(&self) -> Result<CesClient> {
        let Some(api_key) = self.api_key.as_deref() else {
            bail!("no API key: set CES_API_KEY or api_key in the config file");
        };
        CesClient::with_config(api_key, self.client_config()).context("build CES client")
    }
}
