use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::{
    DEFAULT_BASE_URL, DEFAULT_RETRY_ATTEMPTS, DEFAULT_RETRY_DELAY_SECONDS,
    DEFAULT_TIMEOUT_SECONDS, DEFAULT_USER_AGENT,
};
use crate::domain::ports::ClientOptions;
use crate::utils::error::{Result, ScrapeError};
use crate::utils::validation::{self, Validate};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub client: ClientSection,
    pub output: Option<OutputSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientSection {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_retry_attempts")]
    pub retry_attempts: u32,
    #[serde(default = "default_retry_delay_seconds")]
    pub retry_delay_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    pub path: Option<String>,
    pub pretty: Option<bool>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

fn default_retry_attempts() -> u32 {
    DEFAULT_RETRY_ATTEMPTS
}

fn default_retry_delay_seconds() -> u64 {
    DEFAULT_RETRY_DELAY_SECONDS
}

impl Default for ClientSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_seconds: default_timeout_seconds(),
            retry_attempts: default_retry_attempts(),
            retry_delay_seconds: default_retry_delay_seconds(),
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ScrapeError::Config {
            message: format!("Failed to parse TOML config: {}", e),
        })
    }
}

impl ClientOptions for TomlConfig {
    fn base_url(&self) -> &str {
        &self.client.base_url
    }

    fn user_agent(&self) -> &str {
        &self.client.user_agent
    }

    fn timeout_seconds(&self) -> u64 {
        self.client.timeout_seconds
    }

    fn retry_attempts(&self) -> u32 {
        self.client.retry_attempts
    }

    fn retry_delay_seconds(&self) -> u64 {
        self.client.retry_delay_seconds
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("client.base_url", &self.client.base_url)?;
        validation::validate_non_empty_string("client.user_agent", &self.client.user_agent)?;
        validation::validate_positive_number("client.timeout_seconds", self.client.timeout_seconds, 1)?;
        validation::validate_range("client.retry_attempts", self.client.retry_attempts, 0, 10)?;
        validation::validate_range(
            "client.retry_delay_seconds",
            self.client.retry_delay_seconds,
            0,
            300,
        )?;
        if let Some(output) = &self.output {
            if let Some(path) = &output.path {
                validation::validate_non_empty_string("output.path", path)?;
            }
        }
        Ok(())
    }
}
