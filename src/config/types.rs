use crate::query::QueryRequest;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://tools-cluster-interface.iedb.org/tools_api/";
pub const BASE_URL_ENV: &str = "IEDB_BASE_URL";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default)]
    pub logs: LogsConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub queries: Vec<QueryRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Whole-request timeout. The service itself imposes none, so this is
    /// the only bound on a stalled prediction.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub proxy: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Treat a non-success status as an error instead of an absent table.
    #[serde(default)]
    pub strict: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Tsv,
    Json,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            proxy: None,
            user_agent: None,
            strict: false,
        }
    }
}

impl ClientConfig {
    /// Defaults, with the base URL taken from `IEDB_BASE_URL` when set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(base_url) = std::env::var(BASE_URL_ENV).ok().filter(|u| !u.is_empty()) {
            config.base_url = base_url;
        }
        config
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_log_level() -> String {
    "info".to_string()
}
