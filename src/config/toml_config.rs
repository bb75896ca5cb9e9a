use crate::config::{GeneratorSettings, DEFAULT_ENDPOINT, DEFAULT_RECORD_COUNT, DEFAULT_TIMEOUT_SECS};
use crate::core::bsn::DEFAULT_MAX_ATTEMPTS;
use crate::utils::error::{Result, TestDataError};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings file layout:
///
/// ```toml
/// [workspace]
/// root = "./testdata"
///
/// [generator]
/// count = 25
/// seed = 42
/// max_bsn_attempts = 1000
///
/// [download]
/// endpoint = "https://randomuser.me/api/"
/// timeout_seconds = 10
/// ```
///
/// Every section and key is optional. `${VAR}` is replaced with the
/// environment variable's value before parsing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub workspace: WorkspaceConfig,
    pub generator: GeneratorConfig,
    pub download: DownloadConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceConfig {
    pub root: String,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            root: ".".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub count: usize,
    pub seed: Option<u64>,
    pub max_bsn_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_RECORD_COUNT,
            seed: None,
            max_bsn_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloadConfig {
    pub endpoint: String,
    pub timeout_seconds: u64,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TestDataError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| TestDataError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with its environment value; unknown variables stay
    /// as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| TestDataError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn settings(&self) -> GeneratorSettings {
        GeneratorSettings {
            root_dir: self.workspace.root.clone(),
            record_count: self.generator.count,
            seed: self.generator.seed,
            download_endpoint: self.download.endpoint.clone(),
            request_timeout_secs: self.download.timeout_seconds,
            max_bsn_attempts: self.generator.max_bsn_attempts,
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.settings().validate()
    }
}
