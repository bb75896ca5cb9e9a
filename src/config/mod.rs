#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::bsn::DEFAULT_MAX_ATTEMPTS;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_path, validate_positive_number, validate_range, validate_url, Validate,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT: &str = "https://randomuser.me/api/";
pub const DEFAULT_RECORD_COUNT: usize = 10;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// randomuser.me refuses larger batches.
pub const MAX_RECORD_COUNT: usize = 5000;

/// Resolved settings for one run, after TOML and command line are merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorSettings {
    pub root_dir: String,
    pub record_count: usize,
    pub seed: Option<u64>,
    pub download_endpoint: String,
    pub request_timeout_secs: u64,
    pub max_bsn_attempts: usize,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            root_dir: ".".to_string(),
            record_count: DEFAULT_RECORD_COUNT,
            seed: None,
            download_endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_bsn_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl ConfigProvider for GeneratorSettings {
    fn root_dir(&self) -> &str {
        &self.root_dir
    }

    fn record_count(&self) -> usize {
        self.record_count
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn download_endpoint(&self) -> &str {
        &self.download_endpoint
    }

    fn request_timeout_secs(&self) -> u64 {
        self.request_timeout_secs
    }

    fn max_bsn_attempts(&self) -> usize {
        self.max_bsn_attempts
    }
}

impl Validate for GeneratorSettings {
    fn validate(&self) -> Result<()> {
        validate_path("root_dir", &self.root_dir)?;
        validate_range("record_count", self.record_count, 1, MAX_RECORD_COUNT)?;
        validate_url("download_endpoint", &self.download_endpoint)?;
        validate_positive_number("request_timeout_secs", self.request_timeout_secs as usize, 1)?;
        validate_positive_number("max_bsn_attempts", self.max_bsn_attempts, 1)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::TestDataError;

    #[test]
    fn test_defaults_are_valid() {
        let settings = GeneratorSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.max_bsn_attempts(), 1000);
        assert_eq!(
            settings.output_dir(),
            std::path::Path::new(".").join("output")
        );
    }

    #[test]
    fn test_rejects_zero_attempts() {
        let settings = GeneratorSettings {
            max_bsn_attempts: 0,
            ..GeneratorSettings::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(matches!(
            err,
            TestDataError::InvalidConfigValueError { ref field, .. } if field == "max_bsn_attempts"
        ));
    }

    #[test]
    fn test_rejects_oversized_batch() {
        let settings = GeneratorSettings {
            record_count: MAX_RECORD_COUNT + 1,
            ..GeneratorSettings::default()
        };
        assert!(settings.validate().is_err());
    }
}
