use crate::config::toml_config::TomlConfig;
use crate::config::GeneratorSettings;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "nl-testdata")]
#[command(about = "Generate synthetic Dutch personal test data as CSV")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    /// TOML settings file; command line flags override its values
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Directory that receives output/ and logging/
    #[arg(long, global = true)]
    pub root: Option<String>,

    /// Number of persons to generate or download
    #[arg(long, global = true)]
    pub count: Option<usize>,

    /// Seed for reproducible generation
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// randomuser.me compatible endpoint
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    #[arg(long, global = true)]
    pub timeout_seconds: Option<u64>,

    /// Candidates tried per BSN before giving up
    #[arg(long, global = true)]
    pub max_attempts: Option<usize>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Log JSON lines to logging/app.log only, nothing on the console
    #[arg(long, global = true)]
    pub json_log: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Write output/personen.csv with generated persons
    Personen,
    /// Download persons from randomuser.me into output/testpersonen.csv
    Download,
    /// Write output/bsn_testbestand.csv with fixture BSNs and verdicts
    BsnBestand,
    /// Run personen, download and bsn-bestand in turn
    All,
    /// Check a BSN against the 11-proef
    Validate { bsn: String },
    /// Print freshly generated valid BSNs
    Generate {
        #[arg(short = 'n', long, default_value_t = 1)]
        number: usize,
    },
}

impl CliConfig {
    /// Merges the optional TOML file with the command line overrides.
    pub fn settings(&self) -> Result<GeneratorSettings> {
        let mut settings = match &self.config {
            Some(path) => {
                tracing::debug!("Loading settings from {}", path);
                TomlConfig::from_file(path)?.settings()
            }
            None => GeneratorSettings::default(),
        };

        if let Some(root) = &self.root {
            settings.root_dir = root.clone();
        }
        if let Some(count) = self.count {
            settings.record_count = count;
        }
        if let Some(seed) = self.seed {
            settings.seed = Some(seed);
        }
        if let Some(endpoint) = &self.endpoint {
            settings.download_endpoint = endpoint.clone();
        }
        if let Some(timeout) = self.timeout_seconds {
            settings.request_timeout_secs = timeout;
        }
        if let Some(max_attempts) = self.max_attempts {
            settings.max_bsn_attempts = max_attempts;
        }

        settings.validate()?;
        Ok(settings)
    }
}
