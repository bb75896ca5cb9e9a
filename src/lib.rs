pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command};

pub use adapters::LocalStorage;
pub use app::pipelines::{BsnFixturePipeline, DownloadPipeline, PersonenPipeline};
pub use config::{toml_config::TomlConfig, GeneratorSettings};
pub use core::{
    bsn::{Bsn, BsnValidator},
    engine::GenerationEngine,
};
pub use domain::ports::{DigitSource, NoopTelemetry, RngDigitSource, Telemetry, TracingTelemetry};
pub use utils::error::{Result, TestDataError};
pub use utils::workspace::Workspace;
