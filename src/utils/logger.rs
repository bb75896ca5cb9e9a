use crate::utils::error::Result;
use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn env_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("nl_testdata=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("nl_testdata=info"))
    }
}

fn open_log_file(log_file: &Path) -> Result<File> {
    Ok(OpenOptions::new().create(true).append(true).open(log_file)?)
}

/// Console output plus an appending plain-text copy in `log_file`.
pub fn init_cli_logger(verbose: bool, log_file: &Path) -> Result<()> {
    let file = open_log_file(log_file)?;

    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();

    Ok(())
}

/// JSON lines to `log_file` only, for unattended runs.
pub fn init_json_logger(log_file: &Path) -> Result<()> {
    let file = open_log_file(log_file)?;

    tracing_subscriber::registry()
        .with(env_filter(false))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(Mutex::new(file))
                .json(),
        )
        .init();

    Ok(())
}
