use crate::domain::model::{Dataset, TransformResult};
use crate::utils::error::Result;
use crate::utils::workspace::Workspace;
use async_trait::async_trait;
use rand::Rng;
use std::path::PathBuf;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn root_dir(&self) -> &str;
    fn record_count(&self) -> usize;
    fn seed(&self) -> Option<u64>;
    fn download_endpoint(&self) -> &str;
    fn request_timeout_secs(&self) -> u64;
    fn max_bsn_attempts(&self) -> usize;

    fn output_dir(&self) -> PathBuf {
        Workspace::new(self.root_dir()).output_dir().to_path_buf()
    }
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Dataset>;
    async fn transform(&self, data: Dataset) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<String>;
}

/// Produces the next digit, 0 through 9, uniformly.
pub trait DigitSource {
    fn next_digit(&mut self) -> u8;
}

/// Adapts any `rand` generator into a [`DigitSource`].
pub struct RngDigitSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RngDigitSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> DigitSource for RngDigitSource<R> {
    fn next_digit(&mut self) -> u8 {
        self.rng.random_range(0..10)
    }
}

/// Sink for the validator's per-check messages.
pub trait Telemetry: Send + Sync {
    fn info(&self, msg: &str);
    fn warn(&self, msg: &str);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTelemetry;

impl Telemetry for NoopTelemetry {
    fn info(&self, _msg: &str) {}

    fn warn(&self, _msg: &str) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingTelemetry;

impl Telemetry for TracingTelemetry {
    fn info(&self, msg: &str) {
        tracing::info!("{}", msg);
    }

    fn warn(&self, msg: &str) {
        tracing::warn!("{}", msg);
    }
}
