use super::render_csv;
use crate::core::bsn::BsnValidator;
use crate::core::{ConfigProvider, Dataset, Pipeline, Storage, Telemetry, TransformResult};
use crate::utils::error::Result;

pub const BSN_FIXTURE_FILE: &str = "bsn_testbestand.csv";

/// Fixed mix of BSNs for exercising validation in downstream systems.
pub const FIXTURE_BSNS: [&str; 16] = [
    "123456782",
    "987654321",
    "111222333",
    "123456789",
    "876543210",
    "234567890",
    "345678901",
    "456789012",
    "567890123",
    "678901234",
    "789012345",
    "890123456",
    "901234567",
    "012345678",
    "135792468",
    "246813579",
];

/// Writes [`FIXTURE_BSNS`] with each number's 11-proef verdict.
pub struct BsnFixturePipeline<S: Storage, C: ConfigProvider, T: Telemetry> {
    storage: S,
    config: C,
    validator: BsnValidator<T>,
}

impl<S: Storage, C: ConfigProvider, T: Telemetry> BsnFixturePipeline<S, C, T> {
    pub fn new(storage: S, config: C, telemetry: T) -> Self {
        Self {
            storage,
            config,
            validator: BsnValidator::with_telemetry(telemetry),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider, T: Telemetry> Pipeline for BsnFixturePipeline<S, C, T> {
    async fn extract(&self) -> Result<Dataset> {
        let mut dataset = Dataset::new(vec!["bsn".to_string()]);
        for bsn in FIXTURE_BSNS {
            dataset.push(vec![bsn.to_string()]);
        }
        Ok(dataset)
    }

    async fn transform(&self, data: Dataset) -> Result<TransformResult> {
        let mut headers = data.headers;
        headers.push("geldig".to_string());

        let mut dataset = Dataset::new(headers);
        for mut row in data.rows {
            let valid = match row.first() {
                Some(bsn) => self.validator.validate(bsn)?,
                None => false,
            };
            row.push(valid.to_string());
            dataset.push(row);
        }

        let csv_output = render_csv(&dataset)?;
        Ok(TransformResult {
            file_name: BSN_FIXTURE_FILE.to_string(),
            dataset,
            csv_output,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        self.storage
            .write_file(&result.file_name, result.csv_output.as_bytes())
            .await?;

        let path = self.config.output_dir().join(&result.file_name);
        tracing::info!("BSN fixture file saved to {}", path.display());
        Ok(path.display().to_string())
    }
}
