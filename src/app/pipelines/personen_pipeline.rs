use super::render_csv;
use crate::core::bsn::BsnValidator;
use crate::core::fields::PersonGenerator;
use crate::core::{ConfigProvider, Dataset, Pipeline, Storage, Telemetry, TransformResult};
use crate::domain::model::PERSON_HEADERS;
use crate::utils::error::Result;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub const PERSONEN_FILE: &str = "personen.csv";

/// Generates synthetic Dutch persons with valid BSNs.
pub struct PersonenPipeline<S: Storage, C: ConfigProvider, T: Telemetry> {
    storage: S,
    config: C,
    generator: PersonGenerator<T>,
    seed: u64,
}

impl<S: Storage, C: ConfigProvider, T: Telemetry> PersonenPipeline<S, C, T> {
    pub fn new(storage: S, config: C, telemetry: T) -> Result<Self> {
        let validator =
            BsnValidator::with_telemetry(telemetry).with_max_attempts(config.max_bsn_attempts());
        let seed = config.seed().unwrap_or_else(rand::random);
        Ok(Self {
            storage,
            generator: PersonGenerator::new(validator)?,
            config,
            seed,
        })
    }

    /// Seed of this pipeline's generator; pass it back through `--seed` to
    /// reproduce a run.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider, T: Telemetry> Pipeline for PersonenPipeline<S, C, T> {
    async fn extract(&self) -> Result<Dataset> {
        let count = self.config.record_count();
        tracing::info!("Generating {} persons (seed {})", count, self.seed);

        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let mut dataset = Dataset::new(PERSON_HEADERS.iter().map(|h| h.to_string()).collect());
        for _ in 0..count {
            let person = self.generator.person(&mut rng)?;
            dataset.push(person.into_row());
        }
        Ok(dataset)
    }

    async fn transform(&self, data: Dataset) -> Result<TransformResult> {
        let csv_output = render_csv(&data)?;
        Ok(TransformResult {
            file_name: PERSONEN_FILE.to_string(),
            dataset: data,
            csv_output,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        self.storage
            .write_file(&result.file_name, result.csv_output.as_bytes())
            .await?;
        Ok(self
            .config
            .output_dir()
            .join(&result.file_name)
            .display()
            .to_string())
    }
}
