use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct GenerationEngine<P: Pipeline> {
    name: String,
    pipeline: P,
}

impl<P: Pipeline> GenerationEngine<P> {
    pub fn new(name: impl Into<String>, pipeline: P) -> Self {
        Self {
            name: name.into(),
            pipeline,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting {} run", self.name);

        // Extract
        let dataset = self.pipeline.extract().await?;
        tracing::info!("Extracted {} records", dataset.len());

        // Transform
        let result = self.pipeline.transform(dataset).await?;
        tracing::debug!(
            "Rendered {} rows into {} ({} bytes)",
            result.dataset.len(),
            result.file_name,
            result.csv_output.len()
        );

        // Load
        let output_path = self.pipeline.load(result).await?;
        tracing::info!("{} saved to {}", self.name, output_path);

        Ok(output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Dataset, TransformResult};
    use crate::utils::error::TestDataError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingPipeline {
        loads: AtomicUsize,
        fail_extract: bool,
    }

    #[async_trait::async_trait]
    impl Pipeline for CountingPipeline {
        async fn extract(&self) -> Result<Dataset> {
            if self.fail_extract {
                return Err(TestDataError::ProcessingError {
                    message: "boom".to_string(),
                });
            }
            let mut dataset = Dataset::new(vec!["bsn".to_string()]);
            dataset.push(vec!["123456782".to_string()]);
            Ok(dataset)
        }

        async fn transform(&self, data: Dataset) -> Result<TransformResult> {
            Ok(TransformResult {
                file_name: "out.csv".to_string(),
                csv_output: "bsn\n123456782\n".to_string(),
                dataset: data,
            })
        }

        async fn load(&self, result: TransformResult) -> Result<String> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            Ok(format!("output/{}", result.file_name))
        }
    }

    #[tokio::test]
    async fn test_run_passes_through_all_phases() {
        let engine = GenerationEngine::new(
            "counting",
            CountingPipeline {
                loads: AtomicUsize::new(0),
                fail_extract: false,
            },
        );

        let path = engine.run().await.unwrap();

        assert_eq!(path, "output/out.csv");
        assert_eq!(engine.pipeline.loads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_run_stops_on_extract_failure() {
        let engine = GenerationEngine::new(
            "failing",
            CountingPipeline {
                loads: AtomicUsize::new(0),
                fail_extract: true,
            },
        );

        assert!(engine.run().await.is_err());
        assert_eq!(engine.pipeline.loads.load(Ordering::SeqCst), 0);
    }
}
