use super::{parse_csv, render_csv};
use crate::core::{ConfigProvider, Dataset, Pipeline, Storage, TransformResult};
use crate::utils::error::{Result, TestDataError};
use reqwest::Client;
use std::time::Duration;

pub const TESTPERSONEN_FILE: &str = "testpersonen.csv";

/// Downloads Dutch sample persons as CSV from a randomuser.me compatible API.
pub struct DownloadPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
}

impl<S: Storage, C: ConfigProvider> DownloadPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs()))
            .build()?;
        Ok(Self {
            storage,
            config,
            client,
        })
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for DownloadPipeline<S, C> {
    async fn extract(&self) -> Result<Dataset> {
        let url = self.config.download_endpoint();
        let results = self.config.record_count().to_string();
        tracing::info!("Downloading {} test persons from {}", results, url);

        let response = self
            .client
            .get(url)
            .query(&[
                ("results", results.as_str()),
                ("format", "csv"),
                ("nat", "NL"),
            ])
            .send()
            .await?;

        tracing::debug!("API response status: {}", response.status());

        let status = response.status();
        if !status.is_success() {
            return Err(TestDataError::DownloadStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        parse_csv(&body)
    }

    async fn transform(&self, data: Dataset) -> Result<TransformResult> {
        if data.len() != self.config.record_count() {
            tracing::warn!(
                "Requested {} persons but received {}",
                self.config.record_count(),
                data.len()
            );
        }

        let csv_output = render_csv(&data)?;
        Ok(TransformResult {
            file_name: TESTPERSONEN_FILE.to_string(),
            dataset: data,
            csv_output,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        self.storage
            .write_file(&result.file_name, result.csv_output.as_bytes())
            .await?;

        let path = self.config.output_dir().join(&result.file_name);
        tracing::info!("Test persons saved to {}", path.display());
        Ok(path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipelines::test_support::{MockConfig, MockStorage};
    use httpmock::prelude::*;

    const SAMPLE_CSV: &str = "gender,name.title,name.first,name.last,nat\n\
female,Mrs,Anna,de Vries,NL\n\
male,Mr,Daan,Bakker,NL\n";

    #[tokio::test]
    async fn test_extract_sends_expected_query() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/")
                .query_param("results", "2")
                .query_param("format", "csv")
                .query_param("nat", "NL");
            then.status(200)
                .header("Content-Type", "text/csv")
                .body(SAMPLE_CSV);
        });

        let mut config = MockConfig::new(server.url("/api/"));
        config.record_count = 2;
        let pipeline = DownloadPipeline::new(MockStorage::new(), config).unwrap();

        let dataset = pipeline.extract().await.unwrap();

        api_mock.assert();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.headers[2], "name.first");
        assert_eq!(dataset.rows[0][2], "Anna");
        assert_eq!(dataset.rows[1][3], "Bakker");
    }

    #[tokio::test]
    async fn test_extract_error_status() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/api/");
            then.status(503);
        });

        let pipeline =
            DownloadPipeline::new(MockStorage::new(), MockConfig::new(server.url("/api/"))).unwrap();

        let err = pipeline.extract().await.unwrap_err();

        api_mock.assert();
        assert!(matches!(err, TestDataError::DownloadStatus { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_extract_unreachable_host_is_api_error() {
        let pipeline = DownloadPipeline::new(
            MockStorage::new(),
            MockConfig::new("http://127.0.0.1:1/api/".to_string()),
        )
        .unwrap();

        let err = pipeline.extract().await.unwrap_err();

        assert!(matches!(err, TestDataError::ApiError(_)));
    }

    #[tokio::test]
    async fn test_full_run_writes_file() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/");
            then.status(200).body(SAMPLE_CSV);
        });

        let storage = MockStorage::new();
        let mut config = MockConfig::new(server.url("/api/"));
        config.record_count = 2;
        let pipeline = DownloadPipeline::new(storage.clone(), config).unwrap();

        let dataset = pipeline.extract().await.unwrap();
        let result = pipeline.transform(dataset).await.unwrap();
        let path = pipeline.load(result).await.unwrap();

        assert!(path.ends_with(TESTPERSONEN_FILE));
        let written = storage.get_file(TESTPERSONEN_FILE).await.unwrap();
        assert_eq!(String::from_utf8(written).unwrap(), SAMPLE_CSV);
    }
}
