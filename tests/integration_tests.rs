use anyhow::Result;
use httpmock::prelude::*;
use nl_testdata::{
    BsnFixturePipeline, BsnValidator, DownloadPipeline, GenerationEngine, GeneratorSettings,
    LocalStorage, NoopTelemetry, PersonenPipeline, TestDataError, Workspace,
};
use tempfile::TempDir;

fn settings_for(temp_dir: &TempDir, endpoint: String) -> GeneratorSettings {
    GeneratorSettings {
        root_dir: temp_dir.path().to_str().unwrap().to_string(),
        record_count: 8,
        seed: Some(2024),
        download_endpoint: endpoint,
        request_timeout_secs: 5,
        max_bsn_attempts: 1000,
    }
}

#[tokio::test]
async fn test_end_to_end_personen_file() {
    let temp_dir = TempDir::new().unwrap();
    let workspace = Workspace::prepare(temp_dir.path()).unwrap();
    let settings = settings_for(&temp_dir, "https://randomuser.me/api/".to_string());

    let storage = LocalStorage::new(workspace.output_dir());
    let pipeline = PersonenPipeline::new(storage, settings, NoopTelemetry).unwrap();
    let engine = GenerationEngine::new("personen", pipeline);

    let output_path = engine.run().await.unwrap();
    assert!(output_path.ends_with("personen.csv"));

    let mut reader = csv::Reader::from_path(workspace.output_dir().join("personen.csv")).unwrap();
    let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(
        headers,
        vec!["voornaam", "achternaam", "geboortedatum", "bsn", "email", "telefoon", "postcode"]
    );

    let validator = BsnValidator::new();
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 8);
    for row in &rows {
        let bsn = &row[3];
        assert_eq!(bsn.len(), 9);
        assert!(validator.validate(bsn).unwrap());
        assert!(row[5].starts_with("06-"));
        assert!(row[4].contains('@'));
    }
}

#[tokio::test]
async fn test_end_to_end_download_with_mock_server() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let workspace = Workspace::prepare(temp_dir.path())?;

    let server = MockServer::start();
    let body = "gender,name.first,name.last,id.name,id.value,nat\n\
female,Sanne,Visser,BSN,12345678,NL\n";
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/")
            .query_param("results", "8")
            .query_param("nat", "NL");
        then.status(200).header("Content-Type", "text/csv").body(body);
    });

    let settings = settings_for(&temp_dir, server.url("/api/"));
    let storage = LocalStorage::new(workspace.output_dir());
    let pipeline = DownloadPipeline::new(storage, settings)?;

    let output_path = GenerationEngine::new("download", pipeline).run().await?;

    api_mock.assert();
    assert!(output_path.ends_with("testpersonen.csv"));
    let written = std::fs::read_to_string(workspace.output_dir().join("testpersonen.csv"))?;
    assert_eq!(written, body);
    Ok(())
}

#[tokio::test]
async fn test_download_failure_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let workspace = Workspace::prepare(temp_dir.path()).unwrap();

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/api/");
        then.status(500);
    });

    let settings = settings_for(&temp_dir, server.url("/api/"));
    let pipeline =
        DownloadPipeline::new(LocalStorage::new(workspace.output_dir()), settings).unwrap();

    let result = GenerationEngine::new("download", pipeline).run().await;

    api_mock.assert();
    assert!(matches!(
        result,
        Err(TestDataError::DownloadStatus { status: 500, .. })
    ));
    assert!(!workspace.output_dir().join("testpersonen.csv").exists());
}

#[tokio::test]
async fn test_failed_download_does_not_block_other_files() {
    let temp_dir = TempDir::new().unwrap();
    let workspace = Workspace::prepare(temp_dir.path()).unwrap();

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/");
        then.status(502);
    });
    let settings = settings_for(&temp_dir, server.url("/api/"));

    let download = DownloadPipeline::new(
        LocalStorage::new(workspace.output_dir()),
        settings.clone(),
    )
    .unwrap();
    let fixture = BsnFixturePipeline::new(
        LocalStorage::new(workspace.output_dir()),
        settings,
        NoopTelemetry,
    );

    assert!(GenerationEngine::new("download", download).run().await.is_err());
    assert!(GenerationEngine::new("fixture", fixture).run().await.is_ok());

    let fixture_csv =
        std::fs::read_to_string(workspace.output_dir().join("bsn_testbestand.csv")).unwrap();
    assert!(fixture_csv.starts_with("bsn,geldig\n"));
    assert_eq!(fixture_csv.lines().count(), 17);
}
