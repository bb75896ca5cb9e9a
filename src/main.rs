use clap::Parser;
use nl_testdata::core::Pipeline;
use nl_testdata::utils::error::ErrorSeverity;
use nl_testdata::utils::logger;
use nl_testdata::{
    BsnFixturePipeline, BsnValidator, CliConfig, Command, DownloadPipeline, GenerationEngine,
    GeneratorSettings, LocalStorage, NoopTelemetry, PersonenPipeline, RngDigitSource,
    TestDataError, TracingTelemetry, Workspace,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    let settings = match cli.settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let workspace = match Workspace::prepare(&settings.root_dir) {
        Ok(workspace) => workspace,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(exit_code(e.severity()));
        }
    };

    if cli.json_log {
        logger::init_json_logger(&workspace.log_file())?;
    } else {
        logger::init_cli_logger(cli.verbose, &workspace.log_file())?;
    }

    tracing::info!("Starting nl-testdata in {}", workspace.root().display());
    tracing::debug!("Settings: {}", serde_json::to_string(&settings)?);

    let failures = match &cli.command {
        Command::Validate { bsn } => return validate_bsn(bsn),
        Command::Generate { number } => return generate_bsns(&settings, *number),
        Command::Personen => vec![personen(&settings, &workspace).await],
        Command::Download => vec![download(&settings, &workspace).await],
        Command::BsnBestand => vec![bsn_bestand(&settings, &workspace).await],
        Command::All => vec![
            personen(&settings, &workspace).await,
            download(&settings, &workspace).await,
            bsn_bestand(&settings, &workspace).await,
        ],
    };

    let worst = failures.into_iter().flatten().max();
    if let Some(severity) = worst {
        let code = exit_code(severity);
        if code > 0 {
            std::process::exit(code);
        }
    }

    Ok(())
}

fn validate_bsn(bsn: &str) -> Result<(), Box<dyn std::error::Error>> {
    let validator = BsnValidator::with_telemetry(TracingTelemetry);
    match validator.validate(bsn) {
        Ok(true) => {
            println!("✅ {} passes the 11-proef", bsn);
            Ok(())
        }
        Ok(false) => {
            println!("❌ {} fails the 11-proef", bsn);
            std::process::exit(1);
        }
        Err(e) => {
            report(&e);
            std::process::exit(1);
        }
    }
}

fn generate_bsns(
    settings: &GeneratorSettings,
    number: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let seed = settings.seed.unwrap_or_else(rand::random);
    tracing::debug!("Generating {} BSN(s) with seed {}", number, seed);

    let validator = BsnValidator::new().with_max_attempts(settings.max_bsn_attempts);
    let mut source = RngDigitSource::new(ChaCha8Rng::seed_from_u64(seed));
    for _ in 0..number {
        match validator.generate(&mut source) {
            Ok(bsn) => println!("{}", bsn),
            Err(e) => {
                report(&e);
                std::process::exit(exit_code(e.severity()));
            }
        }
    }
    Ok(())
}

async fn personen(settings: &GeneratorSettings, workspace: &Workspace) -> Option<ErrorSeverity> {
    let storage = LocalStorage::new(workspace.output_dir());
    match PersonenPipeline::new(storage, settings.clone(), NoopTelemetry) {
        Ok(pipeline) => run(GenerationEngine::new("personen", pipeline)).await,
        Err(e) => Some(report(&e)),
    }
}

async fn download(settings: &GeneratorSettings, workspace: &Workspace) -> Option<ErrorSeverity> {
    let storage = LocalStorage::new(workspace.output_dir());
    match DownloadPipeline::new(storage, settings.clone()) {
        Ok(pipeline) => run(GenerationEngine::new("testpersonen download", pipeline)).await,
        Err(e) => Some(report(&e)),
    }
}

async fn bsn_bestand(settings: &GeneratorSettings, workspace: &Workspace) -> Option<ErrorSeverity> {
    let storage = LocalStorage::new(workspace.output_dir());
    let pipeline = BsnFixturePipeline::new(storage, settings.clone(), TracingTelemetry);
    run(GenerationEngine::new("bsn testbestand", pipeline)).await
}

/// Runs one engine; a failure is logged and handed back as its severity so
/// the remaining steps still run.
async fn run<P: Pipeline>(engine: GenerationEngine<P>) -> Option<ErrorSeverity> {
    match engine.run().await {
        Ok(output_path) => {
            println!("📁 {} saved to: {}", engine.name(), output_path);
            None
        }
        Err(e) => Some(report(&e)),
    }
}

fn report(e: &TestDataError) -> ErrorSeverity {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    e.severity()
}

fn exit_code(severity: ErrorSeverity) -> i32 {
    match severity {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}
