mod cli;

use cli::{Args, Command};
use dependency_analytics::adapters::inbound::EventReader;
use dependency_analytics::adapters::outbound::console::{AnalysisSpinner, ConsoleWarningNotifier};
use dependency_analytics::adapters::outbound::filesystem::{
    FileSystemManifestReader, FileSystemWriter, StdoutPresenter,
};
use dependency_analytics::adapters::outbound::json_lines::JsonLinesPublisher;
use dependency_analytics::adapters::outbound::process::ProcessScanningEngine;
use dependency_analytics::analysis::domain::ManifestKind;
use dependency_analytics::application::dispatch::{FileRouter, TriggerController};
use dependency_analytics::application::dto::{AnalysisRequest, SettingsStore};
use dependency_analytics::application::use_cases::{
    register_manifest_handlers, AnalysisTracker, ComponentAnalysisUseCase,
};
use dependency_analytics::config::{self, ServerConfig};
use dependency_analytics::ports::outbound::{DiagnosticsSink, ManifestReader, OutputPresenter};
use dependency_analytics::shared::error::{AnalysisError, ExitCode};
use dependency_analytics::shared::Result;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "DEPENDENCY_ANALYTICS_LOG";

#[tokio::main]
async fn main() {
    let args = Args::parse_args();
    init_tracing();

    if let Err(e) = run(args).await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

/// Logs go to stderr; stdout carries reports and JSON lines only
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(args: Args) -> Result<()> {
    let mut config = resolve_config(args.config.as_deref())?;
    if let Some(program) = args.engine.as_deref() {
        config.override_engine_program(program);
        config::validate_config(&config)?;
    }

    match args.command {
        Command::Analyze { manifest, output } => analyze(&config, &manifest, output).await,
        Command::Serve => serve(config).await,
    }
}

fn resolve_config(explicit: Option<&Path>) -> Result<ServerConfig> {
    if let Some(path) = explicit {
        return config::load_config_from_path(path);
    }
    let cwd = std::env::current_dir()?;
    Ok(config::discover_config(&cwd)?.unwrap_or_default())
}

fn scanning_engine(config: &ServerConfig) -> ProcessScanningEngine {
    ProcessScanningEngine::new(config.engine.program.clone(), config.engine.args.clone())
        .with_timeout(config.engine_timeout())
}

async fn analyze(config: &ServerConfig, manifest: &Path, output: Option<PathBuf>) -> Result<()> {
    let contents = FileSystemManifestReader::new().read_manifest(manifest)?;
    let kind = manifest
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(ManifestKind::from_file_name)
        .ok_or_else(|| AnalysisError::UnsupportedManifest {
            path: manifest.to_path_buf(),
        })?;

    let notifier = if std::io::stderr().is_terminal() {
        ConsoleWarningNotifier::new()
    } else {
        ConsoleWarningNotifier::plain()
    };
    let use_case = ComponentAnalysisUseCase::new(scanning_engine(config), notifier, config.identity());
    let request = AnalysisRequest::new(kind.file_type(), contents);

    let spinner = AnalysisSpinner::start(format!("🔍 Analyzing {} dependencies...", kind.ecosystem()));
    let response = match use_case.execute(&request, &config.settings).await {
        Ok(response) => response,
        Err(e) => {
            spinner.clear();
            return Err(e);
        }
    };
    spinner.finish(&format!(
        "✅ {} dependencies with reported issues ({} issues total)",
        response.dependencies.len(),
        response.dependencies.total_issues()
    ));

    let presenter: Box<dyn OutputPresenter> = match output {
        Some(path) => Box::new(FileSystemWriter::new(path)),
        None => Box::new(StdoutPresenter::new()),
    };
    let mut rendered = serde_json::to_string_pretty(&response)?;
    rendered.push('\n');
    presenter.present(&rendered)
}

async fn serve(config: ServerConfig) -> Result<()> {
    let publisher = Arc::new(JsonLinesPublisher::new(std::io::stdout()));
    let settings = Arc::new(SettingsStore::new(config.settings.clone()));
    let tracker = Arc::new(AnalysisTracker::new());
    let use_case = Arc::new(ComponentAnalysisUseCase::new(
        scanning_engine(&config),
        Arc::clone(&publisher),
        config.identity(),
    ));

    let sink: Arc<dyn DiagnosticsSink> = publisher;
    let router = register_manifest_handlers(
        FileRouter::new(),
        use_case,
        Arc::clone(&settings),
        sink,
        Arc::clone(&tracker),
    )?;
    let controller = TriggerController::new(
        Arc::new(router),
        config.debounce_delay(),
        config.debounce_scope,
    )?;

    tracing::info!(
        engine = %config.engine.program,
        delay_ms = config.debounce_delay_ms,
        scope = ?config.debounce_scope,
        "serving editor events on stdin"
    );

    let applied = EventReader::new(BufReader::new(tokio::io::stdin()))
        .run(&controller, &settings)
        .await?;

    // Pending triggers die with the controller; analyses already running are
    // allowed to publish.
    drop(controller);
    tracker.wait_idle().await;

    tracing::info!(applied, "editor event stream finished");
    Ok(())
}
