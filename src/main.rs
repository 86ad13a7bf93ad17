use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use cleangrid::application::services::SessionStore;
use cleangrid::domain::ports::SessionStoragePort;
use cleangrid::infrastructure::{
    ApiClient, AppConfig, CliArgs, FileSessionStorage, KeyringSessionStorage, SessionBackend,
    StorageManager,
};
use cleangrid::presentation::{App, Backend, Prompter, Renderer};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn session_storage(config: &AppConfig, storage: &StorageManager) -> Arc<dyn SessionStoragePort> {
    match config.session_backend {
        SessionBackend::Keyring if KeyringSessionStorage::SUPPORTED => {
            Arc::new(KeyringSessionStorage::new())
        }
        SessionBackend::Keyring => {
            warn!("Built without keyring support, keeping the session in a file");
            Arc::new(FileSessionStorage::in_dir(storage.data_dir()))
        }
        SessionBackend::File => Arc::new(FileSessionStorage::in_dir(storage.data_dir())),
    }
}

async fn run() -> Result<bool> {
    let args = CliArgs::parse();

    let storage = StorageManager::new()?;
    let mut config = storage.load_config(args.config.as_deref())?;
    config.merge_with_args(&args);

    init_logging(&config)?;
    info!(version = cleangrid::VERSION, api = %config.api_url, "Starting cleangrid");

    let renderer = Renderer::new(&config.display);
    let store = Arc::new(SessionStore::new());
    let client = ApiClient::new(&config.api_url, config.request_timeout(), store.clone())?;
    let mut app = App::new(
        Backend::from_client(&client),
        session_storage(&config, &storage),
        store,
        renderer.clone(),
    );

    app.hydrate(config.revalidate_on_launch).await;

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    app.run(args.command, &mut prompter).await?;

    let mut stderr = io::stderr().lock();
    for notice in app.take_notices() {
        stderr.write_all(renderer.notice(&notice).as_bytes())?;
    }

    Ok(!app.failed())
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    if run().await? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
