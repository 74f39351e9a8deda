pub mod application;
pub mod cli;
pub mod config;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod tui;

pub use application::{DispatchController, SubmitOutcome, UiContext};
pub use cli::{Cli, RunMode};
pub use config::{AppConfig, TransportConfig};
pub use domain::types;
pub use infrastructure::model;

use infrastructure::model::{GeminiClient, ReplySource};
use std::error::Error;
use std::fs::File;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

pub async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    init_tracing(cli.log_file.as_deref())?;
    info!("Starting gemini-chat");
    debug!(
        mode = ?cli.mode,
        config = ?cli.config,
        model = ?cli.model,
        "CLI arguments parsed"
    );

    let config_path = match cli.config.as_deref() {
        Some(raw) => Some(PathBuf::from(shellexpand::tilde(raw).as_ref())),
        None => None,
    };
    let mut app_config = AppConfig::load(config_path.as_deref())?;
    if let Some(path) = &config_path {
        info!(path = %path.display(), "Loaded configuration from file");
    } else {
        info!("Loaded configuration from default path");
    }
    apply_cli_overrides(&cli, &mut app_config.transport);

    if app_config.transport.request_timeout.is_none() {
        warn!("No transport.request_timeout_secs set; a stalled request will keep the input disabled");
    }

    let client = GeminiClient::from_config(&app_config.transport);
    if !client.has_api_key() {
        warn!(
            env_var = %app_config.transport.api_key_env,
            "No API key available; every reply will be the fallback message"
        );
    }
    let model = client.model().to_string();

    info!(mode = ?cli.mode, model = %model, "Running in selected mode");
    match cli.mode {
        RunMode::Chat => {
            tui::install_panic_hook();
            let controller =
                DispatchController::new(Arc::new(client), UiContext::new(), app_config.timing);
            let result = tui::screens::run_chat(controller, app_config.ui, &model).await?;
            info!(messages = result.transcript.len(), "Chat closed");
        }
        RunMode::Once => {
            let prompt = cli.prompt.join(" ");
            let prompt = prompt.trim();
            if prompt.is_empty() {
                return Err("--mode once needs a prompt".into());
            }
            let reply = client.generate_reply(prompt).await;
            println!("{}", reply);
        }
    }
    info!("gemini-chat finished");
    Ok(())
}

/// Logs go to `log_file` when given. The chat screen owns the terminal, so
/// without a file logging is switched off.
fn init_tracing(log_file: Option<&str>) -> Result<(), Box<dyn Error>> {
    static INIT: std::sync::Once = std::sync::Once::new();
    let writer = match log_file {
        Some(path) => Some(File::create(shellexpand::tilde(path).as_ref())?),
        None => None,
    };
    INIT.call_once(|| match writer {
        Some(file) => {
            let filter =
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
            fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_level(true)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            fmt()
                .with_env_filter(EnvFilter::new("off"))
                .with_target(false)
                .init();
        }
    });
    Ok(())
}

fn apply_cli_overrides(cli: &Cli, transport: &mut TransportConfig) {
    if let Some(model) = cli.model.as_deref().map(str::trim).filter(|m| !m.is_empty()) {
        if transport.model != model {
            info!(
                from = %transport.model,
                to = %model,
                "Overriding model based on CLI flag"
            );
        }
        transport.model = model.to_string();
    }
}
