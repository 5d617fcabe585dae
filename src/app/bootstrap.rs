use std::fs::OpenOptions;
use std::path::Path;

use log::{info, SetLoggerError};

use crate::app::controller::AppController;
use crate::app::state::ShowcaseState;
use crate::config::load_config;
use crate::error::{Context, Result};
use crate::records::Workspace;

/// Entry point used by `main` to bootstrap the controller stack.
pub async fn run() -> Result<()> {
    let root = std::env::current_dir().context("Failed to resolve working directory")?;
    let config = load_config(&root)?;

    let workspace = Workspace::from_config(&root, &config);
    workspace.prepare()?;
    if let Err(err) = init_logging(&config.paths.log_file()) {
        eprintln!("Logger not installed: {}", err);
    }
    info!(
        "Starting Data Showcase in {} (users endpoint {})",
        root.display(),
        config.api.users_endpoint
    );

    let state = ShowcaseState::new(config, workspace)?;
    AppController::new(state).run().await
}

/// Log to `log_file` so the alternate screen stays clean; stderr if it cannot be opened.
/// Fails when a global logger is already installed.
fn init_logging(log_file: &Path) -> std::result::Result<(), SetLoggerError> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    match OpenOptions::new().create(true).append(true).open(log_file) {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(err) => eprintln!(
            "Cannot open log file {}: {}. Logging to stderr.",
            log_file.display(),
            err
        ),
    }
    builder.try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_logger_install_is_reported() {
        let dir = std::env::temp_dir().join(format!("data-showcase-log-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("create log dir");
        let log_file = dir.join("showcase.log");

        // The first call may win or lose against another installer; the second always loses.
        let _ = init_logging(&log_file);
        assert!(init_logging(&log_file).is_err());
        assert!(log_file.is_file());
    }
}
