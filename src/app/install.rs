//! Installation entry point: configuration, plan, preflight, sequencer.

use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;

use super::executor::StepExecutor;
use super::preflight;
use super::reporter::Reporter;
use super::sequencer::Sequencer;
use crate::adapters::{DialoguerConfirmer, LocalSystem, ProcessCommandRunner, unix_signals};
use crate::domain::config::parse_config_content;
use crate::domain::{AppError, InstallConfig, WrapperSource, installation_plan, render_wrapper};

#[derive(Debug, Clone, Default)]
pub struct InstallOptions {
    /// TOML configuration file; built-in defaults when absent.
    pub config_path: Option<PathBuf>,
    /// Print the plan instead of executing it.
    pub dry_run: bool,
}

/// Load configuration from `path`, or the built-in defaults.
pub fn load_config(path: Option<&Path>) -> Result<InstallConfig, AppError> {
    let Some(path) = path else {
        return Ok(InstallConfig::default());
    };
    let content = fs::read_to_string(path).map_err(|e| {
        AppError::config_error(format!("Failed to read config {}: {}", path.display(), e))
    })?;
    parse_config_content(&content)
}

/// Wrapper script to install: the configured file, or the built-in launcher
/// rendered for the configured layout.
pub fn wrapper_source(config: &InstallConfig) -> Result<WrapperSource, AppError> {
    match &config.wrapper.source {
        Some(source) if source.is_absolute() => Ok(WrapperSource::File(source.clone())),
        Some(source) => Ok(WrapperSource::File(env::current_dir()?.join(source))),
        None => Ok(WrapperSource::Rendered(render_wrapper(config)?)),
    }
}

/// Run the installation, reporting progress through `reporter`.
///
/// Step failures and interruptions are reported before returning; other
/// errors are left to the caller.
pub async fn install<O: Write, E: Write>(
    options: &InstallOptions,
    reporter: &mut Reporter<O, E>,
) -> Result<(), AppError> {
    let config = load_config(options.config_path.as_deref())?;
    let wrapper = wrapper_source(&config)?;
    let steps = installation_plan(&config, &wrapper);

    if options.dry_run {
        for (index, step) in steps.iter().enumerate() {
            reporter.planned(index + 1, &step.description);
        }
        return Ok(());
    }

    preflight::check(&config, &wrapper, &LocalSystem)?;

    let mut interrupts = unix_signals::listen()?;
    info!(
        install_dir = %config.install.dir.display(),
        steps = steps.len(),
        "starting installation"
    );

    let executor = StepExecutor::new(
        ProcessCommandRunner::new(),
        Arc::new(DialoguerConfirmer),
        env::current_dir()?,
    );
    let mut sequencer = Sequencer::new(executor, reporter);
    sequencer.run(&steps, &mut interrupts).await
}
