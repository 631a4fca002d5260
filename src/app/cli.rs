//! CLI Adapter.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use super::install::{InstallOptions, install};
use super::reporter::Reporter;
use crate::adapters::TerminalState;
use crate::domain::{AppError, exit_code};

const DEFAULT_PROGRAM_NAME: &str = "install-mitmf";

#[derive(Parser)]
#[command(name = "install-mitmf")]
#[command(version)]
#[command(
    about = "Install the MITMf toolkit into an isolated environment",
    long_about = None
)]
struct Cli {
    /// Installation settings (TOML); built-in defaults when omitted
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Print the installation steps without running them
    #[arg(long)]
    dry_run: bool,
}

/// Entry point for the CLI. Returns the process exit code.
pub fn run() -> i32 {
    init_tracing();
    let cli = Cli::parse();
    let options = InstallOptions { config_path: cli.config, dry_run: cli.dry_run };
    let mut reporter = Reporter::stdio(program_name(std::env::args_os().next()));
    let terminal = TerminalState::capture();

    let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            reporter.error(&format!("Failed to start async runtime: {}", e));
            return exit_code::OS_ERROR;
        }
    };
    let result = runtime.block_on(install(&options, &mut reporter));
    // An abandoned confirmation prompt may still occupy a blocking thread.
    runtime.shutdown_background();

    if let (Err(AppError::Interrupted(_)), Some(terminal)) = (&result, &terminal)
        && let Err(e) = terminal.restore()
    {
        warn!(error = %e, "failed to restore terminal settings");
    }

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(err) => {
            if !matches!(err, AppError::StepFailed { .. } | AppError::Interrupted(_)) {
                reporter.error(&err.to_string());
            }
            err.exit_code()
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Basename of the invoked executable.
fn program_name(argv0: Option<OsString>) -> String {
    argv0
        .as_deref()
        .map(Path::new)
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_PROGRAM_NAME.to_string())
}
