use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::exit_code;
use super::signal::Signal;
use super::step::StepFailure;

/// Library-wide error type for installer operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure outside of a step.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// An installation step did not complete.
    #[error("{description}: {reason}")]
    StepFailed { description: String, reason: StepFailure },

    /// A termination signal arrived while the installation was running.
    #[error("interrupted by signal {}", .0.number())]
    Interrupted(Signal),

    /// Effective user lacks the privileges the installation needs.
    #[error("{0}")]
    PermissionDenied(String),

    /// A program required before the first step is missing.
    #[error("Required program '{0}' was not found on PATH")]
    ProgramUnavailable(String),

    /// A file required before the first step is missing.
    #[error("Required file {} does not exist", .0.display())]
    FileUnavailable(PathBuf),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Process exit code reported for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::StepFailed { .. } => exit_code::STEP_FAILED,
            AppError::Interrupted(signal) => signal.exit_code(),
            AppError::PermissionDenied(_) => exit_code::NO_PERMISSION,
            AppError::ProgramUnavailable(_) | AppError::FileUnavailable(_) => {
                exit_code::UNAVAILABLE
            }
            AppError::Configuration(_) | AppError::TomlParseError(_) => exit_code::USAGE,
            AppError::Io(_) => exit_code::OS_ERROR,
        }
    }
}
