//! Installation steps and the actions they perform.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// A subprocess to run in the current working context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new<P, I, S>(program: P, args: I) -> Self
    where
        P: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { program: program.into(), args: args.into_iter().map(Into::into).collect() }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Unit of work performed by a step.
///
/// Relative paths are resolved against the working context at the time the
/// action runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Run a subprocess; a zero exit status is success.
    Run(Invocation),
    /// Create the installation root. An existing directory is only replaced
    /// after the operator confirms its removal.
    CreateInstallDir(PathBuf),
    /// Switch the working context for later actions.
    ChangeDir(PathBuf),
    /// Activate the isolated environment rooted at the path.
    ActivateEnv(PathBuf),
    /// Deactivate the active isolated environment.
    DeactivateEnv,
    /// Create a directory and any missing parents.
    CreateDir(PathBuf),
    /// Copy a file, asking before overwriting an existing target.
    CopyFile { from: PathBuf, to: PathBuf },
    /// Write `contents` to a file, asking before overwriting an existing target.
    WriteFile { contents: String, to: PathBuf },
    /// Set a file's mode to `rwxr-xr-x`.
    MakeExecutable(PathBuf),
    /// Create `link` pointing at `target`, asking before replacing an existing link.
    Symlink { target: PathBuf, link: PathBuf },
    /// Perform actions in order, stopping at the first failure.
    Sequence(Vec<Action>),
}

impl Action {
    /// Leaf actions in execution order, with nested sequences expanded.
    pub fn leaves(&self) -> Vec<&Action> {
        match self {
            Action::Sequence(actions) => actions.iter().flat_map(Action::leaves).collect(),
            other => vec![other],
        }
    }
}

/// A named, ordered unit of installation work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub description: String,
    pub action: Action,
}

impl Step {
    pub fn new<S: Into<String>>(description: S, action: Action) -> Self {
        Self { description: description.into(), action }
    }
}

/// How a subprocess finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    Exited(i32),
    Signaled(i32),
}

impl CommandStatus {
    pub fn success(self) -> bool {
        matches!(self, CommandStatus::Exited(0))
    }
}

/// Reason a step did not complete.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepFailure {
    #[error("exited with status {0}")]
    ExitStatus(i32),

    #[error("terminated by signal {0}")]
    KilledBySignal(i32),

    #[error("failed to start '{program}': {details}")]
    Spawn { program: String, details: String },

    #[error("cannot {operation} {path}: {details}")]
    Filesystem { operation: &'static str, path: String, details: String },

    #[error("removal of {0} was declined")]
    Declined(String),

    #[error("{0} is not an isolated environment (missing bin/)")]
    NotAnEnvironment(String),

    #[error("no isolated environment is active")]
    NoActiveEnvironment,

    #[error("confirmation prompt failed: {0}")]
    Prompt(String),
}

impl From<CommandStatus> for StepFailure {
    fn from(status: CommandStatus) -> Self {
        match status {
            CommandStatus::Exited(code) => StepFailure::ExitStatus(code),
            CommandStatus::Signaled(signal) => StepFailure::KilledBySignal(signal),
        }
    }
}
