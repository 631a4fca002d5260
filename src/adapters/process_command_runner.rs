use std::os::unix::process::ExitStatusExt;
use std::path::Path;

use tokio::process::Command;
use tracing::debug;

use crate::domain::{CommandStatus, EnvOverlay, Invocation, StepFailure};
use crate::ports::CommandRunner;

/// Runs steps as real child processes with inherited stdio.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessCommandRunner;

impl ProcessCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for ProcessCommandRunner {
    async fn run(
        &self,
        invocation: &Invocation,
        cwd: &Path,
        env: &EnvOverlay,
    ) -> Result<CommandStatus, StepFailure> {
        debug!(command = %invocation, cwd = %cwd.display(), "spawning subprocess");

        let mut command = Command::new(&invocation.program);
        command.args(&invocation.args).current_dir(cwd).kill_on_drop(true);
        for (key, value) in &env.set {
            command.env(key, value);
        }
        for key in &env.remove {
            command.env_remove(key);
        }

        let status = command.status().await.map_err(|e| StepFailure::Spawn {
            program: invocation.program.clone(),
            details: e.to_string(),
        })?;

        let outcome = match status.code() {
            Some(code) => CommandStatus::Exited(code),
            None => CommandStatus::Signaled(status.signal().unwrap_or_default()),
        };
        debug!(command = %invocation, ?outcome, "subprocess finished");
        Ok(outcome)
    }
}
