use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::app::InterruptSender;
use crate::domain::{CommandStatus, EnvOverlay, Invocation, Signal, StepFailure};
use crate::ports::CommandRunner;

type Effect = Box<dyn Fn(&Invocation, &Path) + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCommand {
    pub command: String,
    pub cwd: PathBuf,
    pub virtual_env: Option<OsString>,
}

/// Records invocations; commands succeed unless scripted otherwise.
/// Scripts match on a prefix of the rendered command line.
#[derive(Default)]
pub struct FakeCommandRunner {
    recorded: Mutex<Vec<RecordedCommand>>,
    exit_codes: Vec<(String, i32)>,
    effects: Vec<(String, Effect)>,
    interrupts: Vec<(String, InterruptSender, Signal)>,
}

impl FakeCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exit_with<S: Into<String>>(mut self, prefix: S, code: i32) -> Self {
        self.exit_codes.push((prefix.into(), code));
        self
    }

    /// Run `effect` when a matching command is invoked, before it "exits".
    pub fn on_command<S, F>(mut self, prefix: S, effect: F) -> Self
    where
        S: Into<String>,
        F: Fn(&Invocation, &Path) + Send + Sync + 'static,
    {
        self.effects.push((prefix.into(), Box::new(effect)));
        self
    }

    /// Deliver `signal` when a matching command starts, then never finish.
    pub fn interrupt_on<S: Into<String>>(
        mut self,
        prefix: S,
        sender: InterruptSender,
        signal: Signal,
    ) -> Self {
        self.interrupts.push((prefix.into(), sender, signal));
        self
    }

    pub fn recorded(&self) -> Vec<RecordedCommand> {
        self.recorded.lock().unwrap().clone()
    }
}

impl CommandRunner for FakeCommandRunner {
    async fn run(
        &self,
        invocation: &Invocation,
        cwd: &Path,
        env: &EnvOverlay,
    ) -> Result<CommandStatus, StepFailure> {
        let line = invocation.to_string();
        self.recorded.lock().unwrap().push(RecordedCommand {
            command: line.clone(),
            cwd: cwd.to_path_buf(),
            virtual_env: env.get("VIRTUAL_ENV").map(OsStr::to_os_string),
        });

        let interrupt =
            self.interrupts.iter().find(|(prefix, _, _)| line.starts_with(prefix.as_str()));
        if let Some((_, sender, signal)) = interrupt {
            let _ = sender.send(*signal);
            std::future::pending::<()>().await;
        }

        for (prefix, effect) in &self.effects {
            if line.starts_with(prefix.as_str()) {
                effect(invocation, cwd);
            }
        }

        let code = self
            .exit_codes
            .iter()
            .find(|(prefix, _)| line.starts_with(prefix.as_str()))
            .map_or(0, |(_, code)| *code);
        Ok(CommandStatus::Exited(code))
    }
}
