use std::future::Future;
use std::path::Path;

use crate::domain::{CommandStatus, EnvOverlay, Invocation, StepFailure};

pub trait CommandRunner {
    /// Run `invocation` in `cwd` with `env` applied on top of the inherited
    /// environment, waiting for it to finish.
    ///
    /// Dropping the returned future must stop the subprocess.
    fn run(
        &self,
        invocation: &Invocation,
        cwd: &Path,
        env: &EnvOverlay,
    ) -> impl Future<Output = Result<CommandStatus, StepFailure>>;
}
