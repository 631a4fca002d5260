//! Performs step actions against the host.

use std::env;
use std::fs;
use std::io::{self, Write};
use std::os::unix::fs::{PermissionsExt, symlink};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use super::reporter::Reporter;
use crate::domain::{Action, Invocation, IsolatedEnvironment, StepFailure};
use crate::ports::{CommandRunner, Confirmer};

/// Executes actions while tracking the working context and environment
/// activation carried between steps.
pub struct StepExecutor<R: CommandRunner> {
    runner: R,
    confirmer: Arc<dyn Confirmer>,
    cwd: PathBuf,
    environment: IsolatedEnvironment,
}

impl<R: CommandRunner> StepExecutor<R> {
    pub fn new(runner: R, confirmer: Arc<dyn Confirmer>, cwd: PathBuf) -> Self {
        Self { runner, confirmer, cwd, environment: IsolatedEnvironment::default() }
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn environment(&self) -> &IsolatedEnvironment {
        &self.environment
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub async fn execute<O: Write, E: Write>(
        &mut self,
        action: &Action,
        reporter: &mut Reporter<O, E>,
    ) -> Result<(), StepFailure> {
        for leaf in action.leaves() {
            self.execute_leaf(leaf, reporter).await?;
        }
        Ok(())
    }

    async fn execute_leaf<O: Write, E: Write>(
        &mut self,
        action: &Action,
        reporter: &mut Reporter<O, E>,
    ) -> Result<(), StepFailure> {
        match action {
            Action::Run(invocation) => self.run(invocation).await,
            Action::CreateInstallDir(path) => self.create_install_dir(path, reporter).await,
            Action::ChangeDir(path) => self.change_dir(path),
            Action::ActivateEnv(path) => self.activate(path),
            Action::DeactivateEnv => self.deactivate(),
            Action::CreateDir(path) => {
                let path = self.resolve(path);
                fs::create_dir_all(&path).map_err(fs_failure("create directory", &path))
            }
            Action::CopyFile { from, to } => self.copy_file(from, to).await,
            Action::WriteFile { contents, to } => self.write_file(contents, to).await,
            Action::MakeExecutable(path) => self.make_executable(path),
            Action::Symlink { target, link } => self.symlink(target, link).await,
            // Expanded by `Action::leaves`.
            Action::Sequence(_) => Ok(()),
        }
    }

    async fn run(&self, invocation: &Invocation) -> Result<(), StepFailure> {
        let overlay = self.environment.overlay(env::var_os("PATH").as_deref());
        let status = self.runner.run(invocation, &self.cwd, &overlay).await?;
        if status.success() { Ok(()) } else { Err(status.into()) }
    }

    async fn create_install_dir<O: Write, E: Write>(
        &mut self,
        path: &Path,
        reporter: &mut Reporter<O, E>,
    ) -> Result<(), StepFailure> {
        let path = self.resolve(path);

        if let Ok(meta) = path.symlink_metadata() {
            reporter.warning(&format!("{} already exists", path.display()));
            let prompt = format!("Remove {} and everything in it?", path.display());
            if !self.confirm(prompt).await? {
                return Err(StepFailure::Declined(path.display().to_string()));
            }
            let removed =
                if meta.is_dir() { fs::remove_dir_all(&path) } else { fs::remove_file(&path) };
            removed.map_err(fs_failure("remove", &path))?;
        }

        fs::create_dir_all(&path).map_err(fs_failure("create directory", &path))
    }

    fn change_dir(&mut self, path: &Path) -> Result<(), StepFailure> {
        let path = self.resolve(path);
        let meta = fs::metadata(&path).map_err(fs_failure("enter", &path))?;
        if !meta.is_dir() {
            return Err(StepFailure::Filesystem {
                operation: "enter",
                path: path.display().to_string(),
                details: "not a directory".to_string(),
            });
        }
        debug!(cwd = %path.display(), "working context changed");
        self.cwd = path;
        Ok(())
    }

    fn activate(&mut self, path: &Path) -> Result<(), StepFailure> {
        let path = self.resolve(path);
        if !path.join("bin").is_dir() {
            return Err(StepFailure::NotAnEnvironment(path.display().to_string()));
        }
        debug!(root = %path.display(), "isolated environment activated");
        self.environment.activate(path);
        Ok(())
    }

    fn deactivate(&mut self) -> Result<(), StepFailure> {
        let root = self.environment.deactivate().ok_or(StepFailure::NoActiveEnvironment)?;
        debug!(root = %root.display(), "isolated environment deactivated");
        Ok(())
    }

    async fn copy_file(&self, from: &Path, to: &Path) -> Result<(), StepFailure> {
        let from = self.resolve(from);
        let to = self.resolve(to);

        if to.symlink_metadata().is_ok() {
            let prompt = format!("Overwrite {}?", to.display());
            if !self.confirm(prompt).await? {
                debug!(path = %to.display(), "keeping existing file");
                return Ok(());
            }
        }

        fs::copy(&from, &to).map(|_| ()).map_err(fs_failure("copy", &from))
    }

    async fn write_file(&self, contents: &str, to: &Path) -> Result<(), StepFailure> {
        let to = self.resolve(to);

        if to.symlink_metadata().is_ok() {
            let prompt = format!("Overwrite {}?", to.display());
            if !self.confirm(prompt).await? {
                debug!(path = %to.display(), "keeping existing file");
                return Ok(());
            }
        }

        fs::write(&to, contents).map_err(fs_failure("write", &to))
    }

    fn make_executable(&self, path: &Path) -> Result<(), StepFailure> {
        let path = self.resolve(path);
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .map_err(fs_failure("change mode of", &path))
    }

    async fn symlink(&self, target: &Path, link: &Path) -> Result<(), StepFailure> {
        let link = self.resolve(link);

        if link.symlink_metadata().is_ok() {
            let prompt = format!("Replace {}?", link.display());
            if !self.confirm(prompt).await? {
                debug!(path = %link.display(), "keeping existing link");
                return Ok(());
            }
            fs::remove_file(&link).map_err(fs_failure("remove", &link))?;
        }

        symlink(target, &link).map_err(fs_failure("link", &link))
    }

    /// Prompts run on the blocking pool so a signal can still preempt them.
    ///
    /// A prompt interrupted by Ctrl-C has already raised SIGINT; the step
    /// then waits for the sequencer to observe that signal.
    async fn confirm(&self, prompt: String) -> Result<bool, StepFailure> {
        let confirmer = Arc::clone(&self.confirmer);
        let answer = tokio::task::spawn_blocking(move || confirmer.confirm(&prompt))
            .await
            .map_err(|e| StepFailure::Prompt(e.to_string()))?;
        match answer {
            Ok(answer) => {
                debug!(answer, "confirmation answered");
                Ok(answer)
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {
                debug!("confirmation interrupted");
                std::future::pending().await
            }
            Err(e) => Err(StepFailure::Prompt(e.to_string())),
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() { path.to_path_buf() } else { self.cwd.join(path) }
    }
}

fn fs_failure(operation: &'static str, path: &Path) -> impl FnOnce(io::Error) -> StepFailure {
    let path = path.display().to_string();
    move |e| StepFailure::Filesystem { operation, path, details: e.to_string() }
}
