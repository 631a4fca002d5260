//! Shared testing utilities for install-mitmf CLI tests.

use assert_cmd::Command;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const FAKE_APT_GET: &str = r#"#!/bin/sh
echo "apt-get $*" >> "$FAKE_LOG"
exit 0
"#;

const FAKE_VIRTUALENV: &str = r#"#!/bin/sh
echo "virtualenv $*" >> "$FAKE_LOG"
for target; do :; done
mkdir -p "$target/bin"
printf 'VIRTUAL_ENV=%s\nexport VIRTUAL_ENV\n' "$target" > "$target/bin/activate"
"#;

const FAKE_GIT: &str = r#"#!/bin/sh
echo "git $* (cwd $(pwd))" >> "$FAKE_LOG"
if [ "$1" = clone ]; then
    if [ -n "$FAKE_GIT_CLONE_EXIT" ]; then
        exit "$FAKE_GIT_CLONE_EXIT"
    fi
    mkdir -p "$3" && touch "$3/requirements.txt" "$3/mitmf.py"
fi
exit 0
"#;

const FAKE_PIP: &str = r#"#!/bin/sh
echo "pip $* (VIRTUAL_ENV=$VIRTUAL_ENV cwd $(pwd))" >> "$FAKE_LOG"
if [ -n "$FAKE_PIP_MARKER" ]; then
    touch "$FAKE_PIP_MARKER"
    exec sleep 30
fi
exit 0
"#;

const FAKE_PYTHON: &str = r#"#!/bin/sh
echo "python $* (VIRTUAL_ENV=$VIRTUAL_ENV cwd $(pwd))"
"#;

/// Isolated installation target with fake external tools first on `PATH`.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let ctx = Self { root };

        fs::create_dir_all(ctx.fake_bin()).expect("Failed to create fake tool directory");
        fs::create_dir_all(ctx.link_dir()).expect("Failed to create link directory");
        ctx.write_executable(&ctx.fake_bin().join("apt-get"), FAKE_APT_GET);
        ctx.write_executable(&ctx.fake_bin().join("virtualenv"), FAKE_VIRTUALENV);
        ctx.write_executable(&ctx.fake_bin().join("git"), FAKE_GIT);
        ctx.write_executable(&ctx.fake_bin().join("pip"), FAKE_PIP);
        ctx.write_executable(&ctx.fake_bin().join("python"), FAKE_PYTHON);
        fs::write(ctx.wrapper_source(), "#!/bin/sh\necho mitmf \"$@\"\n")
            .expect("Failed to write wrapper source");
        fs::write(ctx.config_path(), ctx.config_toml()).expect("Failed to write config");

        ctx
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn fake_bin(&self) -> PathBuf {
        self.root().join("fake-bin")
    }

    pub fn install_dir(&self) -> PathBuf {
        self.root().join("opt/mitmf")
    }

    pub fn link_dir(&self) -> PathBuf {
        self.root().join("usr/local/bin")
    }

    pub fn wrapper_source(&self) -> PathBuf {
        self.root().join("mitmf-wrapper")
    }

    pub fn config_path(&self) -> PathBuf {
        self.root().join("install.toml")
    }

    pub fn log_path(&self) -> PathBuf {
        self.root().join("tools.log")
    }

    pub fn tool_log(&self) -> String {
        fs::read_to_string(self.log_path()).unwrap_or_default()
    }

    /// Locations and preflight settings shared by every test configuration.
    fn base_config(&self) -> String {
        format!(
            r#"[install]
dir = "{}"
link_dir = "{}"

[preflight]
require_root = false
"#,
            self.install_dir().display(),
            self.link_dir().display()
        )
    }

    fn config_toml(&self) -> String {
        format!(
            "{}\n[wrapper]\nsource = \"{}\"\n",
            self.base_config(),
            self.wrapper_source().display()
        )
    }

    /// Replace the configuration: shared settings followed by `sections`.
    pub fn write_config(&self, sections: &str) {
        fs::write(self.config_path(), format!("{}\n{}", self.base_config(), sections))
            .expect("Failed to write config");
    }

    fn write_executable(&self, path: &Path, content: &str) {
        fs::write(path, content).expect("Failed to write fake tool");
        fs::set_permissions(path, fs::Permissions::from_mode(0o755))
            .expect("Failed to mark fake tool executable");
    }

    /// `PATH` with the fake tools ahead of the system ones.
    pub fn search_path(&self) -> OsString {
        let mut dirs = vec![self.fake_bin()];
        if let Some(inherited) = env::var_os("PATH") {
            dirs.extend(env::split_paths(&inherited));
        }
        env::join_paths(dirs).expect("Failed to build PATH")
    }

    /// Command for the compiled binary using the test configuration.
    pub fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("install-mitmf").expect("Failed to locate install-mitmf binary");
        cmd.current_dir(self.root())
            .env("PATH", self.search_path())
            .env("FAKE_LOG", self.log_path())
            .env_remove("RUST_LOG")
            .arg("--config")
            .arg(self.config_path());
        cmd
    }

    /// Same as [`TestContext::cli`] as a plain process, for signal delivery.
    pub fn process(&self) -> std::process::Command {
        let mut cmd = std::process::Command::new(env!("CARGO_BIN_EXE_install-mitmf"));
        cmd.current_dir(self.root())
            .env("PATH", self.search_path())
            .env("FAKE_LOG", self.log_path())
            .env_remove("RUST_LOG")
            .arg("--config")
            .arg(self.config_path());
        cmd
    }
}
