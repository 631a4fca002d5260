//! The launcher script installed under the wrapper directory.

use std::path::{Path, PathBuf};

use minijinja::{Environment, UndefinedBehavior, context};

use super::config::InstallConfig;
use super::error::AppError;

static WRAPPER_TEMPLATE: &str = include_str!("../assets/wrapper.sh.j2");

/// Where the wrapper script comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WrapperSource {
    /// Built-in launcher rendered for the configured layout.
    Rendered(String),
    /// Operator-supplied script, copied as is.
    File(PathBuf),
}

/// Render the built-in launcher so it activates the configured environment
/// and runs from the configured clone.
pub fn render_wrapper(config: &InstallConfig) -> Result<String, AppError> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_keep_trailing_newline(true);

    let ctx = context! {
        activate => shell_quote(&config.env_dir().join("bin").join("activate")),
        repository => shell_quote(&config.repository_dir()),
    };

    env.render_str(WRAPPER_TEMPLATE, ctx)
        .map_err(|e| AppError::config_error(format!("Failed to render wrapper script: {}", e)))
}

/// Single-quote `path` for POSIX sh.
fn shell_quote(path: &Path) -> String {
    format!("'{}'", path.display().to_string().replace('\'', r"'\''"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_wrapper_targets_default_layout() {
        let script = render_wrapper(&InstallConfig::default()).unwrap();

        assert!(script.starts_with("#!/bin/sh\n"));
        assert!(script.contains(". '/opt/mitmf/venv/bin/activate'\n"));
        assert!(script.contains("cd '/opt/mitmf/MITMf' || exit 1\n"));
        assert!(script.ends_with("exec python mitmf.py \"$@\"\n"));
    }

    #[test]
    fn wrapper_follows_configured_layout() {
        let mut config = InstallConfig::default();
        config.install.dir = PathBuf::from("/srv/tools/mitm");
        config.environment.dir_name = "pyenv".to_string();
        config.repository.dir_name = "src".to_string();

        let script = render_wrapper(&config).unwrap();

        assert!(script.contains(". '/srv/tools/mitm/pyenv/bin/activate'\n"));
        assert!(script.contains("cd '/srv/tools/mitm/src' || exit 1\n"));
        assert!(!script.contains("/opt/mitmf"));
    }

    #[test]
    fn quotes_survive_in_paths() {
        assert_eq!(shell_quote(Path::new("/opt/it's here")), r"'/opt/it'\''s here'");
    }
}
