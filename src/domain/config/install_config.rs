//! Installation configuration domain models.

use std::path::{Component, Path, PathBuf};

use serde::Deserialize;

use crate::domain::AppError;

/// Configuration for one installation run, optionally loaded from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstallConfig {
    /// Target locations.
    #[serde(default)]
    pub install: InstallLocations,
    /// OS package installation.
    #[serde(default)]
    pub prerequisites: PrerequisitesConfig,
    /// Isolated interpreter environment.
    #[serde(default)]
    pub environment: EnvironmentConfig,
    /// Toolkit source repository.
    #[serde(default)]
    pub repository: RepositoryConfig,
    /// Wrapper executable.
    #[serde(default)]
    pub wrapper: WrapperConfig,
    /// Checks run before the first step.
    #[serde(default)]
    pub preflight: PreflightConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstallLocations {
    /// Installation root.
    #[serde(default = "default_install_dir")]
    pub dir: PathBuf,
    /// Directory on the executable search path that receives the symlink.
    #[serde(default = "default_link_dir")]
    pub link_dir: PathBuf,
}

impl Default for InstallLocations {
    fn default() -> Self {
        Self { dir: default_install_dir(), link_dir: default_link_dir() }
    }
}

fn default_install_dir() -> PathBuf {
    PathBuf::from("/opt/mitmf")
}

fn default_link_dir() -> PathBuf {
    PathBuf::from("/usr/local/bin")
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrerequisitesConfig {
    /// Package manager program.
    #[serde(default = "default_manager")]
    pub manager: String,
    /// Arguments placed before the package list.
    #[serde(default = "default_manager_args")]
    pub args: Vec<String>,
    #[serde(default = "default_packages")]
    pub packages: Vec<String>,
}

impl Default for PrerequisitesConfig {
    fn default() -> Self {
        Self {
            manager: default_manager(),
            args: default_manager_args(),
            packages: default_packages(),
        }
    }
}

fn default_manager() -> String {
    "apt-get".to_string()
}

fn default_manager_args() -> Vec<String> {
    vec!["install".to_string(), "-y".to_string()]
}

fn default_packages() -> Vec<String> {
    [
        "git",
        "python-virtualenv",
        "python-dev",
        "python-setuptools",
        "libpcap0.8-dev",
        "libnetfilter-queue-dev",
        "libssl-dev",
        "libjpeg-dev",
        "libxml2-dev",
        "libxslt1-dev",
        "libcapstone3",
        "libcapstone-dev",
        "libffi-dev",
        "file",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnvironmentConfig {
    /// Program that creates the environment; receives the target path last.
    #[serde(default = "default_creator")]
    pub creator: String,
    #[serde(default = "default_creator_args")]
    pub creator_args: Vec<String>,
    /// Environment directory name under the installation root.
    #[serde(default = "default_env_dir_name")]
    pub dir_name: String,
    /// Dependency installer resolved through the activated environment.
    #[serde(default = "default_installer")]
    pub installer: String,
    /// Dependency manifest inside the cloned repository.
    #[serde(default = "default_manifest")]
    pub manifest: String,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            creator: default_creator(),
            creator_args: default_creator_args(),
            dir_name: default_env_dir_name(),
            installer: default_installer(),
            manifest: default_manifest(),
        }
    }
}

fn default_creator() -> String {
    "virtualenv".to_string()
}

fn default_creator_args() -> Vec<String> {
    vec!["-p".to_string(), "/usr/bin/python2.7".to_string()]
}

fn default_env_dir_name() -> String {
    "venv".to_string()
}

fn default_installer() -> String {
    "pip".to_string()
}

fn default_manifest() -> String {
    "requirements.txt".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RepositoryConfig {
    #[serde(default = "default_repository_url")]
    pub url: String,
    /// Clone directory name under the installation root.
    #[serde(default = "default_repository_dir_name")]
    pub dir_name: String,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self { url: default_repository_url(), dir_name: default_repository_dir_name() }
    }
}

fn default_repository_url() -> String {
    "https://github.com/byt3bl33d3r/MITMf".to_string()
}

fn default_repository_dir_name() -> String {
    "MITMf".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WrapperConfig {
    /// Command name of the wrapper and of the symlink.
    #[serde(default = "default_wrapper_name")]
    pub name: String,
    /// Wrapper script to copy instead of the built-in launcher.
    #[serde(default)]
    pub source: Option<PathBuf>,
    /// Wrapper directory name under the installation root.
    #[serde(default = "default_bin_dir_name")]
    pub bin_dir_name: String,
}

impl Default for WrapperConfig {
    fn default() -> Self {
        Self { name: default_wrapper_name(), source: None, bin_dir_name: default_bin_dir_name() }
    }
}

fn default_wrapper_name() -> String {
    "mitmf".to_string()
}

fn default_bin_dir_name() -> String {
    "bin".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PreflightConfig {
    /// Refuse to start unless running with an effective uid of 0.
    #[serde(default = "default_true")]
    pub require_root: bool,
}

impl Default for PreflightConfig {
    fn default() -> Self {
        Self { require_root: default_true() }
    }
}

fn default_true() -> bool {
    true
}

impl InstallConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        require_absolute("install.dir", &self.install.dir)?;
        require_absolute("install.link_dir", &self.install.link_dir)?;
        require_non_empty("prerequisites.manager", &self.prerequisites.manager)?;
        require_non_empty("environment.creator", &self.environment.creator)?;
        require_non_empty("environment.installer", &self.environment.installer)?;
        require_non_empty("repository.url", &self.repository.url)?;
        require_single_component("environment.dir_name", &self.environment.dir_name)?;
        require_single_component("repository.dir_name", &self.repository.dir_name)?;
        require_single_component("wrapper.name", &self.wrapper.name)?;
        require_single_component("wrapper.bin_dir_name", &self.wrapper.bin_dir_name)?;
        Ok(())
    }

    pub fn env_dir(&self) -> PathBuf {
        self.install.dir.join(&self.environment.dir_name)
    }

    pub fn repository_dir(&self) -> PathBuf {
        self.install.dir.join(&self.repository.dir_name)
    }

    pub fn bin_dir(&self) -> PathBuf {
        self.install.dir.join(&self.wrapper.bin_dir_name)
    }

    /// Installed location of the wrapper script.
    pub fn wrapper_path(&self) -> PathBuf {
        self.bin_dir().join(&self.wrapper.name)
    }

    /// Symlink placed on the executable search path.
    pub fn link_path(&self) -> PathBuf {
        self.install.link_dir.join(&self.wrapper.name)
    }
}

fn require_absolute(field: &str, path: &Path) -> Result<(), AppError> {
    if path.is_absolute() {
        Ok(())
    } else {
        Err(AppError::config_error(format!(
            "{} must be an absolute path, got '{}'",
            field,
            path.display()
        )))
    }
}

fn require_non_empty(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        Err(AppError::config_error(format!("{} must not be empty", field)))
    } else {
        Ok(())
    }
}

fn require_single_component(field: &str, value: &str) -> Result<(), AppError> {
    require_non_empty(field, value)?;
    let mut components = Path::new(value).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(AppError::config_error(format!(
            "{} must be a single path component, got '{}'",
            field, value
        ))),
    }
}
