//! Conditions checked before the first installation step.

use std::fmt;
use std::path::PathBuf;

use super::config::InstallConfig;
use super::wrapper::WrapperSource;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirement {
    /// Effective user id must be 0.
    Root,
    /// Program must be resolvable on `PATH`.
    Program(String),
    /// Regular file that a later step reads.
    File(PathBuf),
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Requirement::Root => write!(f, "root privileges"),
            Requirement::Program(name) => write!(f, "program '{}'", name),
            Requirement::File(path) => write!(f, "file {}", path.display()),
        }
    }
}

/// Requirements for a run, in the order they are checked.
///
/// Tools installed by the package step itself are not required up front.
pub fn requirements(config: &InstallConfig, wrapper: &WrapperSource) -> Vec<Requirement> {
    let mut requirements = Vec::new();
    if config.preflight.require_root {
        requirements.push(Requirement::Root);
    }
    requirements.push(Requirement::Program(config.prerequisites.manager.clone()));
    if let WrapperSource::File(path) = wrapper {
        requirements.push(Requirement::File(path.clone()));
    }
    requirements
}
