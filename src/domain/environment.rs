//! Activation state of the isolated interpreter environment.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Environment changes applied to every subprocess.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverlay {
    pub set: Vec<(String, OsString)>,
    pub remove: Vec<String>,
}

impl EnvOverlay {
    pub fn is_empty(&self) -> bool {
        self.set.is_empty() && self.remove.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&OsStr> {
        self.set.iter().find(|(name, _)| name == key).map(|(_, value)| value.as_os_str())
    }
}

/// Tracks which isolated environment, if any, is active for the session.
#[derive(Debug, Clone, Default)]
pub struct IsolatedEnvironment {
    active: Option<PathBuf>,
}

impl IsolatedEnvironment {
    pub fn activate(&mut self, root: PathBuf) {
        self.active = Some(root);
    }

    /// Returns the root that was active, if any.
    pub fn deactivate(&mut self) -> Option<PathBuf> {
        self.active.take()
    }

    pub fn active(&self) -> Option<&Path> {
        self.active.as_deref()
    }

    /// Overlay equivalent to sourcing `bin/activate`: `VIRTUAL_ENV` set,
    /// `bin/` first on `PATH`, `PYTHONHOME` unset.
    pub fn overlay(&self, inherited_path: Option<&OsStr>) -> EnvOverlay {
        let Some(root) = &self.active else {
            return EnvOverlay::default();
        };

        let mut path = root.join("bin").into_os_string();
        if let Some(inherited) = inherited_path.filter(|value| !value.is_empty()) {
            path.push(":");
            path.push(inherited);
        }

        EnvOverlay {
            set: vec![
                ("VIRTUAL_ENV".to_string(), root.clone().into_os_string()),
                ("PATH".to_string(), path),
            ],
            remove: vec!["PYTHONHOME".to_string()],
        }
    }
}
