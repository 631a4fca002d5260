use std::io;
use std::path::{Path, PathBuf};

use crate::ports::SystemProbe;

pub struct FakeSystem {
    uid: u32,
    programs: Vec<String>,
    files: Vec<PathBuf>,
}

impl FakeSystem {
    pub fn new(uid: u32, programs: &[&str]) -> Self {
        Self { uid, programs: programs.iter().map(|p| p.to_string()).collect(), files: Vec::new() }
    }

    pub fn with_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.files.push(path.into());
        self
    }
}

impl SystemProbe for FakeSystem {
    fn effective_uid(&self) -> io::Result<u32> {
        Ok(self.uid)
    }

    fn find_program(&self, name: &str) -> Option<PathBuf> {
        self.programs.iter().any(|p| p == name).then(|| PathBuf::from("/usr/bin").join(name))
    }

    fn is_file(&self, path: &Path) -> bool {
        self.files.iter().any(|f| f == path)
    }
}
