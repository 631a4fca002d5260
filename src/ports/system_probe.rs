use std::io;
use std::path::{Path, PathBuf};

/// Host facts consulted by preflight checks.
pub trait SystemProbe {
    /// Effective user id of the running process.
    fn effective_uid(&self) -> io::Result<u32>;

    /// Resolve a program the way a shell would, via `PATH`.
    fn find_program(&self, name: &str) -> Option<PathBuf>;

    fn is_file(&self, path: &Path) -> bool;
}
