use std::env;
use std::fs;
use std::io;
use std::os::unix::fs::{MetadataExt, PermissionsExt};
use std::path::{Path, PathBuf};

use crate::ports::SystemProbe;

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSystem;

impl SystemProbe for LocalSystem {
    fn effective_uid(&self) -> io::Result<u32> {
        // /proc/self is owned by the effective uid of the reading process.
        Ok(fs::metadata("/proc/self")?.uid())
    }

    fn find_program(&self, name: &str) -> Option<PathBuf> {
        if name.contains('/') {
            let path = PathBuf::from(name);
            return is_executable(&path).then_some(path);
        }

        let search_path = env::var_os("PATH")?;
        env::split_paths(&search_path)
            .map(|dir| dir.join(name))
            .find(|candidate| is_executable(candidate))
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}

fn is_executable(path: &Path) -> bool {
    fs::metadata(path)
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}
