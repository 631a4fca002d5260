use std::io;

/// Yes/no confirmation before a destructive filesystem change.
pub trait Confirmer: Send + Sync {
    fn confirm(&self, prompt: &str) -> io::Result<bool>;
}
