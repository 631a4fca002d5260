use std::io;

use dialoguer::{Confirm, Error as DialoguerError};

use crate::ports::Confirmer;

/// Terminal confirmation; defaults to "no".
#[derive(Debug, Clone, Copy, Default)]
pub struct DialoguerConfirmer;

impl Confirmer for DialoguerConfirmer {
    fn confirm(&self, prompt: &str) -> io::Result<bool> {
        match Confirm::new().with_prompt(prompt).default(false).interact() {
            Ok(answer) => Ok(answer),
            Err(DialoguerError::IO(err)) => Err(err),
        }
    }
}
