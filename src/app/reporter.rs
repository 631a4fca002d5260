//! Status lines: `<program>: [TAG] message`.

use std::fmt;
use std::io::{self, Write};

use crate::domain::{Signal, StepFailure};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    Start,
    Ok,
    Failed,
    Warning,
    Success,
    Error,
    Plan,
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            Tag::Start => "START",
            Tag::Ok => "OK",
            Tag::Failed => "FAILED",
            Tag::Warning => "WARNING",
            Tag::Success => "SUCCESS",
            Tag::Error => "ERROR",
            Tag::Plan => "PLAN",
        };
        f.write_str(word)
    }
}

/// Writes progress to `out` and problems to `err`.
pub struct Reporter<O: Write, E: Write> {
    program: String,
    out: O,
    err: E,
}

impl Reporter<io::Stdout, io::Stderr> {
    pub fn stdio<S: Into<String>>(program: S) -> Self {
        Self::new(program, io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> Reporter<O, E> {
    pub fn new<S: Into<String>>(program: S, out: O, err: E) -> Self {
        Self { program: program.into(), out, err }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn step_started(&mut self, description: &str) {
        self.emit_out(Tag::Start, description);
    }

    pub fn step_succeeded(&mut self, description: &str) {
        self.emit_out(Tag::Ok, description);
    }

    pub fn step_failed(&mut self, description: &str, reason: &StepFailure) {
        self.emit_err(Tag::Failed, &format!("{}: {}", description, reason));
    }

    pub fn warning(&mut self, message: &str) {
        self.emit_err(Tag::Warning, message);
    }

    pub fn installation_succeeded(&mut self) {
        self.emit_out(Tag::Success, "installation succeeded");
    }

    /// Final notice of an aborted run, shared by step failures and signals.
    pub fn installation_failed(&mut self, signal: Option<Signal>) {
        let message = match signal {
            Some(signal) => format!("installation failed: interrupted by {}", signal),
            None => "installation failed".to_string(),
        };
        self.emit_err(Tag::Failed, &message);
    }

    pub fn error(&mut self, message: &str) {
        self.emit_err(Tag::Error, message);
    }

    pub fn planned(&mut self, position: usize, description: &str) {
        self.emit_out(Tag::Plan, &format!("{:>2}. {}", position, description));
    }

    pub fn into_streams(self) -> (O, E) {
        (self.out, self.err)
    }

    fn emit_out(&mut self, tag: Tag, message: &str) {
        let _ = writeln!(self.out, "{}: [{}] {}", self.program, tag, message);
        let _ = self.out.flush();
    }

    fn emit_err(&mut self, tag: Tag, message: &str) {
        let _ = writeln!(self.err, "{}: [{}] {}", self.program, tag, message);
        let _ = self.err.flush();
    }
}
