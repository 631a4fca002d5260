//! Process exit codes.

/// Every step completed.
pub const SUCCESS: i32 = 0;

/// A step returned a failing outcome.
pub const STEP_FAILED: i32 = 1;

/// Invalid invocation or configuration.
pub const USAGE: i32 = 2;

/// Required program or file does not exist (sysexits `EX_UNAVAILABLE`).
pub const UNAVAILABLE: i32 = 69;

/// Operating system failure outside any step (sysexits `EX_OSERR`).
pub const OS_ERROR: i32 = 71;

/// Permission denied (sysexits `EX_NOPERM`).
pub const NO_PERMISSION: i32 = 77;

/// Base added to a signal number when terminating because of that signal.
pub const SIGNAL_BASE: i32 = 128;
