mod dialoguer_confirmer;
mod local_system;
mod process_command_runner;
mod terminal;
pub mod unix_signals;

pub use dialoguer_confirmer::DialoguerConfirmer;
pub use local_system::LocalSystem;
pub use process_command_runner::ProcessCommandRunner;
pub use terminal::TerminalState;
