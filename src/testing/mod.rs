mod fake_command_runner;
mod fake_system;
mod scripted_confirmer;

pub use fake_command_runner::FakeCommandRunner;
pub use fake_system::FakeSystem;
pub use scripted_confirmer::ScriptedConfirmer;
