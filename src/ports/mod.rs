mod command_runner;
mod confirmer;
mod system_probe;

pub use command_runner::CommandRunner;
pub use confirmer::Confirmer;
pub use system_probe::SystemProbe;
