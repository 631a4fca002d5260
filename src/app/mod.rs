pub mod cli;
pub mod executor;
pub mod install;
pub mod interrupts;
pub mod preflight;
pub mod reporter;
pub mod sequencer;

pub use executor::StepExecutor;
pub use install::{InstallOptions, install, load_config, wrapper_source};
pub use interrupts::{InterruptSender, Interrupts};
pub use reporter::Reporter;
pub use sequencer::Sequencer;
