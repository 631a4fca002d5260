pub mod config;
pub mod environment;
pub mod error;
pub mod exit_code;
pub mod plan;
pub mod requirements;
pub mod signal;
pub mod step;
pub mod wrapper;

pub use config::InstallConfig;
pub use environment::{EnvOverlay, IsolatedEnvironment};
pub use error::AppError;
pub use plan::installation_plan;
pub use requirements::{Requirement, requirements};
pub use signal::Signal;
pub use step::{Action, CommandStatus, Invocation, Step, StepFailure};
pub use wrapper::{WrapperSource, render_wrapper};
