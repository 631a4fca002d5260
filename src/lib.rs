//! install-mitmf: fail-fast installer for the MITMf toolkit.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::{InstallOptions, Reporter, install, load_config};
pub use domain::{AppError, InstallConfig, Signal, Step, installation_plan};
