//! Requirement checks performed before the first step.

use tracing::debug;

use crate::domain::{AppError, InstallConfig, Requirement, WrapperSource, requirements};
use crate::ports::SystemProbe;

pub fn check<P: SystemProbe>(
    config: &InstallConfig,
    wrapper: &WrapperSource,
    probe: &P,
) -> Result<(), AppError> {
    for requirement in requirements(config, wrapper) {
        match &requirement {
            Requirement::Root => {
                let uid = probe.effective_uid()?;
                if uid != 0 {
                    return Err(AppError::PermissionDenied(format!(
                        "Installation requires root privileges (effective uid {})",
                        uid
                    )));
                }
            }
            Requirement::Program(name) => {
                let Some(path) = probe.find_program(name) else {
                    return Err(AppError::ProgramUnavailable(name.clone()));
                };
                debug!(program = %name, path = %path.display(), "required program found");
            }
            Requirement::File(path) => {
                if !probe.is_file(path) {
                    return Err(AppError::FileUnavailable(path.clone()));
                }
            }
        }
        debug!(%requirement, "requirement satisfied");
    }
    Ok(())
}
