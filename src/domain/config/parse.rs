//! Pure parse/validate for installation configuration.

use crate::domain::{AppError, InstallConfig};

/// Parse and validate installation configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<InstallConfig, AppError> {
    let config: InstallConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
