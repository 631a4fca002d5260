pub mod install_config;
pub mod parse;

pub use install_config::{
    EnvironmentConfig, InstallConfig, InstallLocations, PreflightConfig, PrerequisitesConfig,
    RepositoryConfig, WrapperConfig,
};
pub use parse::parse_config_content;
