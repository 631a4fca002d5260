//! The ordered installation sequence.

use super::config::InstallConfig;
use super::step::{Action, Invocation, Step};
use super::wrapper::WrapperSource;

/// Build the installation steps in execution order.
///
/// Each step relies on the side effects of the ones before it: the working
/// context and environment activation carry over from step to step.
pub fn installation_plan(config: &InstallConfig, wrapper: &WrapperSource) -> Vec<Step> {
    let install_dir = config.install.dir.clone();
    let env_dir = config.env_dir();
    let repository_dir = config.repository_dir();
    let prerequisites = &config.prerequisites;
    let environment = &config.environment;

    let mut creator_args = environment.creator_args.clone();
    creator_args.push(env_dir.display().to_string());

    let install_wrapper = match wrapper {
        WrapperSource::Rendered(contents) => {
            Action::WriteFile { contents: contents.clone(), to: config.wrapper_path() }
        }
        WrapperSource::File(source) => {
            Action::CopyFile { from: source.clone(), to: config.wrapper_path() }
        }
    };

    vec![
        Step::new(
            "Installing prerequisite packages",
            Action::Run(Invocation::new(
                &prerequisites.manager,
                prerequisites.args.iter().chain(&prerequisites.packages).cloned(),
            )),
        ),
        Step::new(
            format!("Creating installation directory {}", install_dir.display()),
            Action::CreateInstallDir(install_dir.clone()),
        ),
        Step::new("Entering installation directory", Action::ChangeDir(install_dir.clone())),
        Step::new(
            "Creating virtual environment",
            Action::Run(Invocation::new(&environment.creator, creator_args)),
        ),
        Step::new("Activating virtual environment", Action::ActivateEnv(env_dir)),
        Step::new(
            "Cloning MITMf repository",
            Action::Run(Invocation::new(
                "git",
                [
                    "clone".to_string(),
                    config.repository.url.clone(),
                    repository_dir.display().to_string(),
                ],
            )),
        ),
        Step::new(
            "Updating MITMf submodules",
            Action::Sequence(vec![
                Action::ChangeDir(repository_dir),
                Action::Run(Invocation::new("git", ["submodule", "init"])),
                Action::Run(Invocation::new("git", ["submodule", "update", "--recursive"])),
            ]),
        ),
        Step::new(
            "Installing MITMf dependencies",
            Action::Run(Invocation::new(
                &environment.installer,
                ["install".to_string(), "-r".to_string(), environment.manifest.clone()],
            )),
        ),
        Step::new("Deactivating virtual environment", Action::DeactivateEnv),
        Step::new("Returning to installation directory", Action::ChangeDir(install_dir)),
        Step::new("Creating wrapper directory", Action::CreateDir(config.bin_dir())),
        Step::new("Installing wrapper script", install_wrapper),
        Step::new(
            "Making wrapper script executable",
            Action::MakeExecutable(config.wrapper_path()),
        ),
        Step::new(
            format!("Linking wrapper into {}", config.install.link_dir.display()),
            Action::Symlink { target: config.wrapper_path(), link: config.link_path() },
        ),
    ]
}
