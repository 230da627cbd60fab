#[macro_use]
extern crate clap;
extern crate env_logger;
extern crate failure;
extern crate log;

use std::path::{Path, PathBuf};
use std::process::exit;
use std::sync::Arc;

use clap::ArgMatches;
use failure::Error;
use log::warn;

use vineyard::{Outcome, VineyardSettings, SettingsOverrides, StandardLogger, WorkspaceEngine, Workspace};

fn app() -> clap::App<'static, 'static> {
    clap_app!(vineyard =>
        (version: crate_version!())
        (author: crate_authors!())
        (about: crate_description!())
        (@arg config: --config +takes_value "A JSON file with the settings to use")
        (@arg dir: --dir +takes_value "The working directory for inputs, outputs and caches")
        (@arg debug: --debug "Show the engine's debug output")
        (@arg no_debug: --("no-debug") conflicts_with[debug] "Hide the engine's debug output, even if the config enables it")
        (@arg ignore_caches: --("ignore-caches") "Recompute everything instead of using caches")
        (@arg use_caches: --("use-caches") conflicts_with[ignore_caches] "Use caches, even if the config ignores them")
        (@arg minecraft_version: "The minecraft version to remap")
    )
}

fn main() {
    ::env_logger::Builder::from_env(
        ::env_logger::Env::default().default_filter_or("warn,vineyard=info")
    ).init();
    let matches = app().get_matches();
    if let Err(error) = run(&matches) {
        eprintln!("Error: {}", error);
        for cause in error.iter_causes() {
            eprintln!("  Caused by: {}", cause);
        }
        exit(1);
    }
}

/// The state of a flag with a negated counterpart, if either was given
fn flag(matches: &ArgMatches, enable: &str, disable: &str) -> Option<bool> {
    if matches.is_present(enable) {
        Some(true)
    } else if matches.is_present(disable) {
        Some(false)
    } else {
        None
    }
}

/// The settings given on the command line, which take precedence over the config file
fn command_line_settings(matches: &ArgMatches) -> SettingsOverrides {
    SettingsOverrides {
        version: matches.value_of("minecraft_version").map(String::from),
        debug: flag(matches, "debug", "no_debug"),
        ignore_caches: flag(matches, "ignore_caches", "use_caches"),
        working_directory: matches.value_of("dir").map(PathBuf::from),
    }
}

fn run(matches: &ArgMatches) -> Result<(), Error> {
    let mut settings = match matches.value_of("config") {
        Some(location) => VineyardSettings::load(Path::new(location))?,
        None => VineyardSettings::default()
    };
    settings.merge(command_line_settings(matches));
    let workspace = match vineyard::execute(&settings, Arc::new(StandardLogger), &WorkspaceEngine) {
        Outcome::Success(workspace) => workspace,
        Outcome::Recover(workspace, error) => {
            warn!("Recovered from error: {}", error);
            workspace
        },
        Outcome::Failure(error) => return Err(error)
    };
    print_workspace(&workspace);
    Ok(())
}

fn print_workspace(workspace: &Workspace) {
    println!("Working directory: {}", workspace.root.display());
    println!("Cache: {}", workspace.cache.display());
    println!("Output: {}", workspace.output.display());
}
