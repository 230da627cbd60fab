use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use failure_derive::Fail;
use log::debug;
use serde_derive::{Serialize, Deserialize};
use vineyard_core::{ExecutionSettings, SettingsError};
use vineyard_core::settings::{NO_VERSION, NO_WORKING_DIRECTORY};

use crate::logger::{BuildLogger, ForwardingSink};

/// The user's configuration of a remapping run, as written in a build.
///
/// Everything is optional here,
/// and is only checked when it's translated into [`ExecutionSettings`].
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VineyardSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub debug: bool,
    pub ignore_caches: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<PathBuf>,
}
impl VineyardSettings {
    /// Load the settings from a JSON file
    pub fn load(path: &Path) -> Result<VineyardSettings, ConfigError> {
        debug!("Loading configuration from {}", path.display());
        let file = File::open(path)
            .map_err(|cause| ConfigError::Io { path: path.into(), cause })?;
        ::serde_json::from_reader(BufReader::new(file))
            .map_err(|cause| ConfigError::Parse { path: path.into(), cause })
    }
    /// Overlay the specified overrides on top of these settings.
    ///
    /// Only the values that are present replace ours,
    /// so a flag enabled in a file can still be switched off.
    pub fn merge(&mut self, overrides: SettingsOverrides) {
        if overrides.version.is_some() {
            self.version = overrides.version;
        }
        if overrides.working_directory.is_some() {
            self.working_directory = overrides.working_directory;
        }
        if let Some(debug) = overrides.debug {
            self.debug = debug;
        }
        if let Some(ignore_caches) = overrides.ignore_caches {
            self.ignore_caches = ignore_caches;
        }
    }
    /// Validate these settings and translate them for an engine.
    ///
    /// When debugging is enabled, the engine's debug output is forwarded to the logger.
    pub fn as_execution_settings(&self, logger: Arc<dyn BuildLogger>) -> Result<ExecutionSettings, SettingsError> {
        let mut builder = ExecutionSettings::builder();
        if self.debug {
            builder.debug(ForwardingSink::new(logger))?;
        }
        if self.ignore_caches {
            builder.ignore_caches()?;
        }
        let working_directory = self.working_directory.as_ref()
            .ok_or(SettingsError::InvalidConfiguration(NO_WORKING_DIRECTORY))?;
        builder.working_directory(working_directory.as_path())?;
        let version = self.version.as_ref()
            .ok_or(SettingsError::InvalidConfiguration(NO_VERSION))?;
        builder.build(version)
    }
}

/// Values that take precedence over a loaded configuration, like command line arguments
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SettingsOverrides {
    pub version: Option<String>,
    pub debug: Option<bool>,
    pub ignore_caches: Option<bool>,
    pub working_directory: Option<PathBuf>,
}

#[derive(Debug, Fail)]
pub enum ConfigError {
    #[fail(display = "Unable to read {:?}: {}", path, cause)]
    Io {
        path: PathBuf,
        #[cause]
        cause: io::Error
    },
    #[fail(display = "Invalid configuration in {:?}: {}", path, cause)]
    Parse {
        path: PathBuf,
        #[cause]
        cause: ::serde_json::Error
    },
}
