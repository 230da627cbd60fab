//! Configures remapping runs for minecraft artifacts.
//!
//! User configuration ([`VineyardSettings`]) is translated into validated,
//! immutable [`ExecutionSettings`], which are then handed to a [`RemapEngine`].
//! The individual pieces live in their own crates and are re-exported here.
extern crate failure;
extern crate vineyard_core;
extern crate vineyard_engine;
extern crate vineyard_plugin;

use std::sync::Arc;

use failure::Error;

pub use vineyard_core::{
    ExecutionSettings, ExecutionSettingsBuilder, BuilderPolicy, DebugSink,
    SettingsError, MinecraftVersion, InvalidMinecraftVersion, Outcome
};
pub use vineyard_engine::{RemapEngine, WorkspaceEngine, Workspace, CacheInvalidationError};
pub use vineyard_plugin::{VineyardSettings, SettingsOverrides, ConfigError, BuildLogger, StandardLogger};

/// Translate the configuration and run the engine on it.
///
/// Configuration errors are reported as a failure before the engine ever sees them.
pub fn execute<E: RemapEngine>(
    config: &VineyardSettings,
    logger: Arc<dyn BuildLogger>,
    engine: &E
) -> Outcome<E::Output, Error> {
    match config.as_execution_settings(logger) {
        Ok(settings) => engine.execute(&settings),
        Err(error) => Outcome::Failure(error.into()),
    }
}
