//! The settings that fully describe one remapping run.
//!
//! A run is configured through [`ExecutionSettingsBuilder`],
//! which validates everything up front so the engine never sees a half-configured run.
//! Once built, [`ExecutionSettings`] can't be changed and is safe to share between threads.
extern crate failure;
extern crate failure_derive;
extern crate serde;

pub mod settings;
pub mod outcome;
pub mod version;

pub use self::settings::{
    ExecutionSettings, ExecutionSettingsBuilder, BuilderPolicy,
    DebugSink, SettingsError
};
pub use self::outcome::Outcome;
pub use self::version::{MinecraftVersion, InvalidMinecraftVersion};
