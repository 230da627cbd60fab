//! The bridge between the loosely typed configuration a build supplies
//! and the validated [`ExecutionSettings`] an engine consumes.
extern crate failure;
extern crate failure_derive;
extern crate log;
extern crate serde;
extern crate serde_derive;
extern crate serde_json;
extern crate vineyard_core;

mod logger;
mod settings;

pub use self::logger::{BuildLogger, StandardLogger};
pub use self::settings::{VineyardSettings, SettingsOverrides, ConfigError};

#[doc(no_inline)]
pub use vineyard_core::ExecutionSettings;
