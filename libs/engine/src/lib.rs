//! Engines consume a validated [`ExecutionSettings`] and perform a single remapping run.
//!
//! The remapping itself happens in external engines.
//! What lives here is the entry point they implement,
//! and the [`WorkspaceEngine`] that prepares the directories every run needs.
//! Engines report progress through the settings' debug sink,
//! and use the `log` facade for anything the operator should see regardless.
extern crate failure;
extern crate failure_derive;
extern crate log;
extern crate vineyard_core;

mod workspace;

pub use self::workspace::{Workspace, WorkspaceEngine, CacheInvalidationError};

use failure::Error;
use vineyard_core::{ExecutionSettings, Outcome};

pub trait RemapEngine {
    type Output;
    /// Perform a single run with the specified settings
    fn execute(&self, settings: &ExecutionSettings) -> Outcome<Self::Output, Error>;
}
impl<'a, T: RemapEngine + ?Sized> RemapEngine for &'a T {
    type Output = T::Output;

    #[inline]
    fn execute(&self, settings: &ExecutionSettings) -> Outcome<T::Output, Error> {
        (**self).execute(settings)
    }
}
