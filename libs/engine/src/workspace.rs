use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use failure::{Error, bail};
use failure_derive::Fail;
use log::{debug, warn};
use vineyard_core::{ExecutionSettings, Outcome};

use crate::RemapEngine;

/// The directories prepared for a single run
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Workspace {
    pub root: PathBuf,
    /// The cache for this specific version
    pub cache: PathBuf,
    pub output: PathBuf,
}

#[derive(Debug, Fail)]
#[fail(display = "Unable to clear stale cache {:?}: {}", directory, cause)]
pub struct CacheInvalidationError {
    pub directory: PathBuf,
    #[cause]
    pub cause: io::Error,
}

/// Lays out the working directory before any remapping happens.
///
/// Each version gets its own cache directory, which is wiped when caches are ignored.
#[derive(Copy, Clone, Debug, Default)]
pub struct WorkspaceEngine;
impl WorkspaceEngine {
    fn prepare(&self, settings: &ExecutionSettings) -> Result<Outcome<Workspace, Error>, Error> {
        let root = settings.working_directory();
        if root.is_file() {
            bail!("Working directory is actually a file: {}", root.display())
        }
        let cache_root = root.join("cache");
        let output = root.join("output");
        fs::create_dir_all(&cache_root)?;
        fs::create_dir_all(&output)?;
        settings.emit_debug(&format!("Prepared working directory {}", root.display()));
        match settings.minecraft_version() {
            Ok(release) => settings.emit_debug(&format!("Preparing release {}", release)),
            Err(_) => settings.emit_debug(&format!("Preparing non-release version {}", settings.version())),
        }
        let cache = cache_root.join(cache_directory_name(settings.version()));
        let mut invalidation_error = None;
        let cache = if settings.ignore_caches() && cache.exists() {
            settings.emit_debug(&format!("Ignoring caches, clearing {}", cache.display()));
            match fs::remove_dir_all(&cache) {
                Ok(()) => cache,
                Err(cause) => {
                    let fallback = unused_sibling(&cache);
                    warn!(
                        "Unable to clear {}, using {} instead: {}",
                        cache.display(), fallback.display(), cause
                    );
                    invalidation_error = Some(CacheInvalidationError { directory: cache, cause });
                    fallback
                }
            }
        } else {
            cache
        };
        fs::create_dir_all(&cache)?;
        settings.emit_debug(&format!("Using cache directory {}", cache.display()));
        debug!("Prepared workspace for {} in {}", settings.version(), root.display());
        let workspace = Workspace { root: root.to_path_buf(), cache, output };
        Ok(match invalidation_error {
            Some(error) => Outcome::Recover(workspace, error.into()),
            None => Outcome::Success(workspace),
        })
    }
}
impl RemapEngine for WorkspaceEngine {
    type Output = Workspace;

    fn execute(&self, settings: &ExecutionSettings) -> Outcome<Workspace, Error> {
        match self.prepare(settings) {
            Ok(outcome) => outcome,
            Err(error) => Outcome::Failure(error),
        }
    }
}

/// Version identifiers come from the user, so they can't be trusted as path components
fn cache_directory_name(version: &str) -> String {
    let name: String = version.trim().chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' { c } else { '_' })
        .collect();
    // Never refer to the current or parent directory
    if name.chars().all(|c| c == '.') {
        name.replace('.', "_")
    } else {
        name
    }
}

fn unused_sibling(directory: &Path) -> PathBuf {
    let name = directory.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    (1..)
        .map(|index| directory.with_file_name(format!("{}-{}", name, index)))
        .find(|candidate| !candidate.exists())
        .unwrap_or_else(|| directory.to_path_buf())
}
