use std::fmt::{self, Debug, Formatter};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use failure_derive::Fail;

use crate::version::{MinecraftVersion, InvalidMinecraftVersion};

pub const NO_VERSION: &str = "no version specified";
pub const NO_WORKING_DIRECTORY: &str = "no working directory specified";
const ALREADY_FINALIZED: &str = "execution settings builder was already finalized";

/// Receives the human-readable progress lines an engine emits while it runs.
///
/// Engines are free to emit from whatever thread they like,
/// so every sink has to be `Send + Sync`.
/// Any matching closure is a sink.
pub trait DebugSink: Send + Sync {
    fn emit(&self, line: &str);
}
impl<F: Fn(&str) + Send + Sync> DebugSink for F {
    #[inline]
    fn emit(&self, line: &str) {
        self(line)
    }
}

#[derive(Debug, Fail, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// A required option is missing or empty
    #[fail(display = "Invalid configuration: {}", _0)]
    InvalidConfiguration(&'static str),
    /// A single-use builder was touched after it produced its settings
    #[fail(display = "Illegal state: {}", _0)]
    IllegalState(&'static str),
}

/// Everything an engine needs to know to perform a single remapping run.
///
/// The only way to get one is through [`ExecutionSettingsBuilder::build`],
/// so the version is never empty and the working directory is always present.
/// There are no setters, which makes it safe to hand out to other threads.
#[derive(Clone)]
pub struct ExecutionSettings {
    version: String,
    debug_sink: Option<Arc<dyn DebugSink>>,
    ignore_caches: bool,
    working_directory: PathBuf,
}
impl ExecutionSettings {
    /// A builder that can be finalized as many times as you want
    #[inline]
    pub fn builder() -> ExecutionSettingsBuilder {
        ExecutionSettingsBuilder::new(BuilderPolicy::Reusable)
    }
    /// A builder that refuses to be used again once it has produced settings
    #[inline]
    pub fn strict_builder() -> ExecutionSettingsBuilder {
        ExecutionSettingsBuilder::new(BuilderPolicy::SingleUse)
    }
    #[inline]
    pub fn version(&self) -> &str {
        &self.version
    }
    /// Interpret the version identifier as a release version.
    ///
    /// This isn't checked when building,
    /// since snapshot identifiers are perfectly valid targets.
    #[inline]
    pub fn minecraft_version(&self) -> Result<MinecraftVersion, InvalidMinecraftVersion> {
        self.version.parse()
    }
    #[inline]
    pub fn debug_sink(&self) -> Option<&dyn DebugSink> {
        self.debug_sink.as_ref().map(|sink| &**sink)
    }
    #[inline]
    pub fn is_debug(&self) -> bool {
        self.debug_sink.is_some()
    }
    /// Send a line to the debug sink, if there is one
    #[inline]
    pub fn emit_debug(&self, line: &str) {
        if let Some(ref sink) = self.debug_sink {
            sink.emit(line);
        }
    }
    #[inline]
    pub fn ignore_caches(&self) -> bool {
        self.ignore_caches
    }
    #[inline]
    pub fn working_directory(&self) -> &Path {
        &self.working_directory
    }
}
impl Debug for ExecutionSettings {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("ExecutionSettings")
            .field("version", &self.version)
            .field("debug", &self.is_debug())
            .field("ignore_caches", &self.ignore_caches)
            .field("working_directory", &self.working_directory)
            .finish()
    }
}

/// Whether a builder may produce more than one set of settings
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BuilderPolicy {
    /// Every call to `build` snapshots the current state
    Reusable,
    /// The first successful `build` finalizes the builder
    SingleUse,
}
impl Default for BuilderPolicy {
    #[inline]
    fn default() -> Self {
        BuilderPolicy::Reusable
    }
}

#[derive(Clone, Default)]
pub struct ExecutionSettingsBuilder {
    policy: BuilderPolicy,
    finalized: bool,
    debug_sink: Option<Arc<dyn DebugSink>>,
    ignore_caches: bool,
    working_directory: Option<PathBuf>,
}
impl ExecutionSettingsBuilder {
    #[inline]
    pub fn new(policy: BuilderPolicy) -> ExecutionSettingsBuilder {
        ExecutionSettingsBuilder { policy, ..Default::default() }
    }
    #[inline]
    pub fn policy(&self) -> BuilderPolicy {
        self.policy
    }
    #[inline]
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }
    /// Send debug output to the specified sink, replacing any previous sink
    #[inline]
    pub fn debug<S: DebugSink + 'static>(&mut self, sink: S) -> Result<&mut Self, SettingsError> {
        self.shared_debug(Arc::new(sink))
    }
    /// Send debug output to a sink that is shared with someone else
    pub fn shared_debug(&mut self, sink: Arc<dyn DebugSink>) -> Result<&mut Self, SettingsError> {
        self.check_accumulating()?;
        self.debug_sink = Some(sink);
        Ok(self)
    }
    #[inline]
    pub fn ignore_caches(&mut self) -> Result<&mut Self, SettingsError> {
        self.check_accumulating()?;
        self.ignore_caches = true;
        Ok(self)
    }
    /// Set the directory the engine reads its inputs from and writes outputs and caches into.
    ///
    /// The directory doesn't need to exist yet, but an empty path is treated as missing.
    pub fn working_directory<P: Into<PathBuf>>(&mut self, path: P) -> Result<&mut Self, SettingsError> {
        self.check_accumulating()?;
        let path = path.into();
        if path.as_os_str().is_empty() {
            return Err(SettingsError::InvalidConfiguration(NO_WORKING_DIRECTORY))
        }
        self.working_directory = Some(path);
        Ok(self)
    }
    /// Validate the accumulated options and snapshot them into settings for the specified version.
    pub fn build(&mut self, version: &str) -> Result<ExecutionSettings, SettingsError> {
        self.check_accumulating()?;
        if version.trim().is_empty() {
            return Err(SettingsError::InvalidConfiguration(NO_VERSION))
        }
        let working_directory = self.working_directory.clone()
            .ok_or(SettingsError::InvalidConfiguration(NO_WORKING_DIRECTORY))?;
        let settings = ExecutionSettings {
            version: version.into(),
            debug_sink: self.debug_sink.clone(),
            ignore_caches: self.ignore_caches,
            working_directory
        };
        if self.policy == BuilderPolicy::SingleUse {
            self.finalized = true;
        }
        Ok(settings)
    }
    #[inline]
    fn check_accumulating(&self) -> Result<(), SettingsError> {
        if self.finalized {
            Err(SettingsError::IllegalState(ALREADY_FINALIZED))
        } else {
            Ok(())
        }
    }
}
impl Debug for ExecutionSettingsBuilder {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("ExecutionSettingsBuilder")
            .field("policy", &self.policy)
            .field("finalized", &self.finalized)
            .field("debug", &self.debug_sink.is_some())
            .field("ignore_caches", &self.ignore_caches)
            .field("working_directory", &self.working_directory)
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct RecordingSink {
        lines: Mutex<Vec<String>>
    }
    impl RecordingSink {
        fn lines(&self) -> Vec<String> {
            self.lines.lock().clone()
        }
    }
    impl DebugSink for RecordingSink {
        fn emit(&self, line: &str) {
            self.lines.lock().push(line.into());
        }
    }

    #[test]
    fn build_reflects_options() {
        let sink = Arc::new(RecordingSink::default());
        let settings = ExecutionSettings::builder()
            .shared_debug(sink.clone()).unwrap()
            .ignore_caches().unwrap()
            .working_directory("/tmp/run1").unwrap()
            .build("1.20.1").unwrap();
        assert_eq!(settings.version(), "1.20.1");
        assert!(settings.is_debug());
        assert!(settings.ignore_caches());
        assert_eq!(settings.working_directory(), Path::new("/tmp/run1"));
        settings.emit_debug("remapping");
        assert_eq!(sink.lines(), vec!["remapping".to_string()]);
    }
    #[test]
    fn defaults() {
        let settings = ExecutionSettings::builder()
            .working_directory("work").unwrap()
            .build("1.13").unwrap();
        assert!(!settings.is_debug());
        assert!(settings.debug_sink().is_none());
        assert!(!settings.ignore_caches());
        // Nobody is listening
        settings.emit_debug("ignored");
    }
    #[test]
    fn scenario_ignore_caches_without_debug() {
        let mut builder = ExecutionSettings::builder();
        builder.ignore_caches().unwrap();
        builder.working_directory("/tmp/run1").unwrap();
        let settings = builder.build("1.20.1").unwrap();
        assert_eq!(settings.version(), "1.20.1");
        assert!(settings.debug_sink().is_none());
        assert!(settings.ignore_caches());
        assert_eq!(settings.working_directory(), Path::new("/tmp/run1"));
    }
    #[test]
    fn missing_working_directory() {
        let mut builder = ExecutionSettings::builder();
        builder.ignore_caches().unwrap().debug(|_: &str| {}).unwrap();
        assert_eq!(
            builder.build("1.20.1").unwrap_err(),
            SettingsError::InvalidConfiguration(NO_WORKING_DIRECTORY)
        );
        assert_eq!(
            builder.working_directory("").unwrap_err(),
            SettingsError::InvalidConfiguration(NO_WORKING_DIRECTORY)
        );
    }
    #[test]
    fn empty_version() {
        let mut builder = ExecutionSettings::builder();
        builder.working_directory("/tmp/run1").unwrap();
        for version in &["", "   "] {
            let error = builder.build(version).unwrap_err();
            assert_eq!(error, SettingsError::InvalidConfiguration(NO_VERSION));
            assert!(format!("{}", error).contains("version"));
        }
    }
    #[test]
    fn ignore_caches_idempotent() {
        let once = ExecutionSettings::builder()
            .ignore_caches().unwrap()
            .working_directory("work").unwrap()
            .build("1.12.2").unwrap();
        let twice = ExecutionSettings::builder()
            .ignore_caches().unwrap()
            .ignore_caches().unwrap()
            .working_directory("work").unwrap()
            .build("1.12.2").unwrap();
        assert_eq!(once.ignore_caches(), twice.ignore_caches());
        assert!(twice.ignore_caches());
    }
    #[test]
    fn debug_overwrites_sink() {
        let first = Arc::new(RecordingSink::default());
        let second = Arc::new(RecordingSink::default());
        let settings = ExecutionSettings::builder()
            .shared_debug(first.clone()).unwrap()
            .shared_debug(second.clone()).unwrap()
            .working_directory("work").unwrap()
            .build("1.20.1").unwrap();
        settings.emit_debug("hello");
        assert!(first.lines().is_empty());
        assert_eq!(second.lines(), vec!["hello".to_string()]);
    }
    #[test]
    fn reusable_builder() {
        let mut builder = ExecutionSettings::builder();
        builder.working_directory("first").unwrap();
        let first = builder.build("1.19").unwrap();
        builder.working_directory("second").unwrap().ignore_caches().unwrap();
        let second = builder.build("1.20").unwrap();
        assert!(!builder.is_finalized());
        // Earlier snapshots are unaffected
        assert_eq!(first.working_directory(), Path::new("first"));
        assert!(!first.ignore_caches());
        assert_eq!(second.working_directory(), Path::new("second"));
        assert!(second.ignore_caches());
    }
    #[test]
    fn single_use_builder() {
        let mut builder = ExecutionSettings::strict_builder();
        assert_eq!(builder.policy(), BuilderPolicy::SingleUse);
        builder.working_directory("work").unwrap();
        // Failures don't finalize anything
        assert!(builder.build("").is_err());
        assert!(!builder.is_finalized());
        let settings = builder.build("1.20.1").unwrap();
        assert!(builder.is_finalized());
        assert_eq!(
            builder.build("1.20.1").unwrap_err(),
            SettingsError::IllegalState(ALREADY_FINALIZED)
        );
        assert_eq!(
            builder.working_directory("other").unwrap_err(),
            SettingsError::IllegalState(ALREADY_FINALIZED)
        );
        assert_eq!(
            builder.ignore_caches().unwrap_err(),
            SettingsError::IllegalState(ALREADY_FINALIZED)
        );
        assert_eq!(
            builder.debug(|_: &str| {}).unwrap_err(),
            SettingsError::IllegalState(ALREADY_FINALIZED)
        );
        assert!(!settings.ignore_caches());
        assert!(!settings.is_debug());
    }
    #[test]
    fn settings_are_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ExecutionSettings>();
    }
}
