use std::sync::Arc;

use log::info;
use vineyard_core::DebugSink;

/// Whatever the host uses to show progress to the user.
///
/// This is passed explicitly instead of reaching for a global logger,
/// and may be called from any thread the engine runs on.
pub trait BuildLogger: Send + Sync {
    fn emit(&self, line: &str);
}

/// Forwards to the `log` facade, under the `vineyard` target
#[derive(Copy, Clone, Debug, Default)]
pub struct StandardLogger;
impl BuildLogger for StandardLogger {
    #[inline]
    fn emit(&self, line: &str) {
        info!(target: "vineyard", "{}", line);
    }
}

/// Fire-and-forget forwarding of engine debug output into a logger
pub(crate) struct ForwardingSink {
    logger: Arc<dyn BuildLogger>
}
impl ForwardingSink {
    #[inline]
    pub fn new(logger: Arc<dyn BuildLogger>) -> ForwardingSink {
        ForwardingSink { logger }
    }
}
impl DebugSink for ForwardingSink {
    #[inline]
    fn emit(&self, line: &str) {
        self.logger.emit(line)
    }
}
