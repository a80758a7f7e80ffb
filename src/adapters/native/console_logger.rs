use crate::ports::LoggerPort;

const TARGET: &str = "notice_bridge";

/// Native logger implementation forwarding to the `log` facade.
///
/// Output depends on the logger the host installs (`env_logger` in tests).
#[derive(Debug, Clone, Copy)]
pub struct ConsoleLogger;

impl ConsoleLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerPort for ConsoleLogger {
    fn debug(&self, message: &str) {
        log::debug!(target: TARGET, "{message}");
    }

    fn log(&self, message: &str) {
        log::info!(target: TARGET, "{message}");
    }

    fn warn(&self, message: &str) {
        log::warn!(target: TARGET, "{message}");
    }

    fn error(&self, message: &str) {
        log::error!(target: TARGET, "{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_creation() {
        let logger = ConsoleLogger::new();
        logger.log("test");
    }

    #[test]
    fn test_logger_all_methods() {
        let _ = env_logger::builder().is_test(true).try_init();

        let logger = ConsoleLogger::default();
        logger.debug("test debug");
        logger.log("test log");
        logger.warn("test warn");
        logger.error("test error");
    }
}
