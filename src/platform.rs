//! Platform - Dependency injection container for the stateless ports.
//!
//! Adapters are selected at compile time; everything here is a `&'static`
//! reference, so `Platform` is `Copy` and cheap to hand to every channel.

use crate::ports::LoggerPort;

#[derive(Clone, Copy)]
pub struct Platform {
    logger: &'static dyn LoggerPort,
}

impl Platform {
    /// Creates a new Platform with default adapters for the current target.
    pub fn new() -> Self {
        Self {
            logger: crate::adapters::logger(),
        }
    }

    /// Creates a Platform around a caller-provided logger.
    pub fn with_logger(logger: &'static dyn LoggerPort) -> Self {
        Self { logger }
    }

    #[inline]
    pub fn logger(&self) -> &'static dyn LoggerPort {
        self.logger
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::new()
    }
}
