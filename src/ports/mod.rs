//! Ports module - Defines the interfaces (traits) that abstract platform-specific functionality.
//!
//! The domain layer only talks to these traits; adapters provide the native
//! and WASM implementations.

pub mod logger;
pub mod transport;

pub use logger::LoggerPort;
pub use transport::TransportPort;
