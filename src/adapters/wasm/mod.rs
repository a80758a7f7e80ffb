//! WASM adapters - implementations using browser APIs.

pub mod console_logger;
pub mod error_conversions;
pub mod post_message;

pub use console_logger::ConsoleLogger;
pub use post_message::PostMessageTransport;
