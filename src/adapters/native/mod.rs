//! Native adapters - implementations for native Rust (non-WASM).

pub mod channel_transport;
pub mod console_logger;

pub use channel_transport::ChannelTransport;
pub use console_logger::ConsoleLogger;
