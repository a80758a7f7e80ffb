pub mod callback;
pub mod channel;
pub mod error;
pub mod registry;
pub mod types;

pub use callback::NotificationCallback;
pub use channel::NoticeChannel;
pub use error::ChannelError;
pub use registry::NotificationRegistry;
pub use types::{Arguments, Envelope, Message};
