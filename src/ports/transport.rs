use crate::domain::notice::{ChannelError, Message};

/// Outbound half of the message transport between the two runtimes.
///
/// Implementations deliver the message to the remote side without waiting for
/// it to be handled. Inbound messages do not go through this port: the
/// transport calls `NoticeChannel::dispatch` or `on_method_call` directly.
pub trait TransportPort {
    fn send(&self, message: Message) -> Result<(), ChannelError>;
}
