use crate::domain::notice::{ChannelError, Envelope, Message};
use crate::facades::wasm::converters::to_js_value;
use crate::global::get_global_scope;
use crate::ports::TransportPort;

/// WASM transport adapter posting envelopes on the current global scope.
///
/// Workers post to their parent; windows post to themselves with target
/// origin `*`, where the UI engine's `message` listener picks them up.
/// Every envelope carries `origin` as its source so a window can drop its
/// own posts when they come back through the same listener.
#[derive(Debug, Clone)]
pub struct PostMessageTransport {
    channel_name: String,
    origin: String,
}

impl PostMessageTransport {
    pub fn new(channel_name: impl Into<String>, origin: impl Into<String>) -> Self {
        Self {
            channel_name: channel_name.into(),
            origin: origin.into(),
        }
    }

    pub fn channel_name(&self) -> &str {
        &self.channel_name
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }
}

impl TransportPort for PostMessageTransport {
    fn send(&self, message: Message) -> Result<(), ChannelError> {
        let envelope =
            Envelope::new(self.channel_name.clone(), message).with_source(self.origin.clone());
        let js_value = to_js_value(&envelope)?;

        get_global_scope()?.post_message(&js_value)
    }
}
