//! Native Rust facade for the notification channel.
//! Wires a `NoticeChannel` to the in-process transport and keeps the host's
//! end of it.
use crate::adapters::native::ChannelTransport;
use crate::config::ChannelConfig;
use crate::domain::notice::{
    Arguments, ChannelError, Envelope, Message, NoticeChannel, NotificationCallback,
};
use futures::channel::mpsc::UnboundedReceiver;

pub struct NoticeManager {
    channel: NoticeChannel<ChannelTransport>,
    outbound: Option<UnboundedReceiver<Message>>,
}

impl NoticeManager {
    pub fn new(config: ChannelConfig) -> Self {
        let (transport, outbound) = ChannelTransport::pair();
        Self {
            channel: NoticeChannel::new(config, transport),
            outbound: Some(outbound),
        }
    }

    pub fn channel(&self) -> &NoticeChannel<ChannelTransport> {
        &self.channel
    }

    /// Hands the outbound stream to the host. Only the first call returns it.
    pub fn take_outbound(&mut self) -> Option<UnboundedReceiver<Message>> {
        self.outbound.take()
    }

    /// Returns every message posted so far, unless the receiver was taken.
    pub fn drain_outbound(&mut self) -> Vec<Message> {
        let mut messages = Vec::new();
        if let Some(receiver) = self.outbound.as_mut() {
            while let Ok(Some(message)) = receiver.try_next() {
                messages.push(message);
            }
        }
        messages
    }

    pub fn register<C>(&self, key: impl Into<String>, callback: C)
    where
        C: NotificationCallback + 'static,
    {
        self.channel.register(key, callback);
    }

    pub fn unregister(&self, key: &str) {
        self.channel.unregister(key);
    }

    pub fn post(&self, key: impl Into<String>, arguments: Arguments) -> Result<(), ChannelError> {
        self.channel.post(key, arguments)
    }

    pub fn dispatch(&self, key: &str, arguments: Arguments) -> bool {
        self.channel.dispatch(key, arguments)
    }

    /// Dispatches a JSON encoded envelope received from the host.
    pub fn receive_json(&self, json: &str) -> Result<bool, ChannelError> {
        let envelope: Envelope = serde_json::from_str(json)
            .map_err(|e| ChannelError::invalid_envelope(e.to_string()))?;
        Ok(self.channel.on_method_call(envelope))
    }

    /// Encodes an outbound message as a JSON envelope stamped with this side's origin.
    pub fn encode(&self, message: Message) -> Result<String, ChannelError> {
        let config = self.channel.config();
        let envelope = Envelope::new(config.channel_name.clone(), message)
            .with_source(config.origin.clone());
        Ok(serde_json::to_string(&envelope)?)
    }
}

impl Default for NoticeManager {
    fn default() -> Self {
        Self::new(ChannelConfig::default())
    }
}
