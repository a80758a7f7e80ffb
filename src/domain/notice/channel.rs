use super::callback::NotificationCallback;
use super::error::ChannelError;
use super::registry::NotificationRegistry;
use super::types::{Arguments, Envelope, Message};
use crate::config::ChannelConfig;
use crate::platform::Platform;
use crate::ports::TransportPort;
use std::rc::Rc;

/// Notification channel between the local runtime and the remote UI engine.
///
/// Outbound messages go through the transport port; inbound messages are
/// handed to [`dispatch`](Self::dispatch) or [`on_method_call`](Self::on_method_call)
/// by whoever owns the receiving end of the transport.
pub struct NoticeChannel<T: TransportPort> {
    config: ChannelConfig,
    registry: NotificationRegistry,
    transport: T,
    platform: Platform,
}

impl<T: TransportPort> NoticeChannel<T> {
    pub fn new(config: ChannelConfig, transport: T) -> Self {
        Self::with_platform(config, transport, Platform::new())
    }

    pub fn with_platform(config: ChannelConfig, transport: T, platform: Platform) -> Self {
        Self {
            config,
            registry: NotificationRegistry::new(),
            transport,
            platform,
        }
    }

    pub fn config(&self) -> &ChannelConfig {
        &self.config
    }

    pub fn registry(&self) -> &NotificationRegistry {
        &self.registry
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn register<C>(&self, key: impl Into<String>, callback: C)
    where
        C: NotificationCallback + 'static,
    {
        self.register_rc(key, Rc::new(callback));
    }

    pub fn register_rc(&self, key: impl Into<String>, callback: Rc<dyn NotificationCallback>) {
        let key = key.into();
        self.platform.logger().debug(&format!(
            "{}: registering callback for '{}'",
            self.config.channel_name, key
        ));
        self.registry.register_rc(key, callback);
    }

    pub fn unregister(&self, key: &str) {
        if self.registry.unregister(key) {
            self.platform.logger().debug(&format!(
                "{}: unregistered callback for '{}'",
                self.config.channel_name, key
            ));
        }
    }

    /// Sends `key` and `arguments` to the remote side, unmodified.
    pub fn post(&self, key: impl Into<String>, arguments: Arguments) -> Result<(), ChannelError> {
        let message = Message::new(key, arguments);
        self.platform.logger().debug(&format!(
            "{}: posting '{}'",
            self.config.channel_name, message.key
        ));

        self.transport.send(message).map_err(|e| {
            self.platform.logger().error(&format!(
                "{}: failed to post notification: {}",
                self.config.channel_name, e
            ));
            e
        })
    }

    /// Runs the callback registered for `key`.
    ///
    /// Returns whether `key` is still registered after the callback ran.
    pub fn dispatch(&self, key: &str, arguments: Arguments) -> bool {
        let handled = self.registry.dispatch(key, arguments);

        if !handled && self.config.log_unhandled {
            self.platform.logger().debug(&format!(
                "{}: '{}' not handled",
                self.config.channel_name, key
            ));
        }

        handled
    }

    /// Inbound entry point for transports sharing one bus between channels.
    ///
    /// Envelopes addressed to another channel, or posted by this side, are ignored.
    pub fn on_method_call(&self, envelope: Envelope) -> bool {
        if envelope.channel != self.config.channel_name || envelope.is_from(&self.config.origin) {
            return false;
        }

        let message = envelope.into_message();
        self.dispatch(&message.key, message.arguments)
    }
}
