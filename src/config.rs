/// Channel name shared with the host plugin.
pub const DEFAULT_CHANNEL_NAME: &str = "g_faraday/notification";

/// Source marker stamped on envelopes this side posts.
pub const DEFAULT_ORIGIN: &str = "notice-bridge";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelConfig {
    pub channel_name: String,
    /// Envelopes carrying this source were posted by us and are never dispatched locally.
    pub origin: String,
    /// Log a debug line when an inbound key has no registered callback.
    pub log_unhandled: bool,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            channel_name: DEFAULT_CHANNEL_NAME.to_string(),
            origin: DEFAULT_ORIGIN.to_string(),
            log_unhandled: true,
        }
    }
}

impl ChannelConfig {
    pub fn new(channel_name: impl Into<String>) -> Self {
        Self {
            channel_name: channel_name.into(),
            ..Self::default()
        }
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    pub fn with_log_unhandled(mut self, enabled: bool) -> Self {
        self.log_unhandled = enabled;
        self
    }
}
