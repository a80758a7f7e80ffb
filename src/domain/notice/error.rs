use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelError {
    Transport(String),
    Serialization(String),
    InvalidEnvelope(String),
    ScopeUnavailable(String),
}

impl fmt::Display for ChannelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelError::Transport(msg) => write!(f, "Transport Error: {msg}"),
            ChannelError::Serialization(msg) => write!(f, "Serialization Error: {msg}"),
            ChannelError::InvalidEnvelope(msg) => write!(f, "Invalid envelope: {msg}"),
            ChannelError::ScopeUnavailable(msg) => write!(f, "Global scope unavailable: {msg}"),
        }
    }
}

impl std::error::Error for ChannelError {}

impl ChannelError {
    pub fn transport(message: impl Into<String>) -> Self {
        ChannelError::Transport(message.into())
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        ChannelError::Serialization(message.into())
    }

    pub fn invalid_envelope(message: impl Into<String>) -> Self {
        ChannelError::InvalidEnvelope(message.into())
    }

    pub fn scope_unavailable(message: impl Into<String>) -> Self {
        ChannelError::ScopeUnavailable(message.into())
    }
}

impl From<serde_json::Error> for ChannelError {
    fn from(error: serde_json::Error) -> Self {
        ChannelError::serialization(error.to_string())
    }
}
