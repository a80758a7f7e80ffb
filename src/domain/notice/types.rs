use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Payload carried by a notification. `None` is an absent payload.
pub type Arguments = Option<Value>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub key: String,
    pub arguments: Arguments,
}

impl Message {
    pub fn new(key: impl Into<String>, arguments: Arguments) -> Self {
        Self {
            key: key.into(),
            arguments,
        }
    }
}

/// Wire form of a message on a message bus shared with other channels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub channel: String,
    pub method: String,
    #[serde(default)]
    pub arguments: Arguments,
    /// Origin of the side that posted the envelope, if it stamped one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl Envelope {
    pub fn new(channel: impl Into<String>, message: Message) -> Self {
        Self {
            channel: channel.into(),
            method: message.key,
            arguments: message.arguments,
            source: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn is_from(&self, origin: &str) -> bool {
        self.source.as_deref() == Some(origin)
    }

    pub fn into_message(self) -> Message {
        Message {
            key: self.method,
            arguments: self.arguments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_wire_format() {
        let envelope = Envelope::new(
            "g_faraday/notification",
            Message::new("ping", Some(json!({"x": 1}))),
        );

        let wire = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            wire,
            json!({
                "channel": "g_faraday/notification",
                "method": "ping",
                "arguments": {"x": 1}
            })
        );
    }

    #[test]
    fn test_envelope_null_arguments_become_none() {
        let envelope: Envelope = serde_json::from_str(
            r#"{"channel":"g_faraday/notification","method":"ping","arguments":null}"#,
        )
        .unwrap();
        assert_eq!(envelope.arguments, None);

        let missing: Envelope =
            serde_json::from_str(r#"{"channel":"g_faraday/notification","method":"ping"}"#)
                .unwrap();
        assert_eq!(missing.arguments, None);
    }

    #[test]
    fn test_envelope_without_method_is_rejected() {
        let result = serde_json::from_str::<Envelope>(r#"{"channel":"g_faraday/notification"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_envelope_source_on_the_wire() {
        let envelope = Envelope::new("chan", Message::new("ping", None)).with_source("host");

        let wire = serde_json::to_value(&envelope).unwrap();
        assert_eq!(wire["source"], json!("host"));

        let decoded: Envelope = serde_json::from_value(wire).unwrap();
        assert!(decoded.is_from("host"));
        assert!(!decoded.is_from("ui"));
    }

    #[test]
    fn test_envelope_without_source() {
        let envelope: Envelope =
            serde_json::from_str(r#"{"channel":"chan","method":"ping"}"#).unwrap();
        assert_eq!(envelope.source, None);
        assert!(!envelope.is_from("notice-bridge"));
    }

    #[test]
    fn test_into_message_keeps_payload() {
        let message = Message::new("login", Some(json!(["a", 2, null])));
        let envelope = Envelope::new("chan", message.clone());
        assert_eq!(envelope.into_message(), message);
    }
}
