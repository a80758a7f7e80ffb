use crate::domain::notice::{ChannelError, Message};
use crate::ports::TransportPort;
use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Native transport adapter backed by an unbounded in-process channel.
///
/// The host owns the receiver and forwards each message to the UI engine.
#[derive(Clone)]
pub struct ChannelTransport {
    sender: UnboundedSender<Message>,
}

impl ChannelTransport {
    pub fn new(sender: UnboundedSender<Message>) -> Self {
        Self { sender }
    }

    /// Creates a transport together with the receiver the host drains.
    pub fn pair() -> (Self, UnboundedReceiver<Message>) {
        let (sender, receiver) = mpsc::unbounded();
        (Self::new(sender), receiver)
    }

    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

impl TransportPort for ChannelTransport {
    fn send(&self, message: Message) -> Result<(), ChannelError> {
        self.sender
            .unbounded_send(message)
            .map_err(|e| ChannelError::transport(format!("Outbound receiver is gone: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_send_delivers_in_order() {
        let (transport, mut receiver) = ChannelTransport::pair();

        transport
            .send(Message::new("first", Some(json!(1))))
            .unwrap();
        transport.send(Message::new("second", None)).unwrap();

        assert_eq!(
            receiver.try_next().unwrap(),
            Some(Message::new("first", Some(json!(1))))
        );
        assert_eq!(
            receiver.try_next().unwrap(),
            Some(Message::new("second", None))
        );
        assert!(receiver.try_next().is_err(), "No more messages expected");
    }

    #[test]
    fn test_send_after_receiver_dropped() {
        let (transport, receiver) = ChannelTransport::pair();
        drop(receiver);

        assert!(transport.is_closed());
        let result = transport.send(Message::new("ping", None));
        assert!(matches!(result, Err(ChannelError::Transport(_))));
    }

    #[test]
    fn test_cloned_transport_shares_receiver() {
        let (transport, mut receiver) = ChannelTransport::pair();
        let cloned = transport.clone();

        cloned.send(Message::new("from_clone", None)).unwrap();

        assert_eq!(
            receiver.try_next().unwrap(),
            Some(Message::new("from_clone", None))
        );
    }
}
