use super::types::Arguments;

/// Receiver of inbound notifications for one key.
///
/// Implemented for every `Fn(Arguments)` closure, so handler objects and
/// closures register through the same call.
pub trait NotificationCallback {
    fn on_receive_notification(&self, arguments: Arguments);
}

impl<F> NotificationCallback for F
where
    F: Fn(Arguments),
{
    fn on_receive_notification(&self, arguments: Arguments) {
        self(arguments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::RefCell;

    struct Recorder {
        received: RefCell<Vec<Arguments>>,
    }

    impl NotificationCallback for Recorder {
        fn on_receive_notification(&self, arguments: Arguments) {
            self.received.borrow_mut().push(arguments);
        }
    }

    #[test]
    fn test_closure_is_a_callback() {
        let seen = RefCell::new(None);
        let callback = |arguments: Arguments| {
            *seen.borrow_mut() = arguments;
        };
        callback.on_receive_notification(Some(json!(42)));
        assert_eq!(*seen.borrow(), Some(json!(42)));
    }

    #[test]
    fn test_handler_object_is_a_callback() {
        let recorder = Recorder {
            received: RefCell::new(Vec::new()),
        };
        recorder.on_receive_notification(None);
        recorder.on_receive_notification(Some(json!("hello")));
        assert_eq!(
            *recorder.received.borrow(),
            vec![None, Some(json!("hello"))]
        );
    }
}
