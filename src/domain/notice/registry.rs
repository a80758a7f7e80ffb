use super::callback::NotificationCallback;
use super::types::Arguments;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Key to callback mapping. The last registration for a key wins.
#[derive(Default)]
pub struct NotificationRegistry {
    callbacks: RefCell<HashMap<String, Rc<dyn NotificationCallback>>>,
}

impl NotificationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or silently replaces the callback for `key`.
    pub fn register<C>(&self, key: impl Into<String>, callback: C)
    where
        C: NotificationCallback + 'static,
    {
        self.register_rc(key, Rc::new(callback));
    }

    /// Same as [`register`](Self::register) for a callback shared elsewhere.
    pub fn register_rc(&self, key: impl Into<String>, callback: Rc<dyn NotificationCallback>) {
        self.callbacks.borrow_mut().insert(key.into(), callback);
    }

    /// Removes the callback for `key`. Returns whether one was registered.
    pub fn unregister(&self, key: &str) -> bool {
        self.callbacks.borrow_mut().remove(key).is_some()
    }

    /// Invokes the callback registered for `key` with `arguments`.
    ///
    /// Returns whether `key` is still registered once the callback returns,
    /// and `false` without invoking anything when `key` is unknown.
    pub fn dispatch(&self, key: &str, arguments: Arguments) -> bool {
        // The borrow must end before the callback runs: it may re-enter the registry.
        let callback = self.callbacks.borrow().get(key).cloned();

        match callback {
            Some(callback) => {
                callback.on_receive_notification(arguments);
                self.is_registered(key)
            }
            None => false,
        }
    }

    pub fn is_registered(&self, key: &str) -> bool {
        self.callbacks.borrow().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.callbacks.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.borrow().is_empty()
    }

    /// Registered keys, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.callbacks.borrow().keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn clear(&self) {
        self.callbacks.borrow_mut().clear();
    }
}
