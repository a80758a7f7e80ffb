use super::converters::{arguments_to_js_value, js_value_to_arguments};
use crate::adapters::wasm::PostMessageTransport;
use crate::config::{ChannelConfig, DEFAULT_CHANNEL_NAME};
use crate::domain::notice::{
    Arguments, ChannelError, Envelope, NoticeChannel, NotificationCallback,
};
use crate::platform::Platform;
use serde_wasm_bindgen::from_value;
use wasm_bindgen::prelude::*;

/// JS function registered as a notification callback.
struct JsCallback {
    key: String,
    function: js_sys::Function,
    platform: Platform,
}

impl NotificationCallback for JsCallback {
    fn on_receive_notification(&self, arguments: Arguments) {
        let js_arguments = match arguments_to_js_value(&arguments) {
            Ok(value) => value,
            Err(e) => {
                self.platform
                    .logger()
                    .error(&format!("Notification '{}': {}", self.key, e));
                return;
            }
        };

        if let Err(e) = self.function.call1(&JsValue::NULL, &js_arguments) {
            self.platform.logger().error(&format!(
                "Notification callback for '{}' threw: {:?}",
                self.key, e
            ));
        }
    }
}

/// Notification channel exposed to the UI engine.
#[wasm_bindgen(js_name = NoticeChannel)]
pub struct JsNoticeChannel {
    inner: NoticeChannel<PostMessageTransport>,
}

#[wasm_bindgen(js_class = NoticeChannel)]
impl JsNoticeChannel {
    #[wasm_bindgen(constructor)]
    pub fn new(channel_name: Option<String>) -> JsNoticeChannel {
        let config = ChannelConfig::new(
            channel_name.unwrap_or_else(|| DEFAULT_CHANNEL_NAME.to_string()),
        );
        let transport =
            PostMessageTransport::new(config.channel_name.clone(), config.origin.clone());

        JsNoticeChannel {
            inner: NoticeChannel::new(config, transport),
        }
    }

    #[wasm_bindgen(getter, js_name = channelName)]
    pub fn channel_name(&self) -> String {
        self.inner.config().channel_name.clone()
    }

    pub fn register(&self, key: String, callback: js_sys::Function) {
        let callback = JsCallback {
            key: key.clone(),
            function: callback,
            platform: Platform::new(),
        };
        self.inner.register(key, callback);
    }

    pub fn unregister(&self, key: &str) {
        self.inner.unregister(key);
    }

    #[wasm_bindgen(js_name = isRegistered)]
    pub fn is_registered(&self, key: &str) -> bool {
        self.inner.registry().is_registered(key)
    }

    pub fn keys(&self) -> Vec<String> {
        self.inner.registry().keys()
    }

    pub fn post(&self, key: String, arguments: JsValue) -> Result<(), JsValue> {
        let arguments = js_value_to_arguments(arguments)?;
        self.inner.post(key, arguments)?;
        Ok(())
    }

    pub fn dispatch(&self, key: &str, arguments: JsValue) -> Result<bool, JsValue> {
        let arguments = js_value_to_arguments(arguments)?;
        Ok(self.inner.dispatch(key, arguments))
    }

    /// Routes the `data` of a `message` event.
    ///
    /// Envelopes for other channels, or posted by this channel, report `false`.
    #[wasm_bindgen(js_name = handleMessage)]
    pub fn handle_message(&self, data: JsValue) -> Result<bool, JsValue> {
        let envelope: Envelope =
            from_value(data).map_err(|e| ChannelError::invalid_envelope(e.to_string()))?;
        Ok(self.inner.on_method_call(envelope))
    }
}
