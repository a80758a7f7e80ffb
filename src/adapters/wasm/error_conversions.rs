use crate::domain::notice::ChannelError;
use wasm_bindgen::JsValue;

/// Conversion from JsValue to ChannelError for WASM infrastructure
impl From<JsValue> for ChannelError {
    fn from(err: JsValue) -> Self {
        ChannelError::transport(
            err.as_string()
                .unwrap_or_else(|| format!("{:?}", err)),
        )
    }
}

/// Conversion from ChannelError to JsValue for WASM boundary
impl From<ChannelError> for JsValue {
    fn from(error: ChannelError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}
