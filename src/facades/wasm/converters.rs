use crate::domain::notice::{Arguments, ChannelError};
use serde::Serialize;
use serde_wasm_bindgen::{from_value, Serializer};
use wasm_bindgen::prelude::*;

/// `null` and `undefined` are an absent payload.
pub fn js_value_to_arguments(value: JsValue) -> Result<Arguments, ChannelError> {
    if value.is_null() || value.is_undefined() {
        return Ok(None);
    }

    from_value::<serde_json::Value>(value)
        .map(Some)
        .map_err(|e| ChannelError::serialization(format!("Failed to convert arguments: {}", e)))
}

pub fn arguments_to_js_value(arguments: &Arguments) -> Result<JsValue, ChannelError> {
    match arguments {
        Some(value) => to_js_value(value),
        None => Ok(JsValue::NULL),
    }
}

/// Serializes maps as plain JS objects so the UI engine sees ordinary JSON.
pub fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, ChannelError> {
    value
        .serialize(&Serializer::json_compatible())
        .map_err(|e| ChannelError::serialization(format!("Failed to serialize: {}", e)))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use serde_json::json;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_null_and_undefined_are_absent() {
        assert_eq!(js_value_to_arguments(JsValue::NULL).unwrap(), None);
        assert_eq!(js_value_to_arguments(JsValue::UNDEFINED).unwrap(), None);
    }

    #[wasm_bindgen_test]
    fn test_object_round_trips_as_plain_object() {
        let arguments = Some(json!({"x": 1, "nested": {"flag": true}}));
        let js_value = arguments_to_js_value(&arguments).unwrap();

        assert!(js_value.is_object());
        assert!(!js_value.is_instance_of::<js_sys::Map>());
        let x = js_sys::Reflect::get(&js_value, &JsValue::from_str("x")).unwrap();
        assert_eq!(x.as_f64(), Some(1.0));

        assert_eq!(js_value_to_arguments(js_value).unwrap(), arguments);
    }

    #[wasm_bindgen_test]
    fn test_absent_arguments_become_null() {
        assert!(arguments_to_js_value(&None).unwrap().is_null());
    }
}
