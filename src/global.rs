use crate::domain::notice::ChannelError;
use wasm_bindgen::prelude::*;
use web_sys::DedicatedWorkerGlobalScope;

/// Global scope of the current JS context: a dedicated worker or a window.
pub enum GlobalScope {
    Worker(DedicatedWorkerGlobalScope),
    Window(web_sys::Window),
}

pub fn get_global_scope() -> Result<GlobalScope, ChannelError> {
    // Try worker scope first
    if let Ok(scope) = js_sys::global().dyn_into::<DedicatedWorkerGlobalScope>() {
        return Ok(GlobalScope::Worker(scope));
    }

    // Fallback to window
    web_sys::window().map(GlobalScope::Window).ok_or_else(|| {
        ChannelError::scope_unavailable("Neither DedicatedWorkerGlobalScope nor Window found")
    })
}

impl GlobalScope {
    pub fn post_message(&self, message: &JsValue) -> Result<(), ChannelError> {
        match self {
            GlobalScope::Worker(scope) => scope.post_message(message)?,
            GlobalScope::Window(window) => window.post_message(message, "*")?,
        }
        Ok(())
    }
}
