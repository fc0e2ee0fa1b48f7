//! Thin wrappers over browser facilities the pages need.

use chrono_tz::Tz;
use js_sys::{Array, Intl, Object, Reflect};
use log::warn;
use shared::datetime::resolve_timezone;
use wasm_bindgen::JsValue;

/// IANA timezone the browser reports, UTC when it cannot be read.
pub fn browser_timezone() -> Tz {
    let options = Intl::DateTimeFormat::new(&Array::new(), &Object::new()).resolved_options();
    match Reflect::get(&options, &JsValue::from_str("timeZone"))
        .ok()
        .and_then(|value| value.as_string())
    {
        Some(name) => resolve_timezone(&name),
        None => {
            warn!("Browser did not report a timezone, using UTC");
            Tz::UTC
        }
    }
}

/// Blocking yes/no prompt.
pub fn confirm(message: &str) -> bool {
    gloo::dialogs::confirm(message)
}
