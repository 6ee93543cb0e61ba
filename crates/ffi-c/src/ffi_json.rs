use std::ffi::CString;

use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::error::MEOW_OK;

const RESERVED_FIELDS: &[&str] = &["ok", "code", "msg"];

pub struct Envelope {
    map: Map<String, Value>,
}

impl Envelope {
    fn new(ok: bool, code: i32, msg: String) -> Self {
        let mut map = Map::new();
        map.insert("ok".into(), Value::Bool(ok));
        map.insert("code".into(), json!(code));
        map.insert("msg".into(), Value::String(msg));
        Self { map }
    }

    pub fn into_string(self) -> String {
        Value::Object(self.map).to_string()
    }

    /// `None` only if a field smuggled in an interior NUL.
    pub fn into_cstring(self) -> Option<CString> {
        CString::new(self.into_string()).ok()
    }
}

pub fn ok() -> Envelope {
    Envelope::new(true, MEOW_OK, "OK".into())
}

/// Attach `key: value`. Reserved keys and unserializable values are skipped.
pub fn with_field<T>(mut envelope: Envelope, key: impl Into<String>, value: T) -> Envelope
where
    T: Serialize,
{
    let key = key.into();
    if RESERVED_FIELDS.contains(&key.as_str()) {
        log::warn!("field '{key}' is reserved by the FFI envelope");
        return envelope;
    }
    match serde_json::to_value(value) {
        Ok(value) => {
            envelope.map.insert(key, value);
        }
        Err(e) => log::warn!("dropping envelope field '{key}': {e}"),
    }
    envelope
}
