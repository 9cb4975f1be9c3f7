/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/

//! Locale key normalization for item-set entries
//!
//! The server spells some locale keys with a dash (`zh-hant`) and others with
//! an underscore (`zh_hant`). Records declare the underscore form, so every
//! dashed key gets an underscore copy before decoding. The dashed key is kept.

use serde_json::{Map, Value};

/// Separator the server may emit in locale keys
pub const SOURCE_SEPARATOR: char = '-';
/// Separator used by the declared record fields
pub const CANONICAL_SEPARATOR: char = '_';

/// Returns a copy of `map` where every key containing [`SOURCE_SEPARATOR`]
/// is also present under its [`CANONICAL_SEPARATOR`] spelling
///
/// When both spellings already exist, the dashed value wins. Only top-level
/// keys are rewritten.
#[must_use]
pub fn normalize_keys(map: &Map<String, Value>) -> Map<String, Value> {
    let mut normalized = map.clone();
    for (key, value) in map {
        if key.contains(SOURCE_SEPARATOR) {
            let canonical = key.replace(SOURCE_SEPARATOR, &CANONICAL_SEPARATOR.to_string());
            normalized.insert(canonical, value.clone());
        }
    }
    normalized
}

/// Applies [`normalize_keys`] to an object; other values are returned as is
#[must_use]
pub fn normalize_variant(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(normalize_keys(map)),
        other => other.clone(),
    }
}
