//! JSON text to and from [`Value`].

use chrono::SecondsFormat;
use serde_json::{Map, Number, Value as Json};
use trove_foundation::{Error, ErrorKind, Record, Result, Value};

/// Nesting limit for [`to_json`]; deeper input is treated as cyclic.
const MAX_DEPTH: usize = 256;

/// Parses JSON text into a value. Objects become plain records with their
/// keys in document order.
///
/// # Errors
///
/// Returns [`ErrorKind::ParseError`] with the 1-indexed line and column of
/// the first syntax error.
pub fn parse_json(text: &str) -> Result<Value> {
    let json: Json = serde_json::from_str(text).map_err(|e| parse_error(text, &e))?;
    Ok(from_json(json))
}

fn parse_error(text: &str, e: &serde_json::Error) -> Error {
    let full = e.to_string();
    let message = full
        .rsplit_once(" at line ")
        .map_or(full.as_str(), |(message, _)| message)
        .to_string();
    let line = e.line();
    let context = text
        .lines()
        .nth(line.saturating_sub(1))
        .unwrap_or_default()
        .to_string();

    Error::new(ErrorKind::ParseError {
        message,
        line: u32::try_from(line).unwrap_or(u32::MAX),
        column: u32::try_from(e.column()).unwrap_or(u32::MAX),
        context,
    })
}

fn from_json(json: Json) -> Value {
    match json {
        Json::Null => Value::Null,
        Json::Bool(b) => Value::Bool(b),
        Json::Number(n) => n
            .as_i64()
            .map_or_else(|| Value::Float(n.as_f64().unwrap_or(f64::NAN)), Value::Int),
        Json::String(s) => Value::from(s),
        Json::Array(items) => Value::Seq(items.into_iter().map(from_json).collect()),
        Json::Object(fields) => {
            let record = Record::new();
            for (key, value) in fields {
                record.set(key, from_json(value));
            }
            Value::Record(record)
        }
    }
}

/// Serializes a value as compact JSON.
///
/// Records contribute their enumerable string keys, sets and sequences
/// become arrays, maps become objects when every key is a string, dates
/// become RFC 3339 strings, and non-finite numbers become `null`. Undefined
/// record fields are skipped and undefined sequence items become `null`.
///
/// Returns `None` for functions, symbols, buffers, maps with non-string
/// keys, an undefined top level, and structures nested deeper than the
/// internal limit (which is how cycles surface).
#[must_use]
pub fn to_json(value: &Value) -> Option<String> {
    let json = to_json_value(value, 0)??;
    serde_json::to_string(&json).ok()
}

/// `Ok(None)` means "omit" (undefined); `None` means unrepresentable.
fn to_json_value(value: &Value, depth: usize) -> Option<Option<Json>> {
    if depth > MAX_DEPTH {
        return None;
    }
    let json = match value {
        Value::Undefined => return Some(None),
        Value::Null => Json::Null,
        Value::Bool(b) => Json::Bool(*b),
        Value::Int(n) => Json::from(*n),
        Value::Float(n) => Number::from_f64(*n).map_or(Json::Null, Json::Number),
        Value::String(s) => Json::String(s.to_string()),
        Value::Date(d) => Json::String(d.to_rfc3339_opts(SecondsFormat::Millis, true)),
        Value::Pattern(p) => Json::String(p.to_string()),
        Value::Seq(seq) => items_to_json(&seq.to_vec(), depth)?,
        Value::Set(set) => items_to_json(&set.snapshot().into_iter().collect::<Vec<_>>(), depth)?,
        Value::Map(map) => {
            let mut object = Map::new();
            for (key, item) in &map.snapshot() {
                let key = key.as_str()?;
                if let Some(json) = to_json_value(item, depth + 1)? {
                    object.insert(key.to_string(), json);
                }
            }
            Json::Object(object)
        }
        Value::Record(record) => {
            let mut object = Map::new();
            for key in record.keys() {
                let item = record.get(&key).unwrap_or_default();
                if let Some(json) = to_json_value(&item, depth + 1)? {
                    object.insert(key.to_string(), json);
                }
            }
            Json::Object(object)
        }
        Value::Symbol(_) | Value::Fn(_) | Value::Buffer(_) => return None,
    };
    Some(Some(json))
}

fn items_to_json(items: &[Value], depth: usize) -> Option<Json> {
    let mut array = Vec::with_capacity(items.len());
    for item in items {
        array.push(to_json_value(item, depth + 1)?.unwrap_or(Json::Null));
    }
    Some(Json::Array(array))
}
