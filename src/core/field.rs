//! Structured key/value fields
//!
//! Keyed logging calls carry a message plus a list of [`Field`]s. Older call
//! sites pass a flat sequence alternating key and value instead; [`pair_fields`]
//! turns such a sequence into fields without ever failing:
//!
//! - a trailing unpaired element becomes the *value* of a field named
//!   `@logfield-NN`, where `NN` is the total number of pairs
//! - a [`FieldValue::Null`] key is replaced by `@logfield-NN`, where `NN` is the
//!   1-based position of its pair
//!
//! ```
//! use rust_level_logger::core::field::{fields_to_map, FieldValue};
//! use rust_level_logger::kv;
//!
//! let map = fields_to_map(&kv!["a", 1, "b"]);
//! assert_eq!(map.len(), 2);
//! assert!(matches!(map.get("@logfield-02"), Some(FieldValue::String(s)) if s == "b"));
//! ```

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Prefix of synthesized field names
pub const UNKNOWN_FIELD_NAME: &str = "@logfield";

/// Value type for structured logging fields
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    String(String),
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
    Time(DateTime<Utc>),
    /// Text of a value with a string representation of its own
    Display(String),
    /// Generic text of any other value
    Debug(String),
}

impl FieldValue {
    /// Capture a value through its `Display` impl; rendered quoted
    pub fn display<T: fmt::Display + ?Sized>(value: &T) -> Self {
        FieldValue::Display(value.to_string())
    }

    /// Capture a value through its `Debug` impl; rendered bare
    pub fn debug<T: fmt::Debug + ?Sized>(value: &T) -> Self {
        FieldValue::Debug(format!("{:?}", value))
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Convert to serde_json::Value for JSON serialization
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            FieldValue::Null => serde_json::Value::Null,
            FieldValue::String(s) | FieldValue::Display(s) | FieldValue::Debug(s) => {
                serde_json::Value::String(s.clone())
            }
            FieldValue::Int(i) => serde_json::Value::Number((*i).into()),
            FieldValue::Uint(u) => serde_json::Value::Number((*u).into()),
            FieldValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            FieldValue::Bool(b) => serde_json::Value::Bool(*b),
            FieldValue::Time(_) => serde_json::Value::String(as_string(self).0),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&as_string(self).0)
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<&String> for FieldValue {
    fn from(s: &String) -> Self {
        FieldValue::String(s.clone())
    }
}

macro_rules! impl_from_int {
    ($variant:ident, $target:ty, $($t:ty),+) => {
        $(
            impl From<$t> for FieldValue {
                fn from(v: $t) -> Self {
                    FieldValue::$variant(v as $target)
                }
            }
        )+
    };
}

impl_from_int!(Int, i64, i8, i16, i32, i64, isize);
impl_from_int!(Uint, u64, u8, u16, u32, u64, usize);

impl From<f32> for FieldValue {
    fn from(f: f32) -> Self {
        FieldValue::Float(f64::from(f))
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(t: DateTime<Utc>) -> Self {
        FieldValue::Time(t)
    }
}

impl From<()> for FieldValue {
    fn from(_: ()) -> Self {
        FieldValue::Null
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(FieldValue::Null, Into::into)
    }
}

/// A named structured field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub key: String,
    pub value: FieldValue,
}

impl Field {
    pub fn new<K, V>(key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Render a value as text, flagging whether it is string-like.
///
/// String-like values (null, strings, times, `Display` captures) are the ones
/// consumers quote; numbers, booleans and `Debug` captures stay bare.
pub fn as_string(value: &FieldValue) -> (String, bool) {
    match value {
        FieldValue::Null => (String::new(), true),
        FieldValue::String(s) | FieldValue::Display(s) => (s.clone(), true),
        FieldValue::Time(t) => (t.to_rfc3339_opts(SecondsFormat::Secs, true), true),
        FieldValue::Int(i) => (i.to_string(), false),
        FieldValue::Uint(u) => (u.to_string(), false),
        FieldValue::Float(f) => (f.to_string(), false),
        FieldValue::Bool(b) => (b.to_string(), false),
        FieldValue::Debug(s) => (s.clone(), false),
    }
}

/// Like [`as_string`], double-quoting string-like values with standard escaping
pub fn as_string_quoted(value: &FieldValue) -> String {
    match as_string(value) {
        (s, true) => format!("{:?}", s),
        (s, false) => s,
    }
}

/// Synthesized name for the pair at 1-based position `index`
pub fn unknown_field_name(index: usize) -> String {
    format!("{}-{:02}", UNKNOWN_FIELD_NAME, index)
}

/// Pair a flat key/value sequence into fields, preserving order.
pub fn pair_fields(key_vals: &[FieldValue]) -> Vec<Field> {
    let pairs = (key_vals.len() + 1) / 2;
    let mut fields = Vec::with_capacity(pairs);

    let mut chunks = key_vals.chunks_exact(2);
    for (idx, pair) in chunks.by_ref().enumerate() {
        let key = match &pair[0] {
            FieldValue::Null => unknown_field_name(idx + 1),
            other => as_string(other).0,
        };
        fields.push(Field {
            key,
            value: pair[1].clone(),
        });
    }

    // odd length: the lone trailing element is a value
    if let [value] = chunks.remainder() {
        fields.push(Field {
            key: unknown_field_name(pairs),
            value: value.clone(),
        });
    }

    fields
}

/// `msg` followed by ` key<sep>value` for each field, values quoted as by
/// [`as_string_quoted`]
pub fn format_fields(msg: &str, fields: &[Field], sep: char) -> String {
    let mut out = String::from(msg);
    for field in fields {
        out.push(' ');
        out.push_str(&field.key);
        out.push(sep);
        out.push_str(&as_string_quoted(&field.value));
    }
    out
}

/// [`format_fields`] over a flat key/value sequence
pub fn simple_format(msg: &str, key_vals: &[FieldValue], sep: char) -> String {
    format_fields(msg, &pair_fields(key_vals), sep)
}

/// Field name → raw value; a repeated name keeps its last value
pub fn fields_to_map(key_vals: &[FieldValue]) -> HashMap<String, FieldValue> {
    pair_fields(key_vals)
        .into_iter()
        .map(|f| (f.key, f.value))
        .collect()
}

/// Names and values as two parallel vectors, in original order with
/// duplicates retained
pub fn separate_fields(key_vals: &[FieldValue]) -> (Vec<String>, Vec<FieldValue>) {
    pair_fields(key_vals)
        .into_iter()
        .map(|f| (f.key, f.value))
        .unzip()
}
