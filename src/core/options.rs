//! Backend configuration options
//!
//! [`Options`] is an in-memory map handed to [`Constructor::new_with_options`].
//! Keys are backend specific. The typed getters never fail: an absent key or a
//! value of an unrecognized type yields the caller's default.
//!
//! [`Constructor::new_with_options`]: crate::core::Constructor::new_with_options
//!
//! ```
//! use rust_level_logger::Options;
//!
//! let op = Options::new()
//!     .with("timestampFormat", "%H:%M:%S")
//!     .with("disableColor", "yes")
//!     .with("depth", 3_u16);
//!
//! assert_eq!(op.get_string("timestampFormat", "x"), "%H:%M:%S");
//! assert!(op.get_bool("disableColor", false));
//! assert_eq!(op.get_int("depth", 0), 3);
//! assert_eq!(op.get_int("missing", 9), 9);
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

#[derive(Clone)]
pub enum OptionValue {
    Str(String),
    /// Any value with a string representation
    Stringer(Arc<dyn fmt::Display + Send + Sync>),
    I8(i8),
    U8(u8),
    I16(i16),
    U16(u16),
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    Bool(bool),
    Float(f64),
    Map(Options),
}

impl OptionValue {
    pub fn stringer<T: fmt::Display + Send + Sync + 'static>(value: T) -> Self {
        OptionValue::Stringer(Arc::new(value))
    }

    fn text(&self) -> Option<String> {
        match self {
            OptionValue::Str(s) => Some(s.clone()),
            OptionValue::Stringer(d) => Some(d.to_string()),
            _ => None,
        }
    }

    /// Integer widths up to 32 bits
    fn narrow_int(&self) -> Option<i64> {
        match *self {
            OptionValue::I8(v) => Some(i64::from(v)),
            OptionValue::U8(v) => Some(i64::from(v)),
            OptionValue::I16(v) => Some(i64::from(v)),
            OptionValue::U16(v) => Some(i64::from(v)),
            OptionValue::I32(v) => Some(i64::from(v)),
            OptionValue::U32(v) => Some(i64::from(v)),
            _ => None,
        }
    }
}

impl fmt::Debug for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Str(s) => f.debug_tuple("Str").field(s).finish(),
            OptionValue::Stringer(d) => f.debug_tuple("Stringer").field(&d.to_string()).finish(),
            OptionValue::I8(v) => f.debug_tuple("I8").field(v).finish(),
            OptionValue::U8(v) => f.debug_tuple("U8").field(v).finish(),
            OptionValue::I16(v) => f.debug_tuple("I16").field(v).finish(),
            OptionValue::U16(v) => f.debug_tuple("U16").field(v).finish(),
            OptionValue::I32(v) => f.debug_tuple("I32").field(v).finish(),
            OptionValue::U32(v) => f.debug_tuple("U32").field(v).finish(),
            OptionValue::I64(v) => f.debug_tuple("I64").field(v).finish(),
            OptionValue::U64(v) => f.debug_tuple("U64").field(v).finish(),
            OptionValue::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            OptionValue::Float(v) => f.debug_tuple("Float").field(v).finish(),
            OptionValue::Map(m) => f.debug_tuple("Map").field(m).finish(),
        }
    }
}

macro_rules! impl_from_value {
    ($($t:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$t> for OptionValue {
                fn from(v: $t) -> Self {
                    OptionValue::$variant(v)
                }
            }
        )+
    };
}

impl_from_value!(
    String => Str,
    i8 => I8,
    u8 => U8,
    i16 => I16,
    u16 => U16,
    i32 => I32,
    u32 => U32,
    i64 => I64,
    u64 => U64,
    bool => Bool,
    f64 => Float,
    Options => Map,
);

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::Str(s.to_string())
    }
}

impl OptionValue {
    /// Convert a JSON value; arrays and nulls have no option form and yield
    /// `None`. Integers that fit 32 bits are stored narrow so `get_int` sees them.
    pub fn from_json(value: serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Bool(b) => Some(OptionValue::Bool(b)),
            serde_json::Value::Number(n) => Some(if let Some(i) = n.as_i64() {
                match i32::try_from(i) {
                    Ok(narrow) => OptionValue::I32(narrow),
                    Err(_) => match u32::try_from(i) {
                        Ok(narrow) => OptionValue::U32(narrow),
                        Err(_) => OptionValue::I64(i),
                    },
                }
            } else if let Some(u) = n.as_u64() {
                OptionValue::U64(u)
            } else {
                OptionValue::Float(n.as_f64().unwrap_or_default())
            }),
            serde_json::Value::String(s) => Some(OptionValue::Str(s)),
            serde_json::Value::Object(map) => Some(OptionValue::Map(Options::from(map))),
            serde_json::Value::Array(_) | serde_json::Value::Null => None,
        }
    }
}

/// Additional logger configuration, keyed by option name
#[derive(Debug, Clone, Default)]
pub struct Options {
    values: HashMap<String, OptionValue>,
}

impl Options {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<OptionValue>,
    {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<OptionValue>,
    {
        self.values.insert(key.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Raw stored value; `None` when absent
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.values.get(key)
    }

    pub fn get_string(&self, key: &str, def: &str) -> String {
        self.values
            .get(key)
            .and_then(OptionValue::text)
            .unwrap_or_else(|| def.to_string())
    }

    /// Integer value from any width up to 32 bits
    pub fn get_int(&self, key: &str, def: i64) -> i64 {
        self.values
            .get(key)
            .and_then(OptionValue::narrow_int)
            .unwrap_or(def)
    }

    /// Boolean from a bool, any non-zero integer, or the strings `true`/`yes`
    pub fn get_bool(&self, key: &str, def: bool) -> bool {
        let Some(value) = self.values.get(key) else {
            return def;
        };

        match value {
            OptionValue::Bool(b) => *b,
            OptionValue::I64(v) => *v != 0,
            OptionValue::U64(v) => *v != 0,
            OptionValue::Str(_) | OptionValue::Stringer(_) => value
                .text()
                .map(|s| s.eq_ignore_ascii_case("true") || s.eq_ignore_ascii_case("yes"))
                .unwrap_or(def),
            other => other.narrow_int().map(|v| v != 0).unwrap_or(def),
        }
    }

    /// Nested option map
    pub fn get_options(&self, key: &str) -> Option<&Options> {
        match self.values.get(key) {
            Some(OptionValue::Map(m)) => Some(m),
            _ => None,
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for Options {
    fn from(map: serde_json::Map<String, serde_json::Value>) -> Self {
        let values = map
            .into_iter()
            .filter_map(|(k, v)| OptionValue::from_json(v).map(|v| (k, v)))
            .collect();
        Self { values }
    }
}

impl<K: Into<String>, V: Into<OptionValue>> FromIterator<(K, V)> for Options {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
