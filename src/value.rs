//! Dynamic values exchanged between test code and the assertion library.
//!
//! Assertions compare host-style values, so equality comes in two
//! strengths: [`Value::loose_eq`] coerces across types the way a dynamic
//! host compares with `==`, while the derived `PartialEq` (`==` in Rust)
//! is the strict, identity-style comparison behind `assert_identical`.

use im::HashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A dynamically typed value.
///
/// `Undefined` is the default, mirroring the "absent member" sentinel of
/// the host environments this framework embeds into; `Null` is the
/// distinct deliberate-absence sentinel. The two are loosely equal to each
/// other and strictly equal only to themselves.
///
/// # Examples
///
/// ```rust
/// use pariksha::Value;
/// let n = Value::Number(3.14);
/// assert_eq!(n.type_name(), "Number");
/// assert!(Value::Null.loose_eq(&Value::Undefined));
/// assert_ne!(Value::Null, Value::Undefined);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    List(Vec<Value>),
    Map(HashMap<String, Value>),
}

impl Value {
    /// Builds a `Map` value from key/value pairs.
    ///
    /// ```rust
    /// use pariksha::Value;
    /// let v = Value::map([("answer", 42)]);
    /// assert_eq!(v.to_string(), "{answer: 42}");
    /// ```
    pub fn map<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Value
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Value::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Returns the type name of the value as a string.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "Undefined",
            Value::Null => "Null",
            Value::Bool(_) => "Bool",
            Value::Number(_) => "Number",
            Value::String(_) => "String",
            Value::List(_) => "List",
            Value::Map(_) => "Map",
        }
    }

    /// Returns true if the value is `Undefined`.
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Returns true if the value is `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the contained number if this is a `Number` value.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the contained bool if this is a `Bool` value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the contained string if this is a `String` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the contained list if this is a `List` value.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Truthiness under host rules: `false`, `0`, `NaN`, the empty string,
    /// `Null`, and `Undefined` are falsy; everything else — including
    /// empty lists and maps — is truthy.
    pub fn truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::String(s) => !s.is_empty(),
            Value::List(_) | Value::Map(_) => true,
        }
    }

    /// Type-coercing equality, the `==` of the host environment.
    ///
    /// Rules, applied in order:
    /// - `Null` and `Undefined` are equal to each other and to themselves,
    ///   and to nothing else;
    /// - same-type scalars compare directly (`NaN` is never equal);
    /// - a `Bool` coerces to `0`/`1` and the comparison restarts;
    /// - `Number` vs `String` parses the string as a number (empty or
    ///   all-whitespace text parses as `0`; unparsable text compares
    ///   unequal to everything);
    /// - lists and maps compare structurally, element-by-element with
    ///   loose equality. Value types carry no identity, so the reference
    ///   comparison a host would perform has no counterpart here.
    pub fn loose_eq(&self, other: &Value) -> bool {
        use Value::*;
        match (self, other) {
            (Undefined | Null, Undefined | Null) => true,
            (Undefined | Null, _) | (_, Undefined | Null) => false,
            (Number(a), Number(b)) => a == b,
            (String(a), String(b)) => a == b,
            (Bool(a), _) => Number(f64::from(u8::from(*a))).loose_eq(other),
            (_, Bool(b)) => self.loose_eq(&Number(f64::from(u8::from(*b)))),
            (Number(a), String(s)) | (String(s), Number(a)) => match parse_number(s) {
                Some(b) => *a == b,
                None => false,
            },
            (List(a), List(b)) => a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.loose_eq(y)),
            (Map(a), Map(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .all(|(k, v)| b.get(k).map_or(false, |w| v.loose_eq(w)))
            }
            _ => false,
        }
    }

    fn fmt_list(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", item)?;
        }
        Ok(())
    }

    fn fmt_map(f: &mut fmt::Formatter<'_>, map: &HashMap<String, Value>) -> fmt::Result {
        // im::HashMap iteration order is unspecified; sort so generated
        // assertion messages are deterministic.
        let mut keys: Vec<&String> = map.keys().collect();
        keys.sort();
        write!(f, "{{")?;
        for (i, key) in keys.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", key, map[*key])?;
        }
        write!(f, "}}")
    }
}

/// Host-style numeric parsing: empty or all-whitespace text is `0`,
/// anything `f64` can parse (including exponent notation) is itself,
/// everything else is unparsable.
fn parse_number(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok()
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => {
                if n.is_infinite() {
                    write!(f, "{}Infinity", if *n < 0.0 { "-" } else { "" })
                } else if n.fract() == 0.0 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            Value::String(s) => write!(f, "{}", s),
            Value::List(items) => Value::fmt_list(f, items),
            Value::Map(map) => Value::fmt_map(f, map),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}
