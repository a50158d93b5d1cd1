// ── Field values ──
//
// The dynamic value shape accepted by setters and kept in the per-field
// store. Multi-valued fields keep their elements as a list; the
// space-joined wire form only exists at serialization time.

use serde::{Deserialize, Serialize};

/// A value assigned to (or stored in) a resource field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Int(i64),
    Text(String),
    List(Vec<FieldValue>),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// The device representation of this value.
    ///
    /// Lists become a space-separated token string with a trailing space
    /// (`[14, 19]` → `"14 19 "`), which is what FortiOS echoes back for
    /// multi-valued attributes.
    pub fn to_wire_string(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Int(n) => n.to_string(),
            Self::List(items) => items.iter().fold(String::new(), |mut acc, item| {
                acc.push_str(&item.to_wire_string());
                acc.push(' ');
                acc
            }),
        }
    }

    /// Human rendering for error messages: text is quoted so `"1"` and `1`
    /// stay distinguishable.
    pub fn describe(&self) -> String {
        match self {
            Self::Text(s) => format!("{s:?}"),
            Self::Int(n) => n.to_string(),
            Self::List(items) => {
                let inner: Vec<String> = items.iter().map(Self::describe).collect();
                format!("[{}]", inner.join(", "))
            }
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&String> for FieldValue {
    fn from(s: &String) -> Self {
        Self::Text(s.clone())
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<u16> for FieldValue {
    fn from(n: u16) -> Self {
        Self::Int(i64::from(n))
    }
}

impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<FieldValue>, const N: usize> From<[T; N]> for FieldValue {
    fn from(items: [T; N]) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}
