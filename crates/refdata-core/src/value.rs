use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use ulid::Ulid;

///
/// TextMode
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TextMode {
    Cs, // case-sensitive
    Ci, // case-insensitive
}

///
/// Value
///
/// Compact dynamic value used by predicates, field accessors, and error
/// payloads. The derived `Ord` gives every value a deterministic total
/// order (variant rank first, then payload), so ordering a result set by
/// any registered field is stable regardless of the field's type.
///

#[derive(Clone, Debug, Deserialize, Eq, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Text(String),
    Id(Ulid),
    List(Vec<Value>),
}

impl Value {
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_id(&self) -> Option<Ulid> {
        match self {
            Self::Id(id) => Some(*id),
            _ => None,
        }
    }

    /// Substring containment between two text values.
    ///
    /// Returns `None` when either side is not text; callers treat that as
    /// a non-match.
    #[must_use]
    pub fn text_contains(&self, needle: &Self, mode: TextMode) -> Option<bool> {
        let haystack = self.as_text()?;
        let needle = needle.as_text()?;

        let matched = match mode {
            TextMode::Cs => haystack.contains(needle),
            TextMode::Ci => haystack.to_lowercase().contains(&needle.to_lowercase()),
        };

        Some(matched)
    }

    /// Equality between two values, defined only within a variant.
    ///
    /// `None` means the comparison itself is invalid (cross-variant), which
    /// is distinct from `Some(false)`.
    #[must_use]
    pub fn compare_eq(&self, other: &Self) -> Option<bool> {
        self.compare_order(other).map(Ordering::is_eq)
    }

    /// Ordering between two values, defined only within a variant.
    #[must_use]
    pub fn compare_order(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Null, Self::Null) => Some(Ordering::Equal),
            (Self::Bool(a), Self::Bool(b)) => Some(a.cmp(b)),
            (Self::Int(a), Self::Int(b)) => Some(a.cmp(b)),
            (Self::Text(a), Self::Text(b)) => Some(a.cmp(b)),
            (Self::Id(a), Self::Id(b)) => Some(a.cmp(b)),
            (Self::List(a), Self::List(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Ulid> for Value {
    fn from(v: Ulid) -> Self {
        Self::Id(v)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}
