use crate::value::Value;
use serde::{Deserialize, Serialize};

///
/// SortOrder
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

///
/// FilterClause
///
/// One column filter from the caller: a column name and the set of values
/// to match (OR within the clause). Column names are untrusted input and
/// are matched against the entity's field map at build time.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FilterClause {
    pub column: String,
    pub values: Vec<Value>,
}

impl FilterClause {
    #[must_use]
    pub fn new(column: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            column: column.into(),
            values,
        }
    }
}

///
/// PageRequest
///
/// Untyped pagination/sort/filter request as it arrives from a caller.
/// Constructed per incoming request and discarded after the spec is built.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct PageRequest {
    /// Offset of the first row to return.
    pub first: u32,
    /// Page size.
    pub rows: u32,
    /// Free-text search, may be empty.
    pub search: String,
    /// Requested sort column; may be empty or unknown.
    pub sort_field: String,
    pub sort_order: SortOrder,
    /// Ordered column filters.
    pub filters: Vec<FilterClause>,
    /// Restrict to rows whose status resolves as active.
    pub active_only: bool,
}

impl PageRequest {
    /// A request for one page with default sort and no filters.
    #[must_use]
    pub fn window(first: u32, rows: u32) -> Self {
        Self {
            first,
            rows,
            ..Self::default()
        }
    }
}
