//! Query side of the domain: untyped page requests compiled into typed,
//! immutable query specifications against a per-entity field map.

pub mod eval;
pub mod field_map;
pub mod predicate;
pub mod request;
pub mod spec;

pub use eval::{FieldPresence, Row, eval};
pub use field_map::{Accessor, FieldMap};
pub use predicate::{CompareOp, ComparePredicate, Predicate};
pub use request::{FilterClause, PageRequest, SortOrder};
pub use spec::{
    AdditionalFilters, OrderDirection, OrderSpec, PageSpec, QuerySpec, STATUS_ACTIVE_FIELD,
};
