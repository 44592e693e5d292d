//! Core runtime for Refdata: catalog entities, the pagination query
//! builder, and the referential-integrity engines that gate writes.
#![warn(unreachable_pub)]

pub mod error;
pub mod model;
pub mod query;
pub mod repo;
pub mod service;
pub mod traits;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_support;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, stores, or in-memory helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        model::{CatalogEntity, IntegrationEntity, ProcessEntity, StatusEntity},
        query::{PageRequest, Predicate, QuerySpec, SortOrder},
        traits::{EntityIdentity, FieldValues},
        value::Value,
    };
}
