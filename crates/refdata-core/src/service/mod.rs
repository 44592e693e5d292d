//! Validation engines: request-scoped orchestration around the repository
//! contracts, run ahead of every mutation.

pub mod catalog;
pub mod integration;
pub mod process;
pub mod relation;

pub use catalog::CatalogService;
pub use integration::IntegrationService;
pub use process::ProcessService;
pub use relation::{ReferenceProbe, RelationshipChecker};
