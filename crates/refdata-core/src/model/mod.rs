//! Domain entities and their field maps.

pub mod catalog;
pub mod integration;
pub mod process;
pub mod status;

pub use catalog::CatalogEntity;
pub use integration::IntegrationEntity;
pub use process::ProcessEntity;
pub use status::StatusEntity;
