use serde::{Deserialize, Serialize};
use ulid::Ulid;

///
/// StatusEntity
///
/// Externally-owned status record. Consumers hold a non-owning `status_id`
/// and ask the resolver whether it is active; activity is never stored on
/// the referencing entity.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct StatusEntity {
    pub id: Ulid,
    /// Symbolic name, e.g. `ACTIVE`.
    pub key: String,
}

impl StatusEntity {
    #[must_use]
    pub fn new(id: Ulid, key: impl Into<String>) -> Self {
        Self {
            id,
            key: key.into(),
        }
    }
}
