use crate::{
    traits::{EntityIdentity, FieldValues},
    value::Value,
};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

pub mod fields {
    pub const ID: &str = "id";
    pub const NAME: &str = "name";
    pub const STATUS_ID: &str = "status_id";
}

/// Fewest processes a valid integration may reference.
pub const MIN_PROCESSES: usize = 2;

/// Longest allowed observations text.
pub const MAX_OBSERVATIONS_LEN: usize = 255;

///
/// IntegrationEntity
///
/// Composite entity wiring several processes together. Field rules
/// (minimum process count, observation length) are enforced by its engine.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct IntegrationEntity {
    pub id: Ulid,
    pub name: String,
    /// Referenced processes; at least [`MIN_PROCESSES`].
    pub process: Vec<Ulid>,
    /// Free-form notes; at most [`MAX_OBSERVATIONS_LEN`] characters.
    pub observations: Option<String>,
    pub status_id: Ulid,
}

impl FieldValues for IntegrationEntity {
    fn get_value(&self, field: &str) -> Option<Value> {
        match field {
            fields::ID => Some(Value::Id(self.id)),
            fields::NAME => Some(Value::from(self.name.clone())),
            fields::STATUS_ID => Some(Value::Id(self.status_id)),
            _ => None,
        }
    }
}

impl EntityIdentity for IntegrationEntity {
    const ENTITY_NAME: &'static str = "integration";
    const PRIMARY_KEY: &'static str = fields::ID;

    fn id(&self) -> Ulid {
        self.id
    }
}
