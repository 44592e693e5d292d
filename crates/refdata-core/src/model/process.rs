use crate::{
    query::{FieldMap, Predicate},
    traits::{EntityIdentity, FieldValues},
    value::Value,
};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use ulid::Ulid;

pub mod fields {
    pub const ID: &str = "id";
    pub const CODE: &str = "code";
    pub const NAME: &str = "name";
    pub const PROCESS_TYPE_ID: &str = "process_type_id";
    pub const STATUS_ID: &str = "status_id";
}

///
/// ProcessEntity
///
/// A configured process. Its code is assigned by the code generator on
/// insert and is unique per module.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ProcessEntity {
    pub id: Ulid,
    /// Generated module-scoped code, e.g. `P001`.
    pub code: String,
    pub name: String,
    pub process_type_id: Ulid,
    pub status_id: Ulid,
}

static PROCESS_FIELDS: LazyLock<FieldMap<ProcessEntity>> = LazyLock::new(|| {
    FieldMap::new(|e: &ProcessEntity| Value::Id(e.id))
        .field(fields::ID, |e| Value::Id(e.id))
        .searchable(fields::CODE, |e| Value::from(e.code.clone()))
        .searchable(fields::NAME, |e| Value::from(e.name.clone()))
        .field(fields::PROCESS_TYPE_ID, |e| Value::Id(e.process_type_id))
        .field(fields::STATUS_ID, |e| Value::Id(e.status_id))
});

impl ProcessEntity {
    #[must_use]
    pub fn field_map() -> &'static FieldMap<Self> {
        &PROCESS_FIELDS
    }

    #[must_use]
    pub fn by_id(id: Ulid) -> Predicate {
        Predicate::eq(fields::ID, id)
    }

    #[must_use]
    pub fn by_code(code: &str) -> Predicate {
        Predicate::eq(fields::CODE, code)
    }

    #[must_use]
    pub fn by_type(process_type_id: Ulid) -> Predicate {
        Predicate::eq(fields::PROCESS_TYPE_ID, process_type_id)
    }
}

impl FieldValues for ProcessEntity {
    fn get_value(&self, field: &str) -> Option<Value> {
        Self::field_map().accessor(field).map(|get| get(self))
    }
}

impl EntityIdentity for ProcessEntity {
    const ENTITY_NAME: &'static str = "process";
    const PRIMARY_KEY: &'static str = fields::ID;

    fn id(&self) -> Ulid {
        self.id
    }
}
