use crate::{
    query::{FieldMap, Predicate},
    traits::{EntityIdentity, FieldValues},
    value::Value,
};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use ulid::Ulid;

/// Column names registered in the catalog field map.
pub mod fields {
    pub const ID: &str = "id";
    pub const CODE: &str = "code";
    pub const NAME: &str = "name";
    pub const VALUE: &str = "value";
    pub const DETAIL: &str = "detail";
    pub const FATHER_CODE: &str = "father_code";
    pub const IS_FATHER: &str = "is_father";
    pub const STATUS_ID: &str = "status_id";
}

///
/// CatalogEntity
///
/// One entry of the two-level catalog hierarchy. A father entry has no
/// `father_code`; a child entry references its father through it. The XOR
/// between `is_father` and `father_code` is enforced by the validation
/// engine before any write.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CatalogEntity {
    pub id: Ulid,
    /// Numeric code, unique within its scope.
    pub code: i64,
    pub name: String,
    pub value: String,
    pub detail: Option<String>,
    /// Present iff the entry is a child.
    pub father_code: Option<i64>,
    pub is_father: bool,
    /// Non-owning reference to an externally-owned status.
    pub status_id: Ulid,
}

static CATALOG_FIELDS: LazyLock<FieldMap<CatalogEntity>> = LazyLock::new(|| {
    FieldMap::new(|e: &CatalogEntity| Value::Id(e.id))
        .field(fields::ID, |e| Value::Id(e.id))
        .field(fields::CODE, |e| Value::Int(e.code))
        .searchable(fields::NAME, |e| Value::from(e.name.clone()))
        .searchable(fields::VALUE, |e| Value::from(e.value.clone()))
        .searchable(fields::DETAIL, |e| Value::from(e.detail.clone()))
        .field(fields::FATHER_CODE, |e| Value::from(e.father_code))
        .field(fields::IS_FATHER, |e| Value::Bool(e.is_father))
        .field(fields::STATUS_ID, |e| Value::Id(e.status_id))
});

impl CatalogEntity {
    /// Queryable columns and their accessors.
    #[must_use]
    pub fn field_map() -> &'static FieldMap<Self> {
        &CATALOG_FIELDS
    }

    /// Point-read expression by identity.
    #[must_use]
    pub fn by_id(id: Ulid) -> Predicate {
        Predicate::eq(fields::ID, id)
    }

    /// Point-read expression by code.
    #[must_use]
    pub fn by_code(code: i64) -> Predicate {
        Predicate::eq(fields::CODE, code)
    }

    /// Children of the given father.
    #[must_use]
    pub fn children_of(father_code: i64) -> Predicate {
        Predicate::eq(fields::FATHER_CODE, father_code)
    }

    /// The father row carrying the given code.
    #[must_use]
    pub fn father_by_code(code: i64) -> Predicate {
        Predicate::eq(fields::CODE, code) & Predicate::eq(fields::IS_FATHER, true)
    }

    /// Uniqueness probe: same name within the same father scope.
    #[must_use]
    pub fn by_name_in_scope(name: &str, father_code: Option<i64>) -> Predicate {
        Predicate::eq(fields::NAME, name)
            & Predicate::eq(fields::FATHER_CODE, Value::from(father_code))
    }
}

impl FieldValues for CatalogEntity {
    fn get_value(&self, field: &str) -> Option<Value> {
        Self::field_map().accessor(field).map(|get| get(self))
    }
}

impl EntityIdentity for CatalogEntity {
    const ENTITY_NAME: &'static str = "catalog";
    const PRIMARY_KEY: &'static str = fields::ID;

    fn id(&self) -> Ulid {
        self.id
    }
}
