use crate::value::Value;
use ulid::Ulid;

///
/// FieldValues
///
/// Runtime field-read capability of an entity: expose a field's value by
/// its registered name. Returning `None` means the field does not exist on
/// the entity, which predicate evaluation treats as a non-match.
///

pub trait FieldValues {
    fn get_value(&self, field: &str) -> Option<Value>;
}

///
/// EntityIdentity
///
/// Semantic primary-key metadata about an entity.
///

pub trait EntityIdentity {
    const ENTITY_NAME: &'static str;
    const PRIMARY_KEY: &'static str;

    fn id(&self) -> Ulid;
}
