use crate::value::Value;
use std::collections::BTreeMap;

/// Typed accessor from an entity to the dynamic value of one field.
pub type Accessor<E> = fn(&E) -> Value;

///
/// FieldSpec
///

pub struct FieldSpec<E> {
    accessor: Accessor<E>,
    searchable: bool,
}

///
/// FieldMap
///
/// Compile-time registry of an entity's queryable columns: string key to
/// typed accessor, with a searchable subset for free-text predicates and a
/// dedicated identity accessor for fallback ordering. Replaces by-name
/// reflection: lookups of unknown keys simply return nothing, which is what
/// gives the query builder its permissive ignore-unknown-column policy.
///

pub struct FieldMap<E> {
    identity: Accessor<E>,
    fields: BTreeMap<&'static str, FieldSpec<E>>,
}

impl<E> FieldMap<E> {
    /// Start a map from the entity's identity accessor.
    #[must_use]
    pub const fn new(identity: Accessor<E>) -> Self {
        Self {
            identity,
            fields: BTreeMap::new(),
        }
    }

    /// Register a sortable/filterable column.
    #[must_use]
    pub fn field(mut self, key: &'static str, accessor: Accessor<E>) -> Self {
        self.fields.insert(
            key,
            FieldSpec {
                accessor,
                searchable: false,
            },
        );
        self
    }

    /// Register a column that also participates in free-text search.
    #[must_use]
    pub fn searchable(mut self, key: &'static str, accessor: Accessor<E>) -> Self {
        self.fields.insert(
            key,
            FieldSpec {
                accessor,
                searchable: true,
            },
        );
        self
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    #[must_use]
    pub fn accessor(&self, key: &str) -> Option<Accessor<E>> {
        self.fields.get(key).map(|spec| spec.accessor)
    }

    #[must_use]
    pub const fn identity_accessor(&self) -> Accessor<E> {
        self.identity
    }

    /// Keys of the searchable subset, in registration-name order.
    pub fn searchable_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields
            .iter()
            .filter(|(_, spec)| spec.searchable)
            .map(|(key, _)| *key)
    }

    /// All registered keys, in name order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.keys().copied()
    }
}
