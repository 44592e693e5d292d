use crate::{
    query::{
        eval::{Row, eval},
        field_map::FieldMap,
        predicate::Predicate,
        request::{PageRequest, SortOrder},
    },
    value::Value,
};
use derive_more::{Deref, DerefMut};
use std::{collections::BTreeMap, marker::PhantomData};

/// Virtual column carrying resolved status activity.
///
/// Entities hold only a `status_id`; activity lives behind the status
/// resolver. Storage adapters materialize this field on the rows they
/// evaluate so the active-only predicate stays pure.
pub const STATUS_ACTIVE_FIELD: &str = "status_active";

///
/// OrderDirection
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OrderDirection {
    Asc,
    Desc,
}

impl From<SortOrder> for OrderDirection {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Ascending => Self::Asc,
            SortOrder::Descending => Self::Desc,
        }
    }
}

///
/// OrderSpec
///
/// The single active ordering of a compiled query: a registered column, or
/// the identity fallback when the requested column was empty or unknown.
/// Ascending and descending are mutually exclusive by construction.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct OrderSpec {
    field: Option<&'static str>,
    direction: OrderDirection,
}

impl OrderSpec {
    /// Deterministic fallback: identity ascending.
    pub(crate) const IDENTITY_ASC: Self = Self {
        field: None,
        direction: OrderDirection::Asc,
    };

    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        self.field
    }

    #[must_use]
    pub const fn direction(&self) -> OrderDirection {
        self.direction
    }

    #[must_use]
    pub const fn is_identity_fallback(&self) -> bool {
        self.field.is_none()
    }
}

///
/// PageSpec
///
/// Skip/take window, always applied after predicate and ordering are fixed.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PageSpec {
    pub offset: u32,
    pub limit: u32,
}

impl PageSpec {
    /// Apply the window to an ordered row set.
    pub(crate) fn apply<E>(self, rows: &mut Vec<E>) {
        let offset = self.offset as usize;
        if offset >= rows.len() {
            rows.clear();
            return;
        }
        rows.drain(..offset);
        rows.truncate(self.limit as usize);
    }
}

///
/// AdditionalFilters
///
/// Column filters that were matched against the field map, keyed by column
/// with their exact supplied value sets. Unknown columns never appear here.
///

#[derive(Clone, Debug, Default, Deref, DerefMut, Eq, PartialEq)]
pub struct AdditionalFilters(BTreeMap<String, Vec<Value>>);

///
/// QuerySpec
///
/// Immutable, compiled descriptor of one collection query: predicate,
/// ordering, paging window, and the recorded column filters. Built once per
/// request against an entity's field map and then handed to a repository.
///

#[derive(Clone, Debug)]
pub struct QuerySpec<E> {
    predicate: Predicate,
    order: OrderSpec,
    page: PageSpec,
    additional_filters: AdditionalFilters,
    _marker: PhantomData<fn(&E)>,
}

impl<E> QuerySpec<E> {
    /// Compile a request against the entity's field map.
    #[must_use]
    pub fn build(request: &PageRequest, fields: &FieldMap<E>) -> Self {
        let order = compile_order(request, fields);
        let mut additional_filters = AdditionalFilters::default();
        let mut clauses = Vec::new();

        if let Some(search) = compile_search(request, fields) {
            clauses.push(search);
        }

        for clause in &request.filters {
            // Unknown or empty columns are skipped, never rejected.
            if clause.column.is_empty() || !fields.contains(&clause.column) {
                continue;
            }
            additional_filters.insert(clause.column.clone(), clause.values.clone());
            clauses.push(Predicate::in_(clause.column.clone(), clause.values.clone()));
        }

        if request.active_only {
            clauses.push(Predicate::eq(STATUS_ACTIVE_FIELD, true));
        }

        let predicate = match clauses.len() {
            0 => Predicate::True,
            1 => clauses.remove(0),
            _ => Predicate::And(clauses),
        };

        Self {
            predicate,
            order,
            page: PageSpec {
                offset: request.first,
                limit: request.rows,
            },
            additional_filters,
            _marker: PhantomData,
        }
    }

    #[must_use]
    pub const fn predicate(&self) -> &Predicate {
        &self.predicate
    }

    #[must_use]
    pub const fn order(&self) -> OrderSpec {
        self.order
    }

    #[must_use]
    pub const fn page(&self) -> PageSpec {
        self.page
    }

    #[must_use]
    pub const fn additional_filters(&self) -> &AdditionalFilters {
        &self.additional_filters
    }

    /// Evaluate the compiled predicate against one row.
    #[must_use]
    pub fn matches<R: Row + ?Sized>(&self, row: &R) -> bool {
        eval(row, &self.predicate)
    }

    /// Sort rows by the compiled ordering.
    ///
    /// Ascending is a stable sort on the ordering key; descending is its
    /// exact reversal, so the two directions always return the same
    /// multiset reversed.
    pub fn sort(&self, fields: &FieldMap<E>, rows: &mut [E]) {
        let accessor = match self.order.field {
            Some(key) => fields
                .accessor(key)
                .unwrap_or_else(|| fields.identity_accessor()),
            None => fields.identity_accessor(),
        };

        rows.sort_by_key(|row| accessor(row));
        if self.order.direction == OrderDirection::Desc {
            rows.reverse();
        }
    }

    /// Apply the paging window to an already-ordered row set.
    pub fn paginate(&self, rows: &mut Vec<E>) {
        self.page.apply(rows);
    }
}

/// Ordering: a known, non-empty sort field in the requested direction;
/// anything else falls back to identity ascending so pagination stays
/// deterministic for unrecognized input.
fn compile_order<E>(request: &PageRequest, fields: &FieldMap<E>) -> OrderSpec {
    if request.sort_field.is_empty() {
        return OrderSpec::IDENTITY_ASC;
    }

    // Key resolution goes through the map so the 'static key is reused.
    let Some(key) = fields.keys().find(|key| *key == request.sort_field) else {
        return OrderSpec::IDENTITY_ASC;
    };

    OrderSpec {
        field: Some(key),
        direction: request.sort_order.into(),
    }
}

/// Free-text search: OR of case-insensitive containment over the
/// searchable subset, absent when the search text or subset is empty.
fn compile_search<E>(request: &PageRequest, fields: &FieldMap<E>) -> Option<Predicate> {
    if request.search.is_empty() {
        return None;
    }

    let terms: Vec<Predicate> = fields
        .searchable_keys()
        .map(|key| Predicate::text_contains_ci(key, request.search.as_str()))
        .collect();

    match terms.len() {
        0 => None,
        1 => terms.into_iter().next(),
        _ => Some(Predicate::Or(terms)),
    }
}
