//! In-memory collaborators for engine and query tests: a
//! predicate-evaluating repository with call counters, a fixed status
//! resolver, fixed reference probes, and a sequential code generator.

use crate::{
    error::StoreError,
    model::{StatusEntity, catalog::fields},
    query::{FieldMap, FieldPresence, Predicate, QuerySpec, Row, STATUS_ACTIVE_FIELD, eval},
    repo::{CodeGenerator, Prefix, Repository, StatusResolver},
    service::relation::ReferenceProbe,
    traits::FieldValues,
    value::Value,
};
use std::{
    cell::{Cell, RefCell},
    collections::{BTreeMap, BTreeSet},
    rc::Rc,
};
use ulid::Ulid;

///
/// StatusRow
///
/// Row adapter overlaying resolved status activity on an entity's own
/// fields, so active-only predicates evaluate without the entity storing
/// activity itself.
///

struct StatusRow<'a, E> {
    row: &'a E,
    active: bool,
}

impl<E: FieldValues> Row for StatusRow<'_, E> {
    fn field(&self, name: &str) -> FieldPresence {
        if name == STATUS_ACTIVE_FIELD {
            return FieldPresence::Present(Value::Bool(self.active));
        }

        match self.row.get_value(name) {
            Some(value) => FieldPresence::Present(value),
            None => FieldPresence::Missing,
        }
    }
}

///
/// FixedStatuses
///
/// Status resolver over a fixed id → (status, active) table.
///

#[derive(Default)]
pub struct FixedStatuses {
    statuses: RefCell<BTreeMap<Ulid, (StatusEntity, bool)>>,
}

impl FixedStatuses {
    #[must_use]
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn put(&self, id: Ulid, key: &str, active: bool) {
        self.statuses
            .borrow_mut()
            .insert(id, (StatusEntity::new(id, key), active));
    }
}

impl StatusResolver for FixedStatuses {
    fn get_by_id(&self, id: Ulid) -> Result<Option<StatusEntity>, StoreError> {
        Ok(self
            .statuses
            .borrow()
            .get(&id)
            .map(|(status, _)| status.clone()))
    }

    fn get_by_key(&self, key: &str) -> Result<Option<StatusEntity>, StoreError> {
        Ok(self
            .statuses
            .borrow()
            .values()
            .find(|(status, _)| status.key == key)
            .map(|(status, _)| status.clone()))
    }

    fn is_active(&self, id: Ulid) -> Result<bool, StoreError> {
        Ok(self
            .statuses
            .borrow()
            .get(&id)
            .is_some_and(|(_, active)| *active))
    }
}

impl<T: StatusResolver> StatusResolver for Rc<T> {
    fn get_by_id(&self, id: Ulid) -> Result<Option<StatusEntity>, StoreError> {
        T::get_by_id(self, id)
    }

    fn get_by_key(&self, key: &str) -> Result<Option<StatusEntity>, StoreError> {
        T::get_by_key(self, key)
    }

    fn is_active(&self, id: Ulid) -> Result<bool, StoreError> {
        T::is_active(self, id)
    }
}

///
/// MemoryRepo
///
/// Predicate-evaluating in-memory repository with per-operation call
/// counters. Rows are matched by evaluating predicates and specs through
/// the status-overlay adapter; scans sort with the entity's field map and
/// then apply the paging window, the way a real backend would.
///

pub struct MemoryRepo<E: 'static> {
    rows: RefCell<Vec<E>>,
    fields: &'static FieldMap<E>,
    statuses: Rc<FixedStatuses>,
    inserts: Cell<usize>,
    updates: Cell<usize>,
    deletes: Cell<usize>,
}

impl<E> MemoryRepo<E>
where
    E: FieldValues + Clone,
{
    #[must_use]
    pub fn new(fields: &'static FieldMap<E>, statuses: Rc<FixedStatuses>) -> Self {
        Self {
            rows: RefCell::new(Vec::new()),
            fields,
            statuses,
            inserts: Cell::new(0),
            updates: Cell::new(0),
            deletes: Cell::new(0),
        }
    }

    pub fn seed(&self, entity: E) {
        self.rows.borrow_mut().push(entity);
    }

    #[must_use]
    pub fn insert_calls(&self) -> usize {
        self.inserts.get()
    }

    #[must_use]
    pub fn update_calls(&self) -> usize {
        self.updates.get()
    }

    #[must_use]
    pub fn delete_calls(&self) -> usize {
        self.deletes.get()
    }

    fn row_active(&self, row: &E) -> bool {
        let status_id = row
            .get_value(fields::STATUS_ID)
            .and_then(|value| value.as_id());

        status_id.is_some_and(|id| self.statuses.is_active(id).unwrap_or(false))
    }

    fn matching(&self, filter: &Predicate) -> Vec<E> {
        self.rows
            .borrow()
            .iter()
            .filter(|row| {
                let adapter = StatusRow {
                    row: *row,
                    active: self.row_active(row),
                };
                eval(&adapter, filter)
            })
            .cloned()
            .collect()
    }
}

impl<E> Repository<E> for MemoryRepo<E>
where
    E: FieldValues + Clone,
{
    fn get_by_id(&self, filter: &Predicate) -> Result<Option<E>, StoreError> {
        Ok(self.matching(filter).into_iter().next())
    }

    fn get_by_code(&self, filter: &Predicate) -> Result<Option<E>, StoreError> {
        Ok(self.matching(filter).into_iter().next())
    }

    fn get_by_father(&self, filter: &Predicate) -> Result<Vec<E>, StoreError> {
        Ok(self.matching(filter))
    }

    fn get_all(&self, spec: &QuerySpec<E>) -> Result<Vec<E>, StoreError> {
        let mut rows = self.matching(spec.predicate());
        spec.sort(self.fields, &mut rows);
        spec.paginate(&mut rows);

        Ok(rows)
    }

    fn total_rows(&self, spec: &QuerySpec<E>) -> Result<u64, StoreError> {
        Ok(self.matching(spec.predicate()).len() as u64)
    }

    fn insert(&self, entity: &E) -> Result<(), StoreError> {
        self.inserts.set(self.inserts.get() + 1);
        self.rows.borrow_mut().push(entity.clone());

        Ok(())
    }

    fn update(&self, entity: &E) -> Result<(), StoreError> {
        self.updates.set(self.updates.get() + 1);

        let id = entity.get_value(fields::ID);
        let mut rows = self.rows.borrow_mut();
        match rows.iter_mut().find(|row| row.get_value(fields::ID) == id) {
            Some(row) => *row = entity.clone(),
            None => rows.push(entity.clone()),
        }

        Ok(())
    }

    fn delete(&self, _entity: &E) -> Result<(), StoreError> {
        self.deletes.set(self.deletes.get() + 1);

        Ok(())
    }
}

impl<E, T: Repository<E>> Repository<E> for Rc<T> {
    fn get_by_id(&self, filter: &Predicate) -> Result<Option<E>, StoreError> {
        T::get_by_id(self, filter)
    }

    fn get_by_code(&self, filter: &Predicate) -> Result<Option<E>, StoreError> {
        T::get_by_code(self, filter)
    }

    fn get_by_father(&self, filter: &Predicate) -> Result<Vec<E>, StoreError> {
        T::get_by_father(self, filter)
    }

    fn get_all(&self, spec: &QuerySpec<E>) -> Result<Vec<E>, StoreError> {
        T::get_all(self, spec)
    }

    fn total_rows(&self, spec: &QuerySpec<E>) -> Result<u64, StoreError> {
        T::total_rows(self, spec)
    }

    fn insert(&self, entity: &E) -> Result<(), StoreError> {
        T::insert(self, entity)
    }

    fn update(&self, entity: &E) -> Result<(), StoreError> {
        T::update(self, entity)
    }

    fn delete(&self, entity: &E) -> Result<(), StoreError> {
        T::delete(self, entity)
    }
}

///
/// FixedProbe
///
/// Reference probe over a fixed set of referenced ids.
///

pub struct FixedProbe {
    module: &'static str,
    referenced: BTreeSet<Ulid>,
}

impl FixedProbe {
    #[must_use]
    pub fn referencing(module: &'static str, ids: &[Ulid]) -> Box<dyn ReferenceProbe> {
        Box::new(Self {
            module,
            referenced: ids.iter().copied().collect(),
        })
    }

    #[must_use]
    pub fn empty(module: &'static str) -> Box<dyn ReferenceProbe> {
        Self::referencing(module, &[])
    }
}

impl ReferenceProbe for FixedProbe {
    fn module(&self) -> &'static str {
        self.module
    }

    fn has_reference(&self, id: Ulid) -> Result<bool, StoreError> {
        Ok(self.referenced.contains(&id))
    }
}

///
/// SequenceCodes
///
/// Code generator handing out `P001`, `P002`, ... per module prefix.
///

#[derive(Default)]
pub struct SequenceCodes {
    next: Cell<u32>,
}

impl CodeGenerator for SequenceCodes {
    fn next_code(&self, prefix: Prefix) -> Result<String, StoreError> {
        let n = self.next.get() + 1;
        self.next.set(n);

        Ok(format!("{}{n:03}", prefix.letter()))
    }
}

impl<T: CodeGenerator> CodeGenerator for Rc<T> {
    fn next_code(&self, prefix: Prefix) -> Result<String, StoreError> {
        T::next_code(self, prefix)
    }
}
