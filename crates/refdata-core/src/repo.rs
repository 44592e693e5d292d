use crate::{
    error::StoreError,
    model::StatusEntity,
    query::{Predicate, QuerySpec},
};
use ulid::Ulid;

///
/// Repository
///
/// Storage contract consumed by the engines; implemented externally by the
/// persistence layer. Point reads take a predicate expression, scans take a
/// compiled query spec, and mutations are unit operations. Failures are
/// reported as [`StoreError`] and pass through the engines unchanged.
///

pub trait Repository<E> {
    /// First row matching the expression, if any. The expression is not
    /// necessarily identity-shaped; uniqueness probes route code- and
    /// name-shaped expressions through this read too.
    fn get_by_id(&self, filter: &Predicate) -> Result<Option<E>, StoreError>;

    /// First row matching a code-shaped expression, if any.
    fn get_by_code(&self, filter: &Predicate) -> Result<Option<E>, StoreError>;

    /// All rows matching a father-scope expression.
    fn get_by_father(&self, filter: &Predicate) -> Result<Vec<E>, StoreError>;

    /// One page of rows for a compiled spec. The storage's native order is
    /// not part of the contract; callers re-sort.
    fn get_all(&self, spec: &QuerySpec<E>) -> Result<Vec<E>, StoreError>;

    /// Matching row count for a compiled spec, ignoring its paging window.
    fn total_rows(&self, spec: &QuerySpec<E>) -> Result<u64, StoreError>;

    fn insert(&self, entity: &E) -> Result<(), StoreError>;
    fn update(&self, entity: &E) -> Result<(), StoreError>;
    fn delete(&self, entity: &E) -> Result<(), StoreError>;
}

///
/// StatusResolver
///
/// Status existence and activity lookups. Owned externally; the engines
/// only consume it.
///

pub trait StatusResolver {
    fn get_by_id(&self, id: Ulid) -> Result<Option<StatusEntity>, StoreError>;
    fn get_by_key(&self, key: &str) -> Result<Option<StatusEntity>, StoreError>;
    fn is_active(&self, id: Ulid) -> Result<bool, StoreError>;
}

///
/// Prefix
///
/// Module selector for generated entity codes.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Prefix {
    Process,
    Integration,
}

impl Prefix {
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Process => 'P',
            Self::Integration => 'I',
        }
    }
}

///
/// CodeGenerator
///
/// Module-scoped code sequence. The process engine assigns a fresh code on
/// every insert before probing uniqueness.
///

pub trait CodeGenerator {
    fn next_code(&self, prefix: Prefix) -> Result<String, StoreError>;
}
