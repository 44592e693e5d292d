use crate::{
    error::{ArgumentError, ServiceError},
    model::CatalogEntity,
    query::{PageRequest, QuerySpec},
    repo::{Repository, StatusResolver},
    service::relation::RelationshipChecker,
};
use ulid::Ulid;

///
/// CatalogService
///
/// The validation engine around catalog mutations. Stateless,
/// request-scoped orchestration: every operation is a self-contained
/// round-trip over the repository, the status resolver, and the
/// relationship checker, and nothing is written until every check has
/// passed. Failed checks surface immediately; the single delegated write
/// happens at most once per call.
///

pub struct CatalogService<R, S> {
    repo: R,
    status: S,
    relationships: RelationshipChecker,
}

impl<R, S> CatalogService<R, S>
where
    R: Repository<CatalogEntity>,
    S: StatusResolver,
{
    #[must_use]
    pub const fn new(repo: R, status: S, relationships: RelationshipChecker) -> Self {
        Self {
            repo,
            status,
            relationships,
        }
    }

    // --- mutations -------------------------------------------------------

    /// Validate and insert.
    ///
    /// The code/name uniqueness probes are check-then-act and therefore
    /// advisory under concurrency; the storage adapter is expected to hold
    /// a unique constraint of its own.
    pub fn insert(&self, entity: &CatalogEntity) -> Result<(), ServiceError> {
        self.validate_mutation(entity)?;
        self.repo.insert(entity)?;

        Ok(())
    }

    /// Validate and update.
    pub fn update(&self, entity: &CatalogEntity) -> Result<(), ServiceError> {
        self.validate_mutation(entity)?;
        self.repo.update(entity)?;

        Ok(())
    }

    /// Delete after the relationship gate.
    ///
    /// Deletion needs no status or hierarchy checks, but an entity still
    /// referenced by a dependent module must not be removed.
    pub fn delete(&self, entity: &CatalogEntity) -> Result<(), ServiceError> {
        self.ensure_unreferenced(entity.id)?;
        self.repo.delete(entity)?;

        Ok(())
    }

    // --- reads -----------------------------------------------------------

    pub fn get_by_id(&self, id: Ulid) -> Result<Option<CatalogEntity>, ServiceError> {
        Ok(self.repo.get_by_id(&CatalogEntity::by_id(id))?)
    }

    pub fn get_by_code(&self, code: i64) -> Result<Option<CatalogEntity>, ServiceError> {
        Ok(self.repo.get_by_code(&CatalogEntity::by_code(code))?)
    }

    pub fn get_by_father(&self, father_code: i64) -> Result<Vec<CatalogEntity>, ServiceError> {
        Ok(self
            .repo
            .get_by_father(&CatalogEntity::children_of(father_code))?)
    }

    /// One page of catalog rows, sorted by the request's compiled ordering.
    ///
    /// The rows come back re-sorted here rather than trusted from storage,
    /// so the ordering guarantee holds irrespective of the backend's
    /// native order.
    pub fn get_all_paginated(
        &self,
        request: &PageRequest,
    ) -> Result<Vec<CatalogEntity>, ServiceError> {
        let fields = CatalogEntity::field_map();
        let spec = QuerySpec::build(request, fields);

        let mut rows = self.repo.get_all(&spec)?;
        spec.sort(fields, &mut rows);

        Ok(rows)
    }

    /// Matching row count for a request, ignoring its paging window.
    pub fn total_rows(&self, request: &PageRequest) -> Result<u64, ServiceError> {
        let spec = QuerySpec::build(request, CatalogEntity::field_map());

        Ok(self.repo.total_rows(&spec)?)
    }

    // --- validation sequence ---------------------------------------------

    // Fail-fast: the first failing check wins, and no repository write has
    // happened by the time any check runs.
    fn validate_mutation(&self, entity: &CatalogEntity) -> Result<(), ServiceError> {
        self.ensure_status_exists(entity)?;
        Self::ensure_hierarchy(entity)?;
        self.ensure_unique_code(entity)?;
        self.ensure_unique_name(entity)?;
        self.ensure_active_father(entity)?;
        self.ensure_deactivation_allowed(entity)?;

        Ok(())
    }

    fn ensure_status_exists(&self, entity: &CatalogEntity) -> Result<(), ServiceError> {
        if self.status.get_by_id(entity.status_id)?.is_none() {
            return Err(ArgumentError::status_not_found(entity.status_id).into());
        }

        Ok(())
    }

    // Single exhaustive XOR: exactly one of `is_father` / `father_code`
    // may be present.
    fn ensure_hierarchy(entity: &CatalogEntity) -> Result<(), ServiceError> {
        match (entity.is_father, entity.father_code) {
            (true, Some(_)) | (false, None) => Err(ArgumentError::hierarchy_violation().into()),
            (true, None) | (false, Some(_)) => Ok(()),
        }
    }

    fn ensure_unique_code(&self, entity: &CatalogEntity) -> Result<(), ServiceError> {
        let existing = self.repo.get_by_id(&CatalogEntity::by_code(entity.code))?;

        match existing {
            Some(other) if other.id != entity.id => {
                Err(ArgumentError::code_in_use(entity.code).into())
            }
            _ => Ok(()),
        }
    }

    fn ensure_unique_name(&self, entity: &CatalogEntity) -> Result<(), ServiceError> {
        let probe = CatalogEntity::by_name_in_scope(&entity.name, entity.father_code);
        let existing = self.repo.get_by_id(&probe)?;

        match existing {
            Some(other) if other.id != entity.id => {
                Err(ArgumentError::name_in_use(&entity.name).into())
            }
            _ => Ok(()),
        }
    }

    // Children only: the declared father must exist among father rows and
    // resolve to an active status.
    fn ensure_active_father(&self, entity: &CatalogEntity) -> Result<(), ServiceError> {
        let Some(father_code) = entity.father_code else {
            return Ok(());
        };

        let rows = self
            .repo
            .get_by_father(&CatalogEntity::father_by_code(father_code))?;

        let Some(father) = rows.iter().find(|row| row.is_father) else {
            return Err(ArgumentError::parent_not_found(father_code).into());
        };

        if !self.status.is_active(father.status_id)? {
            return Err(ArgumentError::inactive_relationship("father catalog").into());
        }

        Ok(())
    }

    // Transitions toward an inactive status go through the relationship
    // gate; deactivating an unreferenced entity is always permitted.
    fn ensure_deactivation_allowed(&self, entity: &CatalogEntity) -> Result<(), ServiceError> {
        if self.status.is_active(entity.status_id)? {
            return Ok(());
        }

        self.ensure_unreferenced(entity.id)
    }

    fn ensure_unreferenced(&self, id: Ulid) -> Result<(), ServiceError> {
        if let Some(module) = self.relationships.first_reference(id)? {
            return Err(ArgumentError::blocked_by_relationship(module).into());
        }

        Ok(())
    }
}
