use crate::{
    error::{ArgumentError, ServiceError},
    model::ProcessEntity,
    query::{PageRequest, QuerySpec},
    repo::{CodeGenerator, Prefix, Repository, StatusResolver},
};
use ulid::Ulid;

///
/// ProcessService
///
/// Simpler sibling of the catalog engine: status existence and code
/// uniqueness around a generated module code, with the same read surface.
///

pub struct ProcessService<R, S, G> {
    repo: R,
    status: S,
    codes: G,
}

impl<R, S, G> ProcessService<R, S, G>
where
    R: Repository<ProcessEntity>,
    S: StatusResolver,
    G: CodeGenerator,
{
    #[must_use]
    pub const fn new(repo: R, status: S, codes: G) -> Self {
        Self {
            repo,
            status,
            codes,
        }
    }

    /// Validate, assign a generated code, and insert.
    ///
    /// The caller's `code` field is overwritten; the generated code is
    /// still probed for uniqueness before the write.
    pub fn insert(&self, entity: &mut ProcessEntity) -> Result<(), ServiceError> {
        self.ensure_status_exists(entity)?;

        entity.code = self.codes.next_code(Prefix::Process)?;
        self.ensure_unique_code(entity)?;

        self.repo.insert(entity)?;

        Ok(())
    }

    pub fn update(&self, entity: &ProcessEntity) -> Result<(), ServiceError> {
        self.ensure_status_exists(entity)?;
        self.repo.update(entity)?;

        Ok(())
    }

    pub fn delete(&self, entity: &ProcessEntity) -> Result<(), ServiceError> {
        self.repo.delete(entity)?;

        Ok(())
    }

    pub fn get_by_id(&self, id: Ulid) -> Result<Option<ProcessEntity>, ServiceError> {
        Ok(self.repo.get_by_id(&ProcessEntity::by_id(id))?)
    }

    pub fn get_by_code(&self, code: &str) -> Result<Option<ProcessEntity>, ServiceError> {
        Ok(self.repo.get_by_code(&ProcessEntity::by_code(code))?)
    }

    /// All processes of one process type.
    pub fn get_by_type(
        &self,
        process_type_id: Ulid,
    ) -> Result<Vec<ProcessEntity>, ServiceError> {
        Ok(self
            .repo
            .get_by_father(&ProcessEntity::by_type(process_type_id))?)
    }

    /// One page of process rows, re-sorted by the compiled ordering.
    pub fn get_all_paginated(
        &self,
        request: &PageRequest,
    ) -> Result<Vec<ProcessEntity>, ServiceError> {
        let fields = ProcessEntity::field_map();
        let spec = QuerySpec::build(request, fields);

        let mut rows = self.repo.get_all(&spec)?;
        spec.sort(fields, &mut rows);

        Ok(rows)
    }

    pub fn total_rows(&self, request: &PageRequest) -> Result<u64, ServiceError> {
        let spec = QuerySpec::build(request, ProcessEntity::field_map());

        Ok(self.repo.total_rows(&spec)?)
    }

    fn ensure_status_exists(&self, entity: &ProcessEntity) -> Result<(), ServiceError> {
        if self.status.get_by_id(entity.status_id)?.is_none() {
            return Err(ArgumentError::status_not_found(entity.status_id).into());
        }

        Ok(())
    }

    fn ensure_unique_code(&self, entity: &ProcessEntity) -> Result<(), ServiceError> {
        let existing = self.repo.get_by_code(&ProcessEntity::by_code(&entity.code))?;

        match existing {
            Some(other) if other.id != entity.id => {
                Err(ArgumentError::code_in_use(entity.code.as_str()).into())
            }
            _ => Ok(()),
        }
    }
}
