use crate::{
    error::{ArgumentError, ServiceError, format_message, messages},
    model::{
        IntegrationEntity,
        integration::{MAX_OBSERVATIONS_LEN, MIN_PROCESSES},
    },
    repo::{Repository, StatusResolver},
};
use ulid::Ulid;

///
/// IntegrationService
///
/// Engine for the composite integration entity: status existence plus the
/// field rules (minimum process count, observation length) ahead of the
/// delegated write.
///

pub struct IntegrationService<R, S> {
    repo: R,
    status: S,
}

impl<R, S> IntegrationService<R, S>
where
    R: Repository<IntegrationEntity>,
    S: StatusResolver,
{
    #[must_use]
    pub const fn new(repo: R, status: S) -> Self {
        Self { repo, status }
    }

    pub fn insert(&self, entity: &IntegrationEntity) -> Result<(), ServiceError> {
        self.validate_mutation(entity)?;
        self.repo.insert(entity)?;

        Ok(())
    }

    pub fn update(&self, entity: &IntegrationEntity) -> Result<(), ServiceError> {
        self.validate_mutation(entity)?;
        self.repo.update(entity)?;

        Ok(())
    }

    pub fn delete(&self, entity: &IntegrationEntity) -> Result<(), ServiceError> {
        self.repo.delete(entity)?;

        Ok(())
    }

    pub fn get_by_id(&self, id: Ulid) -> Result<Option<IntegrationEntity>, ServiceError> {
        use crate::query::Predicate;

        Ok(self
            .repo
            .get_by_id(&Predicate::eq(crate::model::integration::fields::ID, id))?)
    }

    fn validate_mutation(&self, entity: &IntegrationEntity) -> Result<(), ServiceError> {
        if self.status.get_by_id(entity.status_id)?.is_none() {
            return Err(ArgumentError::status_not_found(entity.status_id).into());
        }

        if entity.process.len() < MIN_PROCESSES {
            return Err(ArgumentError::field_validation(format_message(
                messages::INTEGRATION_MIN_PROCESSES,
                &[&MIN_PROCESSES.to_string()],
            ))
            .into());
        }

        if let Some(observations) = &entity.observations
            && observations.chars().count() > MAX_OBSERVATIONS_LEN
        {
            return Err(ArgumentError::field_validation(format_message(
                messages::OBSERVATIONS_MAX_LENGTH,
                &[&MAX_OBSERVATIONS_LEN.to_string()],
            ))
            .into());
        }

        Ok(())
    }
}
