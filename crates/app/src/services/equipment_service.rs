//! Equipment service — use-cases for listing and managing equipment.

use equiptrack_domain::equipment::{Equipment, EquipmentDraft, EquipmentInput};
use equiptrack_domain::equipment_type::EquipmentType;
use equiptrack_domain::error::{EquipTrackError, NotFoundError, ValidationError};
use equiptrack_domain::freshness::FreshnessRule;
use equiptrack_domain::id::EquipmentId;
use equiptrack_domain::query::{EquipmentQuery, Page};

use crate::ports::{Clock, EquipmentRepository, EquipmentTypeRepository};

/// Application service for the equipment query and mutations.
///
/// Every check runs before the first write, so a failed call leaves the
/// store unchanged.
pub struct EquipmentService<ER, TR, C> {
    equipment: ER,
    types: TR,
    clock: C,
    rule: FreshnessRule,
}

impl<ER, TR, C> EquipmentService<ER, TR, C>
where
    ER: EquipmentRepository,
    TR: EquipmentTypeRepository,
    C: Clock,
{
    /// Create a new service with the default freshness rule.
    pub fn new(equipment: ER, types: TR, clock: C) -> Self {
        Self {
            equipment,
            types,
            clock,
            rule: FreshnessRule::default(),
        }
    }

    /// Replace the freshness rule.
    #[must_use]
    pub fn with_freshness_rule(mut self, rule: FreshnessRule) -> Self {
        self.rule = rule;
        self
    }

    /// The freshness rule applied on create and update.
    #[must_use]
    pub fn freshness_rule(&self) -> FreshnessRule {
        self.rule
    }

    /// Filter, sort and paginate equipment. No side effects.
    ///
    /// # Errors
    ///
    /// Returns [`EquipTrackError::Validation`] when the page size is zero, or
    /// a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_equipment(
        &self,
        query: &EquipmentQuery,
    ) -> Result<Page<Equipment>, EquipTrackError> {
        query.validate()?;
        let all = self.equipment.get_all().await?;
        Ok(query.run(all)?)
    }

    /// Look up equipment by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`EquipTrackError::NotFound`] when no equipment with `id`
    /// exists, or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_equipment(&self, id: EquipmentId) -> Result<Equipment, EquipTrackError> {
        self.equipment.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Equipment",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List the equipment type catalog.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_equipment_types(&self) -> Result<Vec<EquipmentType>, EquipTrackError> {
        self.types.get_all().await
    }

    /// Validate `input` and store it under the next sequential id.
    ///
    /// # Errors
    ///
    /// Returns [`EquipTrackError::Validation`] when the name or type is
    /// missing, the type is unknown, or an `Active` status breaks the
    /// freshness rule; or a storage error from the repository.
    #[tracing::instrument(skip(self, input), fields(equipment_name = %input.name))]
    pub async fn create_equipment(
        &self,
        input: EquipmentInput,
    ) -> Result<Equipment, EquipTrackError> {
        let draft = self.validate(input).await?;
        let created = self.equipment.create(draft).await?;
        tracing::info!(id = %created.id, status = %created.status, "equipment created");
        Ok(created)
    }

    /// Replace every mutable field of existing equipment.
    ///
    /// # Errors
    ///
    /// Returns [`EquipTrackError::NotFound`] when no equipment with `id`
    /// exists, [`EquipTrackError::Validation`] under the same rules as
    /// [`create_equipment`](Self::create_equipment), or a storage error.
    #[tracing::instrument(skip(self, input), fields(equipment_name = %input.name))]
    pub async fn update_equipment(
        &self,
        id: EquipmentId,
        input: EquipmentInput,
    ) -> Result<Equipment, EquipTrackError> {
        let mut equipment = self.get_equipment(id).await?;
        let draft = self.validate(input).await?;
        let previous = equipment.status;
        equipment.apply(draft);
        let updated = self.equipment.update(equipment).await?;
        if previous != updated.status {
            tracing::info!(%id, from = %previous, to = %updated.status, "equipment status changed");
        }
        Ok(updated)
    }

    /// Delete equipment and every maintenance log that references it.
    ///
    /// # Errors
    ///
    /// Returns [`EquipTrackError::NotFound`] when no equipment with `id`
    /// exists, or a storage error from a repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_equipment(&self, id: EquipmentId) -> Result<(), EquipTrackError> {
        self.get_equipment(id).await?;
        let removed_logs = self.equipment.delete(id).await?;
        tracing::info!(%id, removed_logs, "equipment deleted");
        Ok(())
    }

    async fn validate(&self, input: EquipmentInput) -> Result<EquipmentDraft, EquipTrackError> {
        let type_id = input.required_type_id()?;
        let equipment_type = self
            .types
            .get_by_id(type_id)
            .await?
            .ok_or(ValidationError::UnknownEquipmentType(type_id))?;
        Ok(input.into_draft(equipment_type, self.rule, self.clock.today())?)
    }
}
