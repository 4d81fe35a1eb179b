//! Maintenance service — use-cases for logging maintenance and reading history.

use equiptrack_domain::error::{EquipTrackError, NotFoundError};
use equiptrack_domain::id::EquipmentId;
use equiptrack_domain::maintenance::{MaintenanceInput, MaintenanceLog, sort_newest_first};

use crate::ports::{EquipmentRepository, MaintenanceLogRepository};

/// Application service for maintenance logs.
pub struct MaintenanceService<ER, MR> {
    equipment: ER,
    logs: MR,
}

impl<ER, MR> MaintenanceService<ER, MR>
where
    ER: EquipmentRepository,
    MR: MaintenanceLogRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(equipment: ER, logs: MR) -> Self {
        Self { equipment, logs }
    }

    /// Append a maintenance log and reactivate the equipment.
    ///
    /// The equipment becomes `Active` with its last cleaned date set to the
    /// maintenance date, whatever its previous status or date. The freshness
    /// rule is not consulted.
    ///
    /// # Errors
    ///
    /// Returns [`EquipTrackError::NotFound`] when the equipment does not
    /// exist, [`EquipTrackError::Validation`] when `performed_by` is blank,
    /// or a storage error from a repository. On error neither the equipment
    /// nor the log collection is changed.
    #[tracing::instrument(skip(self, input), fields(equipment_id = %input.equipment_id))]
    pub async fn log_maintenance(
        &self,
        input: MaintenanceInput,
    ) -> Result<MaintenanceLog, EquipTrackError> {
        self.equipment
            .get_by_id(input.equipment_id)
            .await?
            .ok_or_else(|| NotFoundError {
                entity: "Equipment",
                id: input.equipment_id.to_string(),
            })?;
        let draft = input.into_draft()?;

        let (log, equipment) = self.logs.record(draft).await?;

        tracing::info!(
            log_id = %log.id,
            date = %log.maintenance_date,
            status = %equipment.status,
            "maintenance logged"
        );
        Ok(log)
    }

    /// Maintenance history of one equipment, newest first.
    ///
    /// Unknown or deleted equipment has an empty history.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_maintenance_logs(
        &self,
        equipment_id: EquipmentId,
    ) -> Result<Vec<MaintenanceLog>, EquipTrackError> {
        let mut logs = self.logs.find_by_equipment(equipment_id).await?;
        sort_newest_first(&mut logs);
        Ok(logs)
    }
}
