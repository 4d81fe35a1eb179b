//! Maintenance log — a dated record of work performed on equipment.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::{EquipmentId, MaintenanceLogId};
use crate::time::Date;

/// A maintenance event recorded against a piece of equipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceLog {
    pub id: MaintenanceLogId,
    pub equipment_id: EquipmentId,
    pub maintenance_date: Date,
    pub notes: String,
    pub performed_by: String,
}

impl MaintenanceLog {
    /// Materialize a validated draft under the given id.
    #[must_use]
    pub fn from_draft(id: MaintenanceLogId, draft: MaintenanceDraft) -> Self {
        Self {
            id,
            equipment_id: draft.equipment_id,
            maintenance_date: draft.maintenance_date,
            notes: draft.notes,
            performed_by: draft.performed_by,
        }
    }
}

/// Caller-supplied fields for logging maintenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceInput {
    pub equipment_id: EquipmentId,
    pub maintenance_date: Date,
    #[serde(default)]
    pub notes: String,
    pub performed_by: String,
}

impl MaintenanceInput {
    /// Validate and normalize (trim notes and performer).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyPerformedBy`] when the performer is blank.
    pub fn into_draft(self) -> Result<MaintenanceDraft, ValidationError> {
        let performed_by = self.performed_by.trim();
        if performed_by.is_empty() {
            return Err(ValidationError::EmptyPerformedBy);
        }
        Ok(MaintenanceDraft {
            equipment_id: self.equipment_id,
            maintenance_date: self.maintenance_date,
            notes: self.notes.trim().to_owned(),
            performed_by: performed_by.to_owned(),
        })
    }
}

/// Validated maintenance fields, not yet assigned an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaintenanceDraft {
    equipment_id: EquipmentId,
    maintenance_date: Date,
    notes: String,
    performed_by: String,
}

impl MaintenanceDraft {
    #[must_use]
    pub fn equipment_id(&self) -> EquipmentId {
        self.equipment_id
    }

    #[must_use]
    pub fn maintenance_date(&self) -> Date {
        self.maintenance_date
    }
}

/// Order logs newest first by maintenance date; logs on the same day keep
/// their relative order.
pub fn sort_newest_first(logs: &mut [MaintenanceLog]) {
    logs.sort_by(|a, b| b.maintenance_date.cmp(&a.maintenance_date));
}
