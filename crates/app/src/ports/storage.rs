//! Storage port — repository traits for equipment, maintenance logs and the
//! equipment type catalog.
//!
//! Listing methods return records in store (insertion) order; ordering for
//! presentation is applied by the services.

use std::future::Future;
use std::sync::Arc;

use equiptrack_domain::equipment::{Equipment, EquipmentDraft};
use equiptrack_domain::equipment_type::EquipmentType;
use equiptrack_domain::error::EquipTrackError;
use equiptrack_domain::id::{EquipmentId, EquipmentTypeId};
use equiptrack_domain::maintenance::{MaintenanceDraft, MaintenanceLog};

/// Repository for persisting and querying [`Equipment`].
pub trait EquipmentRepository {
    /// Store a validated draft under the next sequential id.
    fn create(
        &self,
        draft: EquipmentDraft,
    ) -> impl Future<Output = Result<Equipment, EquipTrackError>> + Send;

    /// Get equipment by its unique identifier.
    fn get_by_id(
        &self,
        id: EquipmentId,
    ) -> impl Future<Output = Result<Option<Equipment>, EquipTrackError>> + Send;

    /// Get all equipment in store order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Equipment>, EquipTrackError>> + Send;

    /// Replace an existing record in place.
    ///
    /// Fails with [`EquipTrackError::NotFound`] when no record has the id.
    fn update(
        &self,
        equipment: Equipment,
    ) -> impl Future<Output = Result<Equipment, EquipTrackError>> + Send;

    /// Remove equipment together with every maintenance log that references
    /// it, as one unit. Returns how many logs were removed.
    ///
    /// Fails with [`EquipTrackError::NotFound`] when no record has the id.
    /// On any error nothing is removed.
    fn delete(
        &self,
        id: EquipmentId,
    ) -> impl Future<Output = Result<usize, EquipTrackError>> + Send;
}

/// Repository for persisting and querying [`MaintenanceLog`]s.
pub trait MaintenanceLogRepository {
    /// Append a validated draft under the next sequential id and mark its
    /// equipment cleaned on the maintenance date, as one unit.
    ///
    /// Returns the new log and the updated equipment. Fails with
    /// [`EquipTrackError::NotFound`] when the equipment does not exist. On
    /// any error nothing is written.
    fn record(
        &self,
        draft: MaintenanceDraft,
    ) -> impl Future<Output = Result<(MaintenanceLog, Equipment), EquipTrackError>> + Send;

    /// Get the logs of one equipment in store order.
    fn find_by_equipment(
        &self,
        equipment_id: EquipmentId,
    ) -> impl Future<Output = Result<Vec<MaintenanceLog>, EquipTrackError>> + Send;
}

/// Read-only access to the [`EquipmentType`] catalog.
pub trait EquipmentTypeRepository {
    /// Get every equipment type in id order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<EquipmentType>, EquipTrackError>> + Send;

    /// Get an equipment type by its unique identifier.
    fn get_by_id(
        &self,
        id: EquipmentTypeId,
    ) -> impl Future<Output = Result<Option<EquipmentType>, EquipTrackError>> + Send;
}

impl<T: EquipmentRepository + Send + Sync> EquipmentRepository for Arc<T> {
    fn create(
        &self,
        draft: EquipmentDraft,
    ) -> impl Future<Output = Result<Equipment, EquipTrackError>> + Send {
        (**self).create(draft)
    }

    fn get_by_id(
        &self,
        id: EquipmentId,
    ) -> impl Future<Output = Result<Option<Equipment>, EquipTrackError>> + Send {
        (**self).get_by_id(id)
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Equipment>, EquipTrackError>> + Send {
        (**self).get_all()
    }

    fn update(
        &self,
        equipment: Equipment,
    ) -> impl Future<Output = Result<Equipment, EquipTrackError>> + Send {
        (**self).update(equipment)
    }

    fn delete(
        &self,
        id: EquipmentId,
    ) -> impl Future<Output = Result<usize, EquipTrackError>> + Send {
        (**self).delete(id)
    }
}

impl<T: MaintenanceLogRepository + Send + Sync> MaintenanceLogRepository for Arc<T> {
    fn record(
        &self,
        draft: MaintenanceDraft,
    ) -> impl Future<Output = Result<(MaintenanceLog, Equipment), EquipTrackError>> + Send {
        (**self).record(draft)
    }

    fn find_by_equipment(
        &self,
        equipment_id: EquipmentId,
    ) -> impl Future<Output = Result<Vec<MaintenanceLog>, EquipTrackError>> + Send {
        (**self).find_by_equipment(equipment_id)
    }
}

impl<T: EquipmentTypeRepository + Send + Sync> EquipmentTypeRepository for Arc<T> {
    fn get_all(&self) -> impl Future<Output = Result<Vec<EquipmentType>, EquipTrackError>> + Send {
        (**self).get_all()
    }

    fn get_by_id(
        &self,
        id: EquipmentTypeId,
    ) -> impl Future<Output = Result<Option<EquipmentType>, EquipTrackError>> + Send {
        (**self).get_by_id(id)
    }
}
