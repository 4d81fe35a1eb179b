//! In-memory implementation of the storage ports.

use std::future::Future;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Mutex, MutexGuard};

use equiptrack_app::ports::{
    EquipmentRepository, EquipmentTypeRepository, MaintenanceLogRepository,
};
use equiptrack_domain::equipment::{Equipment, EquipmentDraft};
use equiptrack_domain::equipment_type::{EquipmentType, default_catalog};
use equiptrack_domain::error::{EquipTrackError, NotFoundError};
use equiptrack_domain::id::{EquipmentId, EquipmentTypeId, MaintenanceLogId};
use equiptrack_domain::maintenance::{MaintenanceDraft, MaintenanceLog};

use crate::error::StorageError;

/// Process-local store owning every collection.
///
/// Collections keep insertion order. Ids come from one counter per
/// collection and are never reused, even after a delete. Share one store
/// between services by wrapping it in an `Arc`.
pub struct InMemoryStore {
    types: Vec<EquipmentType>,
    equipment: Mutex<Vec<Equipment>>,
    logs: Mutex<Vec<MaintenanceLog>>,
    next_equipment_id: AtomicI64,
    next_log_id: AtomicI64,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    /// Create a store with the built-in type catalog and no equipment.
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts(default_catalog(), Vec::new(), Vec::new())
    }

    /// Create a store pre-filled with the demo data set.
    #[must_use]
    pub fn seeded() -> Self {
        Self::from_parts(
            default_catalog(),
            crate::seed::equipment(),
            crate::seed::maintenance_logs(),
        )
    }

    /// Create a store from existing records. Counters resume after the
    /// highest id present.
    #[must_use]
    pub fn from_parts(
        mut types: Vec<EquipmentType>,
        equipment: Vec<Equipment>,
        logs: Vec<MaintenanceLog>,
    ) -> Self {
        types.sort_by_key(|kind| kind.id);
        let next_equipment_id = equipment.iter().map(|e| e.id.get()).max().unwrap_or(0) + 1;
        let next_log_id = logs.iter().map(|l| l.id.get()).max().unwrap_or(0) + 1;
        Self {
            types,
            equipment: Mutex::new(equipment),
            logs: Mutex::new(logs),
            next_equipment_id: AtomicI64::new(next_equipment_id),
            next_log_id: AtomicI64::new(next_log_id),
        }
    }

    fn lock_equipment(&self) -> Result<MutexGuard<'_, Vec<Equipment>>, StorageError> {
        self.equipment
            .lock()
            .map_err(|_| StorageError::Poisoned("equipment"))
    }

    fn lock_logs(&self) -> Result<MutexGuard<'_, Vec<MaintenanceLog>>, StorageError> {
        self.logs
            .lock()
            .map_err(|_| StorageError::Poisoned("maintenance log"))
    }

    fn insert_equipment(&self, draft: EquipmentDraft) -> Result<Equipment, EquipTrackError> {
        let mut rows = self.lock_equipment()?;
        let id = EquipmentId::new(self.next_equipment_id.fetch_add(1, Ordering::Relaxed));
        let equipment = Equipment::from_draft(id, draft);
        rows.push(equipment.clone());
        tracing::debug!(%id, "equipment stored");
        Ok(equipment)
    }

    fn replace_equipment(&self, equipment: Equipment) -> Result<Equipment, EquipTrackError> {
        let mut rows = self.lock_equipment()?;
        let slot = rows
            .iter_mut()
            .find(|row| row.id == equipment.id)
            .ok_or_else(|| not_found(equipment.id))?;
        slot.clone_from(&equipment);
        Ok(equipment)
    }

    // Lock order is always equipment, then logs.
    fn remove_equipment(&self, id: EquipmentId) -> Result<usize, EquipTrackError> {
        let mut rows = self.lock_equipment()?;
        let index = rows
            .iter()
            .position(|row| row.id == id)
            .ok_or_else(|| not_found(id))?;
        let mut logs = self.lock_logs()?;
        rows.remove(index);
        let before = logs.len();
        logs.retain(|log| log.equipment_id != id);
        let removed = before - logs.len();
        tracing::debug!(%id, removed_logs = removed, "equipment removed");
        Ok(removed)
    }

    fn record_maintenance(
        &self,
        draft: MaintenanceDraft,
    ) -> Result<(MaintenanceLog, Equipment), EquipTrackError> {
        let mut rows = self.lock_equipment()?;
        let equipment_id = draft.equipment_id();
        let slot = rows
            .iter_mut()
            .find(|row| row.id == equipment_id)
            .ok_or_else(|| not_found(equipment_id))?;
        let mut logs = self.lock_logs()?;
        let id = MaintenanceLogId::new(self.next_log_id.fetch_add(1, Ordering::Relaxed));
        slot.record_cleaning(draft.maintenance_date());
        let equipment = slot.clone();
        let log = MaintenanceLog::from_draft(id, draft);
        logs.push(log.clone());
        tracing::debug!(%id, %equipment_id, "maintenance log stored");
        Ok((log, equipment))
    }
}

fn not_found(id: EquipmentId) -> EquipTrackError {
    NotFoundError {
        entity: "Equipment",
        id: id.to_string(),
    }
    .into()
}

impl EquipmentRepository for InMemoryStore {
    fn create(
        &self,
        draft: EquipmentDraft,
    ) -> impl Future<Output = Result<Equipment, EquipTrackError>> + Send {
        let result = self.insert_equipment(draft);
        async { result }
    }

    fn get_by_id(
        &self,
        id: EquipmentId,
    ) -> impl Future<Output = Result<Option<Equipment>, EquipTrackError>> + Send {
        let result = self
            .lock_equipment()
            .map(|rows| rows.iter().find(|row| row.id == id).cloned())
            .map_err(EquipTrackError::from);
        async { result }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Equipment>, EquipTrackError>> + Send {
        let result = self
            .lock_equipment()
            .map(|rows| rows.clone())
            .map_err(EquipTrackError::from);
        async { result }
    }

    fn update(
        &self,
        equipment: Equipment,
    ) -> impl Future<Output = Result<Equipment, EquipTrackError>> + Send {
        let result = self.replace_equipment(equipment);
        async { result }
    }

    fn delete(
        &self,
        id: EquipmentId,
    ) -> impl Future<Output = Result<usize, EquipTrackError>> + Send {
        let result = self.remove_equipment(id);
        async { result }
    }
}

impl MaintenanceLogRepository for InMemoryStore {
    fn record(
        &self,
        draft: MaintenanceDraft,
    ) -> impl Future<Output = Result<(MaintenanceLog, Equipment), EquipTrackError>> + Send {
        let result = self.record_maintenance(draft);
        async { result }
    }

    fn find_by_equipment(
        &self,
        equipment_id: EquipmentId,
    ) -> impl Future<Output = Result<Vec<MaintenanceLog>, EquipTrackError>> + Send {
        let result = self
            .lock_logs()
            .map(|rows| {
                rows.iter()
                    .filter(|row| row.equipment_id == equipment_id)
                    .cloned()
                    .collect()
            })
            .map_err(EquipTrackError::from);
        async { result }
    }
}

impl EquipmentTypeRepository for InMemoryStore {
    fn get_all(&self) -> impl Future<Output = Result<Vec<EquipmentType>, EquipTrackError>> + Send {
        let result = self.types.clone();
        async { Ok(result) }
    }

    fn get_by_id(
        &self,
        id: EquipmentTypeId,
    ) -> impl Future<Output = Result<Option<EquipmentType>, EquipTrackError>> + Send {
        let result = self.types.iter().find(|kind| kind.id == id).cloned();
        async { Ok(result) }
    }
}
