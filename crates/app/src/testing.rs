//! Test doubles shared by the service tests.

use std::future::Future;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use equiptrack_domain::equipment::{Equipment, EquipmentDraft, EquipmentStatus};
use equiptrack_domain::equipment_type::{EquipmentType, default_catalog};
use equiptrack_domain::error::{EquipTrackError, NotFoundError};
use equiptrack_domain::id::{EquipmentId, EquipmentTypeId, MaintenanceLogId};
use equiptrack_domain::maintenance::{MaintenanceDraft, MaintenanceLog};
use equiptrack_domain::time::Date;

use crate::ports::{EquipmentRepository, EquipmentTypeRepository, MaintenanceLogRepository};

pub fn date(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd_opt(y, m, d).unwrap()
}

pub fn reference_day() -> Date {
    date(2026, 2, 28)
}

#[derive(Default)]
struct State {
    equipment: Vec<Equipment>,
    logs: Vec<MaintenanceLog>,
    next_equipment_id: i64,
    next_log_id: i64,
}

/// Vec-backed store implementing every repository port.
#[derive(Default)]
pub struct FakeStore {
    state: Mutex<State>,
    failing: AtomicBool,
}

#[derive(Debug, thiserror::Error)]
#[error("write rejected")]
struct WriteRejected;

impl FakeStore {
    /// Make every following write fail with a storage error, touching nothing.
    pub fn fail_writes(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    fn check_writable(&self) -> Result<(), EquipTrackError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(EquipTrackError::Storage(Box::new(WriteRejected)));
        }
        Ok(())
    }

    /// Append a log directly, leaving its equipment untouched.
    pub fn add_log(&self, draft: MaintenanceDraft) -> MaintenanceLog {
        let mut state = self.state.lock().unwrap();
        state.next_log_id += 1;
        let log = MaintenanceLog::from_draft(MaintenanceLogId::new(state.next_log_id), draft);
        state.logs.push(log.clone());
        log
    }

    /// Insert equipment directly, bypassing validation.
    pub fn insert(
        &self,
        name: &str,
        type_id: i64,
        status: EquipmentStatus,
        cleaned: Option<Date>,
    ) -> EquipmentId {
        let mut state = self.state.lock().unwrap();
        state.next_equipment_id += 1;
        let id = EquipmentId::new(state.next_equipment_id);
        let equipment_type = default_catalog()
            .into_iter()
            .find(|t| t.id == EquipmentTypeId::new(type_id))
            .unwrap();
        state.equipment.push(Equipment {
            id,
            name: name.to_string(),
            equipment_type,
            status,
            last_cleaned_date: cleaned,
        });
        id
    }

    pub fn equipment(&self, id: EquipmentId) -> Option<Equipment> {
        let state = self.state.lock().unwrap();
        state.equipment.iter().find(|e| e.id == id).cloned()
    }

    pub fn equipment_count(&self) -> usize {
        self.state.lock().unwrap().equipment.len()
    }

    pub fn log_count(&self) -> usize {
        self.state.lock().unwrap().logs.len()
    }
}

fn not_found(id: EquipmentId) -> EquipTrackError {
    NotFoundError {
        entity: "Equipment",
        id: id.to_string(),
    }
    .into()
}

impl EquipmentRepository for FakeStore {
    fn create(
        &self,
        draft: EquipmentDraft,
    ) -> impl Future<Output = Result<Equipment, EquipTrackError>> + Send {
        let mut state = self.state.lock().unwrap();
        state.next_equipment_id += 1;
        let equipment = Equipment::from_draft(EquipmentId::new(state.next_equipment_id), draft);
        state.equipment.push(equipment.clone());
        async { Ok(equipment) }
    }

    fn get_by_id(
        &self,
        id: EquipmentId,
    ) -> impl Future<Output = Result<Option<Equipment>, EquipTrackError>> + Send {
        let result = self.equipment(id);
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Equipment>, EquipTrackError>> + Send {
        let result = self.state.lock().unwrap().equipment.clone();
        async { Ok(result) }
    }

    fn update(
        &self,
        equipment: Equipment,
    ) -> impl Future<Output = Result<Equipment, EquipTrackError>> + Send {
        let result = self.check_writable().and_then(|()| {
            let mut state = self.state.lock().unwrap();
            let slot = state
                .equipment
                .iter_mut()
                .find(|e| e.id == equipment.id)
                .ok_or_else(|| not_found(equipment.id))?;
            *slot = equipment.clone();
            Ok(equipment)
        });
        async { result }
    }

    fn delete(
        &self,
        id: EquipmentId,
    ) -> impl Future<Output = Result<usize, EquipTrackError>> + Send {
        let result = self.check_writable().and_then(|()| {
            let mut state = self.state.lock().unwrap();
            let index = state
                .equipment
                .iter()
                .position(|e| e.id == id)
                .ok_or_else(|| not_found(id))?;
            state.equipment.remove(index);
            let before = state.logs.len();
            state.logs.retain(|l| l.equipment_id != id);
            Ok(before - state.logs.len())
        });
        async { result }
    }
}

impl MaintenanceLogRepository for FakeStore {
    fn record(
        &self,
        draft: MaintenanceDraft,
    ) -> impl Future<Output = Result<(MaintenanceLog, Equipment), EquipTrackError>> + Send {
        let result = self.check_writable().and_then(|()| {
            let mut state = self.state.lock().unwrap();
            let equipment_id = draft.equipment_id();
            let date = draft.maintenance_date();
            let slot = state
                .equipment
                .iter_mut()
                .find(|e| e.id == equipment_id)
                .ok_or_else(|| not_found(equipment_id))?;
            slot.record_cleaning(date);
            let equipment = slot.clone();
            state.next_log_id += 1;
            let log = MaintenanceLog::from_draft(MaintenanceLogId::new(state.next_log_id), draft);
            state.logs.push(log.clone());
            Ok((log, equipment))
        });
        async { result }
    }

    fn find_by_equipment(
        &self,
        equipment_id: EquipmentId,
    ) -> impl Future<Output = Result<Vec<MaintenanceLog>, EquipTrackError>> + Send {
        let state = self.state.lock().unwrap();
        let result: Vec<MaintenanceLog> = state
            .logs
            .iter()
            .filter(|l| l.equipment_id == equipment_id)
            .cloned()
            .collect();
        async { Ok(result) }
    }
}

impl EquipmentTypeRepository for FakeStore {
    fn get_all(&self) -> impl Future<Output = Result<Vec<EquipmentType>, EquipTrackError>> + Send {
        async { Ok(default_catalog()) }
    }

    fn get_by_id(
        &self,
        id: EquipmentTypeId,
    ) -> impl Future<Output = Result<Option<EquipmentType>, EquipTrackError>> + Send {
        let result = default_catalog().into_iter().find(|t| t.id == id);
        async { Ok(result) }
    }
}
