//! Shared application state for axum handlers.

use std::sync::Arc;

use equiptrack_app::ports::{
    Clock, EquipmentRepository, EquipmentTypeRepository, MaintenanceLogRepository,
};
use equiptrack_app::services::equipment_service::EquipmentService;
use equiptrack_app::services::maintenance_service::MaintenanceService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository and clock types to avoid dynamic dispatch.
/// `Clone` is implemented by hand so only the `Arc` wrappers are cloned.
pub struct AppState<ER, MR, TR, C> {
    /// Equipment query and mutations.
    pub equipment_service: Arc<EquipmentService<ER, TR, C>>,
    /// Maintenance logging and history.
    pub maintenance_service: Arc<MaintenanceService<ER, MR>>,
}

impl<ER, MR, TR, C> Clone for AppState<ER, MR, TR, C> {
    fn clone(&self) -> Self {
        Self {
            equipment_service: Arc::clone(&self.equipment_service),
            maintenance_service: Arc::clone(&self.maintenance_service),
        }
    }
}

impl<ER, MR, TR, C> AppState<ER, MR, TR, C>
where
    ER: EquipmentRepository + Send + Sync + 'static,
    MR: MaintenanceLogRepository + Send + Sync + 'static,
    TR: EquipmentTypeRepository + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        equipment_service: EquipmentService<ER, TR, C>,
        maintenance_service: MaintenanceService<ER, MR>,
    ) -> Self {
        Self {
            equipment_service: Arc::new(equipment_service),
            maintenance_service: Arc::new(maintenance_service),
        }
    }
}
