//! Demo data set: ten pieces of equipment and five maintenance logs, built
//! around a reference day of 2026-02-28.

use equiptrack_domain::equipment::{Equipment, EquipmentStatus};
use equiptrack_domain::equipment_type::{EquipmentType, default_catalog};
use equiptrack_domain::id::{EquipmentId, EquipmentTypeId, MaintenanceLogId};
use equiptrack_domain::maintenance::MaintenanceLog;
use equiptrack_domain::time::Date;

fn day(y: i32, m: u32, d: u32) -> Date {
    // Literal dates below are all valid.
    Date::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn catalog_entry(catalog: &[EquipmentType], id: i64) -> EquipmentType {
    let id = EquipmentTypeId::new(id);
    catalog
        .iter()
        .find(|kind| kind.id == id)
        .cloned()
        .unwrap_or_else(|| EquipmentType::new(id, "Unknown"))
}

/// Demo equipment, in store order.
#[must_use]
pub fn equipment() -> Vec<Equipment> {
    use EquipmentStatus::{Active, Inactive, UnderMaintenance};

    let catalog = default_catalog();
    [
        (1, "Hydraulic Pump A1", 1, Active, day(2026, 2, 20)),
        (2, "Air Compressor B2", 2, Active, day(2026, 2, 15)),
        (3, "Diesel Generator C3", 3, UnderMaintenance, day(2026, 1, 10)),
        (4, "Belt Conveyor D4", 4, Inactive, day(2025, 12, 1)),
        (5, "Industrial Mixer E5", 5, Active, day(2026, 2, 25)),
        (6, "Control Valve F6", 6, Active, day(2026, 2, 18)),
        (7, "Centrifugal Pump A7", 1, Inactive, day(2025, 11, 20)),
        (8, "Screw Compressor B8", 2, UnderMaintenance, day(2026, 1, 25)),
        (9, "Portable Generator C9", 3, Active, day(2026, 2, 22)),
        (10, "Ribbon Mixer E10", 5, Active, day(2026, 2, 27)),
    ]
    .into_iter()
    .map(|(id, name, type_id, status, cleaned)| Equipment {
        id: EquipmentId::new(id),
        name: name.to_string(),
        equipment_type: catalog_entry(&catalog, type_id),
        status,
        last_cleaned_date: Some(cleaned),
    })
    .collect()
}

/// Demo maintenance logs, in store order.
#[must_use]
pub fn maintenance_logs() -> Vec<MaintenanceLog> {
    [
        (1, 1, day(2026, 2, 20), "Routine cleaning and lubrication", "John Smith"),
        (2, 2, day(2026, 2, 15), "Filter replacement and cleaning", "Jane Doe"),
        (3, 5, day(2026, 2, 25), "Blade inspection and cleaning", "Mike Johnson"),
        (4, 3, day(2026, 1, 10), "Oil change and general maintenance", "Sarah Williams"),
        (5, 6, day(2026, 2, 18), "Seal replacement and cleaning", "Tom Brown"),
    ]
    .into_iter()
    .map(|(id, equipment_id, date, notes, performed_by)| MaintenanceLog {
        id: MaintenanceLogId::new(id),
        equipment_id: EquipmentId::new(equipment_id),
        maintenance_date: date,
        notes: notes.to_string(),
        performed_by: performed_by.to_string(),
    })
    .collect()
}
