//! Equipment type — static catalog entry classifying equipment.

use serde::{Deserialize, Serialize};

use crate::id::EquipmentTypeId;

/// A kind of equipment (pump, compressor, …). Reference data, immutable at
/// runtime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EquipmentType {
    pub id: EquipmentTypeId,
    pub name: String,
}

impl EquipmentType {
    /// Create a catalog entry.
    #[must_use]
    pub fn new(id: impl Into<EquipmentTypeId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// The built-in catalog of equipment types, in id order.
#[must_use]
pub fn default_catalog() -> Vec<EquipmentType> {
    [
        (1, "Pump"),
        (2, "Compressor"),
        (3, "Generator"),
        (4, "Conveyor"),
        (5, "Mixer"),
        (6, "Valve"),
    ]
    .into_iter()
    .map(|(id, name)| EquipmentType::new(id, name))
    .collect()
}
