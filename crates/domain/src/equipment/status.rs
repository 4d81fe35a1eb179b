//! Equipment status — the operational state of a piece of equipment.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Operational state of a piece of equipment.
///
/// Transitions are unrestricted, except that entering [`Active`](Self::Active)
/// through a create or update must satisfy the
/// [freshness rule](crate::freshness::FreshnessRule).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentStatus {
    #[serde(alias = "ACTIVE")]
    Active,
    #[serde(alias = "INACTIVE")]
    Inactive,
    #[serde(rename = "Under Maintenance", alias = "UNDER_MAINTENANCE")]
    UnderMaintenance,
}

impl EquipmentStatus {
    /// Human-readable label, also used as the sort key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::UnderMaintenance => "Under Maintenance",
        }
    }

    /// Whether this status is [`Active`](Self::Active).
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

impl fmt::Display for EquipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EquipmentStatus {
    type Err = ValidationError;

    /// Accepts the labels case-insensitively, with spaces, `_` or `-` between
    /// words (`"Under Maintenance"`, `"UNDER_MAINTENANCE"`, `"under-maintenance"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            "undermaintenance" => Ok(Self::UnderMaintenance),
            _ => Err(ValidationError::InvalidStatus(s.to_owned())),
        }
    }
}
