//! Equipment — a tracked asset with an operational status and a cleaning date.

mod status;

pub use status::EquipmentStatus;

use serde::{Deserialize, Serialize};

use crate::equipment_type::EquipmentType;
use crate::error::ValidationError;
use crate::freshness::FreshnessRule;
use crate::id::{EquipmentId, EquipmentTypeId};
use crate::time::Date;

/// A tracked piece of equipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub id: EquipmentId,
    pub name: String,
    #[serde(rename = "type")]
    pub equipment_type: EquipmentType,
    pub status: EquipmentStatus,
    pub last_cleaned_date: Option<Date>,
}

impl Equipment {
    /// Materialize a validated draft under the given id.
    #[must_use]
    pub fn from_draft(id: EquipmentId, draft: EquipmentDraft) -> Self {
        Self {
            id,
            name: draft.name,
            equipment_type: draft.equipment_type,
            status: draft.status,
            last_cleaned_date: draft.last_cleaned_date,
        }
    }

    /// Replace every mutable field with the draft's values, keeping the id.
    pub fn apply(&mut self, draft: EquipmentDraft) {
        self.name = draft.name;
        self.equipment_type = draft.equipment_type;
        self.status = draft.status;
        self.last_cleaned_date = draft.last_cleaned_date;
    }

    /// Record a cleaning: the equipment becomes `Active` as of `date`.
    ///
    /// Status and date are set together, so the freshness rule holds by
    /// construction and is not re-checked.
    pub fn record_cleaning(&mut self, date: Date) {
        self.status = EquipmentStatus::Active;
        self.last_cleaned_date = Some(date);
    }
}

/// Caller-supplied fields for creating or updating equipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentInput {
    #[serde(default)]
    pub name: String,
    pub type_id: Option<EquipmentTypeId>,
    pub status: EquipmentStatus,
    #[serde(default)]
    pub last_cleaned_date: Option<Date>,
}

impl EquipmentInput {
    /// Create an input with the given name and type, `Inactive` and never cleaned.
    #[must_use]
    pub fn new(name: impl Into<String>, type_id: impl Into<EquipmentTypeId>) -> Self {
        Self {
            name: name.into(),
            type_id: Some(type_id.into()),
            status: EquipmentStatus::Inactive,
            last_cleaned_date: None,
        }
    }

    #[must_use]
    pub fn with_status(mut self, status: EquipmentStatus) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub fn with_last_cleaned_date(mut self, date: Date) -> Self {
        self.last_cleaned_date = Some(date);
        self
    }

    /// Check the fields that need no catalog lookup and return the requested
    /// type id.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] when the name is blank, or
    /// [`ValidationError::MissingEquipmentType`] when no type is given.
    pub fn required_type_id(&self) -> Result<EquipmentTypeId, ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        self.type_id.ok_or(ValidationError::MissingEquipmentType)
    }

    /// Validate against the resolved type and the freshness rule.
    ///
    /// The name is trimmed.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when the name is blank, the resolved
    /// type does not match the requested one, or the status breaks the
    /// freshness rule on `today`.
    pub fn into_draft(
        self,
        equipment_type: EquipmentType,
        rule: FreshnessRule,
        today: Date,
    ) -> Result<EquipmentDraft, ValidationError> {
        let type_id = self.required_type_id()?;
        if type_id != equipment_type.id {
            return Err(ValidationError::UnknownEquipmentType(type_id));
        }
        rule.check(self.status, self.last_cleaned_date, today)?;
        Ok(EquipmentDraft {
            name: self.name.trim().to_owned(),
            equipment_type,
            status: self.status,
            last_cleaned_date: self.last_cleaned_date,
        })
    }
}

/// Validated equipment fields, not yet assigned an id.
///
/// Only obtainable through [`EquipmentInput::into_draft`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquipmentDraft {
    name: String,
    equipment_type: EquipmentType,
    status: EquipmentStatus,
    last_cleaned_date: Option<Date>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd_opt(y, m, d).unwrap()
    }

    fn pump() -> EquipmentType {
        EquipmentType::new(1, "Pump")
    }

    fn reference() -> Date {
        date(2026, 2, 28)
    }

    #[test]
    fn should_build_draft_when_input_is_valid() {
        let draft = EquipmentInput::new("  Hydraulic Pump A1 ", 1)
            .with_status(EquipmentStatus::Active)
            .with_last_cleaned_date(date(2026, 2, 20))
            .into_draft(pump(), FreshnessRule::default(), reference())
            .unwrap();

        let equipment = Equipment::from_draft(EquipmentId::new(11), draft);
        assert_eq!(equipment.name, "Hydraulic Pump A1");
        assert_eq!(equipment.equipment_type, pump());
        assert_eq!(equipment.status, EquipmentStatus::Active);
        assert_eq!(equipment.last_cleaned_date, Some(date(2026, 2, 20)));
    }

    #[test]
    fn should_return_validation_error_when_name_is_blank() {
        let result = EquipmentInput::new("   ", 1).required_type_id();
        assert_eq!(result, Err(ValidationError::EmptyName));
    }

    #[test]
    fn should_return_validation_error_when_type_is_missing() {
        let mut input = EquipmentInput::new("Pump", 1);
        input.type_id = None;
        assert_eq!(
            input.required_type_id(),
            Err(ValidationError::MissingEquipmentType)
        );
    }

    #[test]
    fn should_reject_draft_when_resolved_type_differs() {
        let result = EquipmentInput::new("Pump", 2).into_draft(
            pump(),
            FreshnessRule::default(),
            reference(),
        );
        assert_eq!(
            result,
            Err(ValidationError::UnknownEquipmentType(EquipmentTypeId::new(2)))
        );
    }

    #[test]
    fn should_reject_draft_when_active_and_stale() {
        let result = EquipmentInput::new("Pump", 1)
            .with_status(EquipmentStatus::Active)
            .with_last_cleaned_date(date(2025, 11, 20))
            .into_draft(pump(), FreshnessRule::default(), reference());
        assert!(matches!(
            result,
            Err(ValidationError::StaleCleaningDate { .. })
        ));
    }

    #[test]
    fn should_replace_mutable_fields_and_keep_id_when_applying_draft() {
        let mut equipment = Equipment::from_draft(
            EquipmentId::new(3),
            EquipmentInput::new("Old", 1)
                .into_draft(pump(), FreshnessRule::default(), reference())
                .unwrap(),
        );
        let draft = EquipmentInput::new("New", 5)
            .with_status(EquipmentStatus::UnderMaintenance)
            .into_draft(
                EquipmentType::new(5, "Mixer"),
                FreshnessRule::default(),
                reference(),
            )
            .unwrap();

        equipment.apply(draft);

        assert_eq!(equipment.id, EquipmentId::new(3));
        assert_eq!(equipment.name, "New");
        assert_eq!(equipment.equipment_type.name, "Mixer");
        assert_eq!(equipment.status, EquipmentStatus::UnderMaintenance);
        assert_eq!(equipment.last_cleaned_date, None);
    }

    #[test]
    fn should_activate_when_recording_cleaning() {
        let mut equipment = Equipment {
            id: EquipmentId::new(4),
            name: "Belt Conveyor D4".to_string(),
            equipment_type: EquipmentType::new(4, "Conveyor"),
            status: EquipmentStatus::Inactive,
            last_cleaned_date: Some(date(2025, 12, 1)),
        };

        equipment.record_cleaning(date(2026, 2, 28));

        assert_eq!(equipment.status, EquipmentStatus::Active);
        assert_eq!(equipment.last_cleaned_date, Some(date(2026, 2, 28)));
    }

    #[test]
    fn should_serialize_with_camel_case_and_type_field() {
        let equipment = Equipment {
            id: EquipmentId::new(1),
            name: "Hydraulic Pump A1".to_string(),
            equipment_type: pump(),
            status: EquipmentStatus::Active,
            last_cleaned_date: Some(date(2026, 2, 20)),
        };
        let value = serde_json::to_value(&equipment).unwrap();
        assert_eq!(value["type"]["name"], "Pump");
        assert_eq!(value["lastCleanedDate"], "2026-02-20");
        assert_eq!(value["status"], "Active");
    }

    #[test]
    fn should_deserialize_input_without_cleaning_date() {
        let input: EquipmentInput =
            serde_json::from_str(r#"{"name":"Valve","typeId":6,"status":"Inactive"}"#).unwrap();
        assert_eq!(input.type_id, Some(EquipmentTypeId::new(6)));
        assert_eq!(input.last_cleaned_date, None);
    }

    #[test]
    fn should_report_empty_name_when_name_is_absent_from_json() {
        let input: EquipmentInput =
            serde_json::from_str(r#"{"typeId":6,"status":"Inactive"}"#).unwrap();
        assert_eq!(input.required_type_id(), Err(ValidationError::EmptyName));
    }
}
