//! Freshness rule — `Active` equipment must have been cleaned recently.

use crate::equipment::EquipmentStatus;
use crate::error::ValidationError;
use crate::time::Date;

/// Default number of days a cleaning keeps equipment eligible for `Active`.
pub const DEFAULT_WINDOW_DAYS: u32 = 30;

/// Day the freshness rule is judged against unless configured otherwise.
#[must_use]
pub fn default_reference_date() -> Date {
    Date::from_ymd_opt(2026, 2, 28).unwrap_or_default()
}

/// Business rule coupling the `Active` status to cleaning recency.
///
/// A cleaning date is fresh when it is at most `window_days` before the
/// reference day. Dates after the reference day are fresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreshnessRule {
    window_days: u32,
}

impl Default for FreshnessRule {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_DAYS)
    }
}

impl FreshnessRule {
    /// Create a rule with the given window.
    #[must_use]
    pub const fn new(window_days: u32) -> Self {
        Self { window_days }
    }

    /// Length of the freshness window in days.
    #[must_use]
    pub const fn window_days(self) -> u32 {
        self.window_days
    }

    /// Whether a cleaning on `last_cleaned` is still fresh on `today`.
    #[must_use]
    pub fn is_fresh(self, last_cleaned: Date, today: Date) -> bool {
        today.signed_duration_since(last_cleaned).num_days() <= i64::from(self.window_days)
    }

    /// Check that `status` is allowed given the cleaning date.
    ///
    /// Only [`EquipmentStatus::Active`] is constrained.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingCleaningDate`] when `status` is
    /// active without a date, or [`ValidationError::StaleCleaningDate`] when
    /// the date falls outside the window.
    pub fn check(
        self,
        status: EquipmentStatus,
        last_cleaned: Option<Date>,
        today: Date,
    ) -> Result<(), ValidationError> {
        if !status.is_active() {
            return Ok(());
        }
        match last_cleaned {
            None => Err(ValidationError::MissingCleaningDate),
            Some(date) if self.is_fresh(date, today) => Ok(()),
            Some(date) => Err(ValidationError::StaleCleaningDate {
                last_cleaned: date,
                window_days: self.window_days,
            }),
        }
    }
}
