//! In-process [`Clock`] implementations.

use equiptrack_domain::freshness::default_reference_date;
use equiptrack_domain::time::{self, Date};

use crate::ports::Clock;

/// Reference day for the freshness rule: either pinned or the wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceClock {
    /// Always report the same day.
    Fixed(Date),
    /// Report the current UTC date.
    System,
}

impl Default for ReferenceClock {
    fn default() -> Self {
        Self::Fixed(default_reference_date())
    }
}

impl Clock for ReferenceClock {
    fn today(&self) -> Date {
        match self {
            Self::Fixed(date) => *date,
            Self::System => time::today(),
        }
    }
}
