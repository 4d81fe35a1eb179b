//! Clock port — where the freshness rule gets "today" from.

use std::sync::Arc;

use equiptrack_domain::time::Date;

/// Source of the reference day for date-relative business rules.
pub trait Clock {
    /// The current reference day.
    fn today(&self) -> Date;
}

impl<T: Clock + ?Sized> Clock for Arc<T> {
    fn today(&self) -> Date {
        (**self).today()
    }
}
