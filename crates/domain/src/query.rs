//! Equipment list query — status/name filtering, sorting and pagination.
//!
//! [`EquipmentQuery::run`] is a pure function over a snapshot of the store:
//! filter by status, then by case-insensitive name substring, then stable
//! sort, then slice one page.

use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::equipment::{Equipment, EquipmentStatus};
use crate::error::ValidationError;
use crate::time::Date;

/// Page size used when the caller does not pick one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Status predicate of a list query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Keep every status.
    #[default]
    All,
    /// Keep only equipment with this status.
    Only(EquipmentStatus),
}

impl StatusFilter {
    #[must_use]
    pub fn matches(self, status: EquipmentStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() || s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

/// Field a list query sorts by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Name,
    Type,
    Status,
    LastCleanedDate,
}

/// Comparable key extracted from an equipment for one [`SortField`].
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum SortKey {
    Text(String),
    Date(Option<Date>),
}

impl SortField {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Type => "type",
            Self::Status => "status",
            Self::LastCleanedDate => "lastCleanedDate",
        }
    }

    // Absent dates compare lowest, so never-cleaned equipment sorts first
    // in ascending order.
    fn key(self, equipment: &Equipment) -> SortKey {
        match self {
            Self::Name => SortKey::Text(equipment.name.to_lowercase()),
            Self::Type => SortKey::Text(equipment.equipment_type.name.to_lowercase()),
            Self::Status => SortKey::Text(equipment.status.as_str().to_owned()),
            Self::LastCleanedDate => SortKey::Date(equipment.last_cleaned_date),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "type" => Ok(Self::Type),
            "status" => Ok(Self::Status),
            "lastcleaneddate" | "last_cleaned_date" => Ok(Self::LastCleanedDate),
            _ => Err(ValidationError::InvalidSortField(s.to_owned())),
        }
    }
}

/// Direction of a sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(ValidationError::InvalidSortDirection(s.to_owned())),
        }
    }
}

/// Parameters of an equipment list query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquipmentQuery {
    pub status: StatusFilter,
    /// Case-insensitive name substring; empty keeps everything.
    pub search: String,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
    /// Zero-based page index.
    pub page: usize,
    pub page_size: usize,
}

impl Default for EquipmentQuery {
    fn default() -> Self {
        Self {
            status: StatusFilter::All,
            search: String::new(),
            sort_field: SortField::Name,
            sort_direction: SortDirection::Asc,
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl EquipmentQuery {
    /// Check query invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPageSize`] when `page_size` is zero.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.page_size == 0 {
            return Err(ValidationError::InvalidPageSize);
        }
        Ok(())
    }

    /// Whether `equipment` passes the status and name predicates.
    #[must_use]
    pub fn matches(&self, equipment: &Equipment) -> bool {
        self.status.matches(equipment.status) && self.matches_name(&equipment.name)
    }

    fn matches_name(&self, name: &str) -> bool {
        self.search.is_empty() || name.to_lowercase().contains(&self.search.to_lowercase())
    }

    /// Filter, sort and paginate `equipment`, which must be in store order.
    ///
    /// Equal sort keys keep store order in both directions.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPageSize`] when `page_size` is zero.
    pub fn run(&self, equipment: Vec<Equipment>) -> Result<Page<Equipment>, ValidationError> {
        self.validate()?;

        let mut matching: Vec<Equipment> = equipment
            .into_iter()
            .filter(|item| self.matches(item))
            .collect();

        let field = self.sort_field;
        match self.sort_direction {
            SortDirection::Asc => matching.sort_by_cached_key(|item| field.key(item)),
            SortDirection::Desc => matching.sort_by_cached_key(|item| Reverse(field.key(item))),
        }

        Ok(Page::slice(matching, self.page, self.page_size))
    }
}

/// One page of results plus totals over the whole filtered set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Number of matching items before pagination.
    pub total_count: usize,
    pub total_pages: usize,
    pub page: usize,
    pub page_size: usize,
}

impl<T> Page<T> {
    /// Cut page `page` out of `all`. `page_size` must be non-zero.
    fn slice(all: Vec<T>, page: usize, page_size: usize) -> Self {
        let total_count = all.len();
        let offset = page.saturating_mul(page_size);
        let items = all.into_iter().skip(offset).take(page_size).collect();
        Self {
            items,
            total_count,
            total_pages: total_count.div_ceil(page_size),
            page,
            page_size,
        }
    }
}
