//! # equiptrack-domain
//!
//! Pure domain model for the equiptrack equipment-tracking system.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, calendar dates
//! - Define **Equipment** (tracked assets with a status and a cleaning date)
//! - Define **Equipment types** (static catalog entries)
//! - Define **Maintenance logs** (dated records that reactivate equipment)
//! - Define the **freshness rule** tying the `Active` status to cleaning recency
//! - Define the **list query** (status/name filtering, sorting, pagination)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod equipment;
pub mod equipment_type;
pub mod freshness;
pub mod maintenance;
pub mod query;
