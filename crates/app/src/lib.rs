//! # equiptrack-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `EquipmentRepository` — CRUD for equipment, with store-assigned ids;
//!     delete cascades to the equipment's maintenance logs
//!   - `MaintenanceLogRepository` — record maintenance and query logs
//!   - `EquipmentTypeRepository` — read-only equipment type catalog
//!   - `Clock` — the reference "today" used by the freshness rule
//! - Define **driving/inbound ports** as use-case structs:
//!   - `EquipmentService` — list/filter/page, create, update, delete
//!   - `MaintenanceService` — log maintenance, list history
//! - Provide **in-process infrastructure** that doesn't need IO (clocks)
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `equiptrack-domain` only (plus `tracing`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod clock;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;
