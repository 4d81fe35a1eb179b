//! # equiptrack-adapter-storage-memory
//!
//! Process-local persistence adapter.
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `equiptrack-app::ports::storage`
//! - Own the equipment and maintenance log collections plus the type catalog
//! - Assign sequential ids from one atomic counter per collection
//! - Provide the demo data set the daemon starts with
//!
//! State lives for the lifetime of the [`InMemoryStore`] value and is lost on
//! process exit.
//!
//! ## Dependency rule
//! Depends on `equiptrack-app` (for port traits) and `equiptrack-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod error;
pub mod seed;
pub mod store;

pub use store::InMemoryStore;
