//! Cohort Store — embedded persistence and the entity registries.
//!
//! This crate provides:
//! - The storage adapter ([`Store`], [`RedbStore`], [`MemStore`])
//! - Registries for users, groups, and roles
//! - Error types ([`StoreError`])
//!
//! The rendering layer is expected to call registry operations and
//! re-list after every mutation; registries return data only.

mod error;
pub mod registry;
mod store;

pub use error::StoreError;
pub use registry::{GroupRegistry, RoleRegistry, UserRegistry};
pub use store::{MemStore, RedbStore, Store, StoreConfig, collections};
