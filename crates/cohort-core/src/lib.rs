//! Cohort Core — domain models, error taxonomy, and membership rules
//! for a local-first user/group/role admin console.
//!
//! This crate is storage-free: everything here is a pure function of
//! its inputs. Persistence and the registry operations live in
//! `cohort-store`.

pub mod error;
pub mod membership;
pub mod models;
