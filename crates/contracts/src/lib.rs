//! Shared types for the back-office screens.
//!
//! Everything in this crate is framework-free: entity records and payloads,
//! plus the table and form state that the frontend binds to signals.

pub mod domain;
pub mod shared;
pub mod system;
