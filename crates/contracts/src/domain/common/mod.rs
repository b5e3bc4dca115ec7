//! Common types and traits for all entities

pub mod entity_kind;
pub mod entity_record;
pub mod lookup;
pub mod status;

// Re-exports
pub use entity_kind::EntityKind;
pub use entity_record::{EntityRecord, FieldLookup, SavePayload};
pub use lookup::{filter_options, label_for, LookupKind, LookupOption};
pub use status::{RecordStatus, StatusKind, StatusTag};
