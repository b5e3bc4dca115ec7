//! Form state shared by every create/edit screen
//!
//! - `field` - field descriptors and values
//! - `state` - per-field state machine, seeding and submit

pub mod field;
pub mod state;

pub use field::{FieldFormat, FieldKind, FieldSpec, FieldValue, FormValues};
pub use state::{FieldError, FieldStatus, FormMode, FormState, PayloadError};
