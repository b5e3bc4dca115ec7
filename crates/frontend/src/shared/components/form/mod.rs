pub mod form_field;
pub mod form_fields;

pub use form_field::FormField;
pub use form_fields::FormFields;
