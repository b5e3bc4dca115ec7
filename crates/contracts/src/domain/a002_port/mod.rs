pub mod aggregate;

pub use aggregate::{port_columns, port_form_schema, PortCreate, PortDetail, PortEdit, PortRow};
