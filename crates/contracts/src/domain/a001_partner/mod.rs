pub mod aggregate;

pub use aggregate::{
    partner_columns, partner_form_schema, PartnerCreate, PartnerEdit, PartnerRow,
    PARTNER_STATUS_ACTIVE, PARTNER_STATUS_DEACTIVE,
};
