//! Port details (create / edit)
//!
//! - model.rs: form construction for the screen mode
//! - view_model.rs: loading, seeding and the save command
//! - view.rs: Leptos component

mod model;
mod view;
mod view_model;

pub use view::PortDetails;
pub use view_model::PortDetailsVm;
