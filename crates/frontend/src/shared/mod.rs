pub mod api_utils;
pub mod components;
pub mod config;
pub mod data_source;
pub mod date_utils;
pub mod detail_form;
pub mod i18n;
pub mod icons;
pub mod list_state;
pub mod list_utils;
pub mod page_frame;
pub mod page_standard;
