//! Компоненты таблиц экранов списков

pub mod column_search;
pub mod entity_table;
pub mod highlighted_text;
pub mod sortable_header_cell;
pub mod status_tag;
pub mod table_cell_checkbox;
pub mod table_header_checkbox;
pub mod value_filter;

pub use entity_table::EntityTable;
pub use sortable_header_cell::SortableHeaderCell;
pub use table_cell_checkbox::TableCellCheckbox;
pub use table_header_checkbox::TableHeaderCheckbox;
