//! Table state shared by every list screen
//!
//! - `column` - fixed column descriptors interpreted by the table renderer
//! - `filter` - per-column search filter with a single highlighted column
//! - `highlight` - case-insensitive match segmentation for cell rendering
//! - `selection` - checked row keys
//! - `pagination`, `sort`, `request` - what a list screen asks the data source for

pub mod column;
pub mod filter;
pub mod highlight;
pub mod pagination;
pub mod request;
pub mod selection;
pub mod sort;

pub use column::{ColumnDescriptor, ColumnFixed, RenderKind, ValueFilterOption};
pub use filter::{filter_predicate, matches_query, ColumnFilter, ColumnFilterState, ValueFilter};
pub use highlight::{fold_case, highlight_segments, HighlightSegment};
pub use pagination::{Paginated, Pagination};
pub use request::ListRequest;
pub use selection::{HeaderCheckState, SelectionSet};
pub use sort::{compare_field_values, sort_rows, SortSpec};
