//! Page category constants for tab page standardization.
//!
//! Every page rendered inside a tab declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a002_port--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator keeps the entity name searchable: copy the id from
//! the DOM inspector and you land in `domain/a002_port/`.

/// List of records: table with column search and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Create / edit form for a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// System administration page.
pub const PAGE_CAT_SYSTEM: &str = "system";

/// All known category values.
pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_DETAIL, PAGE_CAT_SYSTEM];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && !category.is_empty(),
        None => false,
    }
}

/// Build the page id for an entity namespace and category
pub fn page_id(entity: &str, category: &str) -> String {
    format!("{entity}--{category}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a001_partner--list"));
        assert!(is_valid_page_id(&page_id("a002_port", PAGE_CAT_DETAIL)));
        assert!(!is_valid_page_id("a001_partner"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a001_partner--"));
    }

    #[test]
    fn test_categories_are_distinct() {
        let mut all = ALL_CATEGORIES.to_vec();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), ALL_CATEGORIES.len());
    }
}
