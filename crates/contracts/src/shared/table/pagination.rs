use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Page request; `current_page` is 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: usize,
    pub page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    pub fn new(current_page: usize, page_size: usize) -> Self {
        Self {
            current_page: current_page.max(1),
            page_size: page_size.max(1),
        }
    }
}

/// One page of rows as returned by the data source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub current_page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    #[serde(default)]
    pub total: usize,
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            current_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            total_pages: 0,
            total: 0,
        }
    }
}

pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

impl<T: Clone> Paginated<T> {
    /// Cut a page out of the full row set. A page past the end clamps to the
    /// last page so a shrinking set never leaves the table empty.
    pub fn from_rows(rows: &[T], pagination: Pagination) -> Self {
        let page_size = pagination.page_size.max(1);
        let total = rows.len();
        let pages = total_pages(total, page_size);
        let current_page = pagination.current_page.clamp(1, pages.max(1));
        let start = (current_page - 1) * page_size;
        let end = (start + page_size).min(total);
        let data = if start < end {
            rows[start..end].to_vec()
        } else {
            Vec::new()
        };
        Self {
            data,
            current_page,
            page_size,
            total_pages: pages,
            total,
        }
    }
}

impl<T> Paginated<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            data: self.data.into_iter().map(f).collect(),
            current_page: self.current_page,
            page_size: self.page_size,
            total_pages: self.total_pages,
            total: self.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(46, 10), 5);
        assert_eq!(total_pages(40, 10), 4);
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn test_last_partial_page() {
        let rows: Vec<usize> = (1..=46).collect();
        let page = Paginated::from_rows(&rows, Pagination::new(5, 10));
        assert_eq!(page.data, vec![41, 42, 43, 44, 45, 46]);
        assert_eq!(page.total_pages, 5);
        assert_eq!(page.total, 46);
    }

    #[test]
    fn test_page_past_end_clamps() {
        let rows: Vec<usize> = (1..=12).collect();
        let page = Paginated::from_rows(&rows, Pagination::new(9, 10));
        assert_eq!(page.current_page, 2);
        assert_eq!(page.data, vec![11, 12]);
    }

    #[test]
    fn test_empty_rows() {
        let rows: Vec<usize> = Vec::new();
        let page = Paginated::from_rows(&rows, Pagination::default());
        assert!(page.data.is_empty());
        assert_eq!(page.current_page, 1);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let json = serde_json::to_value(Pagination::new(2, 20)).unwrap();
        assert_eq!(json["currentPage"], 2);
        assert_eq!(json["pageSize"], 20);
    }
}
