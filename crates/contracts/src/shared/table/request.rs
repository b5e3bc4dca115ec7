use super::filter::{ColumnFilter, ColumnFilterState, ValueFilter};
use super::pagination::{Paginated, Pagination};
use super::sort::{sort_rows, SortSpec};
use crate::domain::common::FieldLookup;
use serde::{Deserialize, Serialize};

/// Что экран списка запрашивает у источника данных
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRequest {
    pub paginate_request: Pagination,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<ColumnFilter>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub value_filters: Vec<ValueFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortSpec>,
}

impl ListRequest {
    pub fn new(
        paginate_request: Pagination,
        filter: &ColumnFilterState,
        sort: Option<SortSpec>,
    ) -> Self {
        Self {
            paginate_request,
            filters: filter.filters(),
            value_filters: filter.value_filters(),
            sort,
        }
    }

    pub fn includes<R: FieldLookup + ?Sized>(&self, row: &R) -> bool {
        self.filters
            .iter()
            .all(|f| super::filter::filter_predicate(row, &f.column, &f.query))
            && self.value_filters.iter().all(|f| {
                let value = row.field_text(&f.column).unwrap_or_default();
                f.values.iter().any(|v| *v == value)
            })
    }

    /// Filter, sort and page a full row set
    pub fn apply<R: FieldLookup + Clone>(&self, rows: &[R]) -> Paginated<R> {
        let mut matching: Vec<R> = rows.iter().filter(|r| self.includes(*r)).cloned().collect();
        if let Some(spec) = &self.sort {
            sort_rows(&mut matching, spec);
        }
        Paginated::from_rows(&matching, self.paginate_request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn partners() -> Vec<serde_json::Value> {
        (1..=46)
            .map(|i| {
                json!({
                    "key": i.to_string(),
                    "partnerCode": if i == 7 { "ZZ1" } else { "ASLS152" },
                    "status": if i % 2 == 1 { "Active" } else { "DeActive" },
                })
            })
            .collect()
    }

    #[test]
    fn test_apply_filters_then_pages() {
        let mut state = ColumnFilterState::new();
        state.confirm("partnerCode", "asls");
        state.set_values("status", vec!["Active".into()]);
        let request = ListRequest::new(Pagination::new(1, 10), &state, None);

        let page = request.apply(&partners());
        // 23 odd keys minus key 7
        assert_eq!(page.total, 22);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.data.len(), 10);
    }

    #[test]
    fn test_apply_sorts_numeric_keys_desc() {
        let request = ListRequest {
            paginate_request: Pagination::new(1, 3),
            sort: Some(SortSpec { field: "key".into(), ascending: false }),
            ..ListRequest::default()
        };
        let page = request.apply(&partners());
        let keys: Vec<_> = page.data.iter().map(|r| r["key"].as_str().unwrap_or("")).collect();
        assert_eq!(keys, vec!["46", "45", "44"]);
    }

    #[test]
    fn test_default_request_skips_empty_parts_on_wire() {
        let json = serde_json::to_value(ListRequest::default()).unwrap();
        assert!(json.get("filters").is_none());
        assert!(json.get("sort").is_none());
        assert_eq!(json["paginateRequest"]["currentPage"], 1);
    }
}
