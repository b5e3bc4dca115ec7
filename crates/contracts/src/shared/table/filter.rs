use super::highlight::{fold_case, highlight_segments, HighlightSegment};
use crate::domain::common::FieldLookup;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Substring query engaged on one column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnFilter {
    pub column: String,
    pub query: String,
}

/// Set of allowed values engaged on one column (status tags)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueFilter {
    pub column: String,
    pub values: Vec<String>,
}

/// Case-insensitive substring check; an empty query matches everything
pub fn matches_query(value: &str, query: &str) -> bool {
    fold_case(value).contains(&fold_case(query))
}

/// True iff the string form of `row[column]` contains `query`, ignoring case.
/// A missing field compares as the empty string.
pub fn filter_predicate<R: FieldLookup + ?Sized>(row: &R, column: &str, query: &str) -> bool {
    let value = row.field_text(column).unwrap_or_default();
    matches_query(&value, query)
}

/// Состояние поиска по колонкам одного экрана.
///
/// Each column may have an engaged query; the table keeps a row only when
/// every engaged query matches. Independently of that, exactly one column at
/// most is the highlighted one: the column whose search was confirmed last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnFilterState {
    engaged: BTreeMap<String, String>,
    value_filters: BTreeMap<String, Vec<String>>,
    search_text: String,
    searched_column: Option<String>,
}

impl ColumnFilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Confirm `query` on `column`: engage it and make the column the highlighted one.
    ///
    /// An empty query disengages the column's filter; the column still becomes
    /// the highlighted one, with nothing to highlight.
    pub fn confirm(&mut self, column: &str, query: &str) {
        if query.is_empty() {
            self.engaged.remove(column);
        } else {
            self.engaged.insert(column.to_string(), query.to_string());
        }
        self.search_text = query.to_string();
        self.searched_column = Some(column.to_string());
    }

    /// Clear the column's filter together with the search text and highlight
    pub fn reset(&mut self, column: &str) {
        self.engaged.remove(column);
        self.search_text.clear();
        self.searched_column = None;
    }

    pub fn clear_all(&mut self) {
        *self = Self::default();
    }

    /// Engage a fixed-value filter; an empty selection disengages it
    pub fn set_values(&mut self, column: &str, values: Vec<String>) {
        if values.is_empty() {
            self.value_filters.remove(column);
        } else {
            self.value_filters.insert(column.to_string(), values);
        }
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn searched_column(&self) -> Option<&str> {
        self.searched_column.as_deref()
    }

    pub fn query_for(&self, column: &str) -> Option<&str> {
        self.engaged.get(column).map(String::as_str)
    }

    pub fn values_for(&self, column: &str) -> &[String] {
        self.value_filters
            .get(column)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether the column's filter icon shows as active
    pub fn is_engaged(&self, column: &str) -> bool {
        self.engaged.contains_key(column) || self.value_filters.contains_key(column)
    }

    pub fn active_count(&self) -> usize {
        self.engaged.len() + self.value_filters.len()
    }

    pub fn filters(&self) -> Vec<ColumnFilter> {
        self.engaged
            .iter()
            .map(|(column, query)| ColumnFilter {
                column: column.clone(),
                query: query.clone(),
            })
            .collect()
    }

    pub fn value_filters(&self) -> Vec<ValueFilter> {
        self.value_filters
            .iter()
            .map(|(column, values)| ValueFilter {
                column: column.clone(),
                values: values.clone(),
            })
            .collect()
    }

    pub fn includes<R: FieldLookup + ?Sized>(&self, row: &R) -> bool {
        self.engaged
            .iter()
            .all(|(column, query)| filter_predicate(row, column, query))
            && self.value_filters.iter().all(|(column, values)| {
                let value = row.field_text(column).unwrap_or_default();
                values.iter().any(|v| *v == value)
            })
    }

    pub fn apply<R: FieldLookup + Clone>(&self, rows: &[R]) -> Vec<R> {
        rows.iter().filter(|row| self.includes(*row)).cloned().collect()
    }

    /// Segments for a cell: highlighted only in the searched column
    pub fn render(&self, column: &str, value: &str) -> Vec<HighlightSegment> {
        if self.searched_column.as_deref() == Some(column) {
            highlight_segments(value, &self.search_text)
        } else {
            highlight_segments(value, "")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows() -> Vec<serde_json::Value> {
        vec![
            json!({"key": "1", "partnerCode": "ASLS152", "partnerName": "Đông Á", "status": "Active"}),
            json!({"key": "2", "partnerCode": "X", "partnerName": "Dong A", "status": "DeActive"}),
        ]
    }

    #[test]
    fn test_predicate_is_case_insensitive_contains() {
        let row = json!({"partnerCode": "ASLS152"});
        assert!(filter_predicate(&row, "partnerCode", "asls"));
        assert!(filter_predicate(&row, "partnerCode", "S15"));
        assert!(!filter_predicate(&row, "partnerCode", "ASLX"));
        assert!(filter_predicate(&row, "partnerCode", ""));
        assert!(!filter_predicate(&row, "missing", "a"));
        assert!(filter_predicate(&row, "missing", ""));
    }

    #[test]
    fn test_predicate_matches_lowercase_definition() {
        let values = ["ASLS152", "Đông Á", "Hồ Chí Minh", "abcd@gmail.com", ""];
        let queries = ["", "á", "ĐÔNG", "minh", "GMAIL", "x"];
        for v in values {
            for q in queries {
                let row = json!({ "c": v });
                assert_eq!(
                    filter_predicate(&row, "c", q),
                    v.to_lowercase().contains(&q.to_lowercase()),
                    "value={v:?} query={q:?}"
                );
            }
        }
    }

    #[test]
    fn test_confirm_filters_and_highlights() {
        let mut state = ColumnFilterState::new();
        state.confirm("partnerCode", "ASLS");

        let filtered = state.apply(&rows());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0]["key"], "1");

        let segments = state.render("partnerCode", "ASLS152");
        assert_eq!(
            segments,
            vec![HighlightSegment::matched("ASLS"), HighlightSegment::plain("152")]
        );
    }

    #[test]
    fn test_reset_restores_rows_and_clears_highlight() {
        let mut state = ColumnFilterState::new();
        state.confirm("partnerCode", "ASLS");
        state.reset("partnerCode");

        assert_eq!(state.apply(&rows()).len(), 2);
        assert_eq!(state.search_text(), "");
        assert_eq!(state.searched_column(), None);
        assert!(!state.is_engaged("partnerCode"));
        assert_eq!(
            state.render("partnerCode", "ASLS152"),
            vec![HighlightSegment::plain("ASLS152")]
        );
    }

    #[test]
    fn test_highlight_moves_to_last_confirmed_column() {
        let mut state = ColumnFilterState::new();
        state.confirm("partnerCode", "ASLS");
        state.confirm("partnerName", "dong");

        assert_eq!(state.searched_column(), Some("partnerName"));
        assert!(state
            .render("partnerCode", "ASLS152")
            .iter()
            .all(|s| !s.matched));
        assert!(state
            .render("partnerName", "Dong A")
            .iter()
            .any(|s| s.matched && s.text == "Dong"));
    }

    #[test]
    fn test_engaged_filters_combine() {
        let mut state = ColumnFilterState::new();
        state.confirm("partnerCode", "x");
        state.confirm("partnerName", "dong");
        assert_eq!(state.active_count(), 2);
        let filtered = state.apply(&rows());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0]["key"], "2");
    }

    #[test]
    fn test_confirm_empty_query_disengages_but_keeps_column() {
        let mut state = ColumnFilterState::new();
        state.confirm("partnerCode", "ASLS");
        state.confirm("partnerCode", "");
        assert!(!state.is_engaged("partnerCode"));
        assert_eq!(state.searched_column(), Some("partnerCode"));
        assert_eq!(state.apply(&rows()).len(), 2);
        assert!(state.render("partnerCode", "ASLS152").iter().all(|s| !s.matched));
    }

    #[test]
    fn test_value_filter() {
        let mut state = ColumnFilterState::new();
        state.set_values("status", vec!["DeActive".to_string()]);
        let filtered = state.apply(&rows());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0]["key"], "2");

        state.set_values("status", Vec::new());
        assert_eq!(state.apply(&rows()).len(), 2);
    }

    #[test]
    fn test_filtered_row_is_also_highlighted() {
        let mut state = ColumnFilterState::new();
        state.confirm("address", "οδος");
        let row = json!({ "address": "ΟΔΟΣ ΕΡΜΟΥ" });
        assert!(state.includes(&row));
        let segments = state.render("address", "ΟΔΟΣ ΕΡΜΟΥ");
        assert!(segments.iter().any(|s| s.matched && s.text == "ΟΔΟΣ"));
    }
}
