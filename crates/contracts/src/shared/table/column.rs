use crate::domain::common::StatusKind;

/// How a cell renders its value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderKind {
    /// Plain text, highlighted when the column is the searched one
    Text,
    /// Colored tag looked up from the status vocabulary
    StatusTag(StatusKind),
    /// Edit button that opens the record's form
    EditAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnFixed {
    Left,
    Right,
}

/// One selectable value of a fixed-value column filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueFilterOption {
    pub value: &'static str,
    /// Translation key in the `common` namespace
    pub label_key: &'static str,
}

/// Описание колонки таблицы.
///
/// Колонки задаются данными, а не замыканиями: общий рендерер таблицы
/// интерпретирует `render`, `filterable` и `value_filter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDescriptor {
    /// Field name in the row record
    pub key: &'static str,
    /// Translation key in the screen's namespace
    pub title_key: &'static str,
    pub width: u32,
    pub render: RenderKind,
    /// Column carries the search dropdown
    pub filterable: bool,
    pub sortable: bool,
    pub fixed: Option<ColumnFixed>,
    pub value_filter: Option<&'static [ValueFilterOption]>,
}

impl ColumnDescriptor {
    pub const fn text(key: &'static str, title_key: &'static str, width: u32) -> Self {
        Self {
            key,
            title_key,
            width,
            render: RenderKind::Text,
            filterable: false,
            sortable: false,
            fixed: None,
            value_filter: None,
        }
    }

    /// Status tag column with its value filter
    pub const fn status(
        key: &'static str,
        title_key: &'static str,
        width: u32,
        kind: StatusKind,
        filters: &'static [ValueFilterOption],
    ) -> Self {
        Self {
            key,
            title_key,
            width,
            render: RenderKind::StatusTag(kind),
            filterable: false,
            sortable: false,
            fixed: None,
            value_filter: Some(filters),
        }
    }

    /// Edit button bound to the record key field
    pub const fn edit_action(key: &'static str) -> Self {
        Self {
            key,
            title_key: "",
            width: 50,
            render: RenderKind::EditAction,
            filterable: false,
            sortable: false,
            fixed: Some(ColumnFixed::Right),
            value_filter: None,
        }
    }

    pub const fn searchable(mut self) -> Self {
        self.filterable = true;
        self
    }

    pub const fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub const fn fixed_left(mut self) -> Self {
        self.fixed = Some(ColumnFixed::Left);
        self
    }

    pub fn is_action(&self) -> bool {
        matches!(self.render, RenderKind::EditAction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_flags() {
        let col = ColumnDescriptor::text("partnerCode", "code", 150)
            .searchable()
            .sortable()
            .fixed_left();
        assert!(col.filterable);
        assert!(col.sortable);
        assert_eq!(col.fixed, Some(ColumnFixed::Left));
        assert_eq!(col.render, RenderKind::Text);
    }

    #[test]
    fn test_edit_action_column() {
        let col = ColumnDescriptor::edit_action("key");
        assert!(col.is_action());
        assert!(!col.filterable);
        assert_eq!(col.fixed, Some(ColumnFixed::Right));
    }
}
