//! Общая таблица экранов списков
//!
//! Колонки описываются данными (`ColumnDescriptor`), таблица сама решает,
//! как рисовать ячейку: текст с подсветкой поиска, тег статуса или кнопку
//! редактирования. Все изменения поиска, сортировки и выбора идут в
//! `ListState`, после чего вызывается `on_reload`.

use super::column_search::ColumnSearch;
use super::highlighted_text::HighlightedText;
use super::sortable_header_cell::SortableHeaderCell;
use super::status_tag::StatusTag;
use super::table_cell_checkbox::TableCellCheckbox;
use super::table_header_checkbox::TableHeaderCheckbox;
use super::value_filter::ValueFilter;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::list_state::ListState;
use contracts::domain::common::EntityRecord;
use contracts::shared::table::{ColumnDescriptor, ColumnFixed, RenderKind};
use leptos::prelude::*;
use thaw::*;

fn fixed_class(col: &ColumnDescriptor) -> &'static str {
    match col.fixed {
        Some(ColumnFixed::Left) => "table__cell--fixed-left",
        Some(ColumnFixed::Right) => "table__cell--fixed-right",
        None => "",
    }
}

#[component]
pub fn EntityTable<R>(
    state: RwSignal<ListState<R>>,
    columns: Vec<ColumnDescriptor>,
    /// Пространство переводов заголовков колонок
    namespace: &'static str,
    on_reload: Callback<()>,
    #[prop(optional)] on_edit: Option<Callback<String>>,
    #[prop(optional, default = true)] selectable: bool,
) -> impl IntoView
where
    R: EntityRecord + Send + Sync + 'static,
{
    let i18n = use_i18n();
    let columns = StoredValue::new(columns);

    let on_sort = Callback::new(move |field: &'static str| {
        state.update(|s| s.toggle_sort(field));
        on_reload.run(());
    });

    let header_cells = columns
        .get_value()
        .into_iter()
        .map(|col| {
            let key = col.key;
            let title = Signal::derive(move || {
                if col.title_key.is_empty() {
                    String::new()
                } else {
                    i18n.t(namespace, col.title_key)
                }
            });
            let search = col.filterable.then(|| {
                view! {
                    <ColumnSearch
                        title=title
                        query=Signal::derive(move || {
                            state.with(|s| s.filter.query_for(key).unwrap_or_default().to_string())
                        })
                        engaged=Signal::derive(move || state.with(|s| s.filter.is_engaged(key)))
                        on_confirm=Callback::new(move |(query, _close): (String, bool)| {
                            state.update(|s| s.confirm_search(key, &query));
                            on_reload.run(());
                        })
                        on_reset=Callback::new(move |_| {
                            state.update(|s| s.reset_search(key));
                            on_reload.run(());
                        })
                    />
                }
            });
            let value_filter = col.value_filter.map(|options| {
                view! {
                    <ValueFilter
                        options=options
                        selected=Signal::derive(move || {
                            state.with(|s| s.filter.values_for(key).to_vec())
                        })
                        on_change=Callback::new(move |values: Vec<String>| {
                            state.update(|s| s.set_value_filter(key, values));
                            on_reload.run(());
                        })
                    />
                }
            });
            view! {
                <SortableHeaderCell
                    label=title
                    sort_field=key
                    sortable=col.sortable
                    sort=Signal::derive(move || state.with(|s| s.sort.clone()))
                    on_sort=on_sort
                    min_width=col.width as f64
                    class=fixed_class(&col)
                >
                    {search}
                    {value_filter}
                </SortableHeaderCell>
            }
        })
        .collect_view();

    let render_row = move |row: R| {
        let row_key = row.key();
        let checkbox = selectable.then(|| {
            let key_for_checked = row_key.clone();
            view! {
                <TableCellCheckbox
                    item_id=row_key.clone()
                    checked=Signal::derive(move || state.with(|s| s.selection.contains(&key_for_checked)))
                    on_change=Callback::new(move |(id, checked): (String, bool)| {
                        state.update(|s| s.selection.toggle(&id, checked));
                    })
                />
            }
        });
        let cells = columns
            .get_value()
            .into_iter()
            .map(|col| {
                let raw = row.field_text(col.key).unwrap_or_default();
                let class = fixed_class(&col);
                match col.render {
                    RenderKind::Text => {
                        let key = col.key;
                        view! {
                            <TableCell class=class>
                                <TableCellLayout>
                                    <HighlightedText segments=Signal::derive(move || {
                                        state.with(|s| s.filter.render(key, &raw))
                                    }) />
                                </TableCellLayout>
                            </TableCell>
                        }
                        .into_any()
                    }
                    RenderKind::StatusTag(kind) => view! {
                        <TableCell class=class>
                            <StatusTag kind=kind raw=raw />
                        </TableCell>
                    }
                    .into_any(),
                    RenderKind::EditAction => {
                        let id = row_key.clone();
                        view! {
                            <TableCell class=class>
                                <Button
                                    appearance=ButtonAppearance::Subtle
                                    size=ButtonSize::Small
                                    on_click=move |_| {
                                        if let Some(on_edit) = on_edit {
                                            on_edit.run(id.clone());
                                        }
                                    }
                                >
                                    {icon("edit")}
                                </Button>
                            </TableCell>
                        }
                        .into_any()
                    }
                }
            })
            .collect_view();
        view! {
            <TableRow>
                {checkbox}
                {cells}
            </TableRow>
        }
    };

    let is_empty = move || state.with(|s| s.is_loaded && s.rows.is_empty());
    let is_loading = move || state.with(|s| s.is_loading);

    view! {
        <div class="entity-table" style="width: 100%; overflow-x: auto; position: relative;">
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        {selectable.then(|| view! {
                            <TableHeaderCheckbox
                                state=Signal::derive(move || state.with(|s| s.header_state()))
                                on_change=Callback::new(move |checked: bool| {
                                    state.update(|s| s.toggle_all(checked));
                                })
                            />
                        })}
                        {header_cells}
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || state.with(|s| s.rows.clone())
                        // содержимое в ключе: сохранённая запись с тем же ключом перерисуется
                        key=|row: &R| (row.key(), serde_json::to_string(row).unwrap_or_default())
                        children=render_row
                    />
                </TableBody>
            </Table>
            <Show when=is_empty>
                <div class="entity-table__empty">{move || i18n.t("common", "no_data")}</div>
            </Show>
            <Show when=is_loading>
                <div class="entity-table__loading">
                    <Spinner />
                </div>
            </Show>
        </div>
    }
}
