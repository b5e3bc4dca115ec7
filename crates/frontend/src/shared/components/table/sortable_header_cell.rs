//! Компонент ячейки заголовка таблицы: заголовок, сортировка и триггеры фильтров
//!
//! # Примеры
//!
//! ```rust,ignore
//! <SortableHeaderCell
//!     label=Signal::derive(move || i18n.t("partner", "code"))
//!     sort_field="partnerCode"
//!     sortable=true
//!     sort=Signal::derive(move || state.with(|s| s.sort.clone()))
//!     on_sort=Callback::new(move |field| toggle_sort(field))
//! >
//!     <ColumnSearch ... />
//! </SortableHeaderCell>
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use contracts::shared::table::SortSpec;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SortableHeaderCell(
    /// Текст заголовка
    #[prop(into)]
    label: Signal<String>,

    /// Поле для сортировки
    sort_field: &'static str,

    #[prop(optional)]
    sortable: bool,

    /// Текущая сортировка из state
    #[prop(into)]
    sort: Signal<Option<SortSpec>>,

    /// Callback при клике на заголовок
    on_sort: Callback<&'static str>,

    /// Минимальная ширина колонки
    #[prop(optional, default = 100.0)]
    min_width: f64,

    /// Фиксированная колонка
    #[prop(optional, into)]
    class: String,

    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let handle_click = move |_| {
        if sortable {
            on_sort.run(sort_field);
        }
    };

    view! {
        <TableHeaderCell min_width=min_width class=class>
            <div
                class="table__sortable-header"
                style=if sortable { "cursor: pointer;" } else { "" }
                on:click=handle_click
            >
                {move || label.get()}
                {sortable.then(|| view! {
                    <span class=move || sort.with(|s| get_sort_class(s.as_ref(), sort_field))>
                        {move || sort.with(|s| get_sort_indicator(s.as_ref(), sort_field))}
                    </span>
                })}
                {children.map(|c| c())}
            </div>
        </TableHeaderCell>
    }
}
