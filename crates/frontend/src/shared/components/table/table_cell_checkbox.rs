//! Компонент чекбокса в ячейке таблицы для выбора отдельной строки

use leptos::prelude::*;
use thaw::*;

/// Компонент чекбокса в ячейке таблицы
///
/// Останавливает propagation клика, чтобы не срабатывал клик по строке.
#[component]
pub fn TableCellCheckbox(
    /// Ключ записи строки
    #[prop(into)]
    item_id: String,

    #[prop(into)]
    checked: Signal<bool>,

    /// Callback при изменении (item_id, checked)
    on_change: Callback<(String, bool)>,
) -> impl IntoView {
    view! {
        <TableCell class="fixed-checkbox-column" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| {
                    on_change.run((item_id.clone(), event_target_checked(&ev)));
                }
            />
        </TableCell>
    }
}
