//! Компонент чекбокса в заголовке таблицы для выбора всех строк страницы
//!
//! # Примеры
//!
//! ```rust,ignore
//! <TableHeaderCheckbox
//!     state=Signal::derive(move || state.with(|s| s.header_state()))
//!     on_change=Callback::new(move |check_all: bool| {
//!         state.update(|s| s.toggle_all(check_all));
//!     })
//! />
//! ```

use contracts::shared::table::HeaderCheckState;
use leptos::prelude::*;
use leptos::prelude::event_target_checked;
use thaw::*;
use wasm_bindgen::JsCast;

/// Компонент чекбокса в заголовке таблицы
///
/// Показывает три состояния: unchecked, checked, indeterminate.
/// При клике переключает между "выбрать все" и "снять все".
#[component]
pub fn TableHeaderCheckbox(
    /// Состояние по видимым строкам
    #[prop(into)]
    state: Signal<HeaderCheckState>,

    /// Callback при изменении (true = выбрать все, false = снять все)
    on_change: Callback<bool>,
) -> impl IntoView {
    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // indeterminate выставляется только через DOM
    Effect::new(move |_| {
        let current = state.get();
        if let Some(input) = checkbox_ref.get() {
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                input_el.set_indeterminate(current == HeaderCheckState::Indeterminate);
            }
        }
    });

    view! {
        <TableHeaderCell class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || state.get() == HeaderCheckState::Checked
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </TableHeaderCell>
    }
}
