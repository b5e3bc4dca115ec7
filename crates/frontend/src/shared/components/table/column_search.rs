//! Выпадающий поиск по колонке
//!
//! Черновик запроса живёт только внутри дропдауна; в состояние экрана он
//! попадает по Enter, кнопкам Search и Filter. Reset снимает фильтр колонки.

use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ColumnSearch(
    /// Заголовок колонки (для placeholder)
    #[prop(into)]
    title: Signal<String>,

    /// Подтверждённый запрос колонки
    #[prop(into)]
    query: Signal<String>,

    /// Фильтр колонки включён
    #[prop(into)]
    engaged: Signal<bool>,

    /// (query, close dropdown)
    on_confirm: Callback<(String, bool)>,

    on_reset: Callback<()>,
) -> impl IntoView {
    let i18n = use_i18n();
    let open = RwSignal::new(false);
    let draft = RwSignal::new(String::new());
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let toggle = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        if !open.get_untracked() {
            draft.set(query.get_untracked());
        }
        open.update(|o| *o = !*o);
    };

    // фокус на поле при открытии
    Effect::new(move |_| {
        if open.get() {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    });

    let confirm = move |close: bool| {
        on_confirm.run((draft.get_untracked(), close));
        if close {
            open.set(false);
        }
    };

    let reset = move |_| {
        draft.set(String::new());
        on_reset.run(());
    };

    view! {
        <span class="column-search" on:click=|e| e.stop_propagation()>
            <span
                class="column-search__trigger"
                class:column-search__trigger--active=move || engaged.get()
                on:click=toggle
            >
                {icon("search")}
            </span>
            <Show when=move || open.get()>
                <div class="column-search__dropdown">
                    <input
                        node_ref=input_ref
                        type="text"
                        class="column-search__input"
                        placeholder=move || {
                            i18n.t_with("common", "search_placeholder", &[("column", &title.get())])
                        }
                        prop:value=move || draft.get()
                        on:input=move |ev| draft.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                confirm(true);
                            }
                        }
                    />
                    <Flex gap=FlexGap::Small align=FlexAlign::Center>
                        <Button
                            appearance=ButtonAppearance::Primary
                            size=ButtonSize::Small
                            on_click=move |_| confirm(true)
                        >
                            {icon("search")}
                            {move || i18n.t("common", "search")}
                        </Button>
                        <Button size=ButtonSize::Small on_click=reset>
                            {move || i18n.t("common", "reset")}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Transparent
                            size=ButtonSize::Small
                            on_click=move |_| confirm(false)
                        >
                            {icon("filter")}
                            {move || i18n.t("common", "filter")}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Transparent
                            size=ButtonSize::Small
                            on_click=move |_| open.set(false)
                        >
                            {move || i18n.t("common", "close")}
                        </Button>
                    </Flex>
                </div>
            </Show>
        </span>
    }
}
