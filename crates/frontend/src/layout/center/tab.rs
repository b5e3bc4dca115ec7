use crate::layout::global_context::{use_app_context, Tab as TabData};
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use crate::shared::i18n::use_i18n;
use leptos::ev;
use leptos::prelude::*;

/// Ярлык таба в полосе открытых табов
#[component]
pub fn Tab(tab: TabData) -> impl IntoView {
    let tabs_store = use_app_context();
    let i18n = use_i18n();

    let key = StoredValue::new(tab.key.clone());
    let is_active = Memo::new(move |_| {
        tabs_store
            .active
            .with(|active| active.as_deref() == Some(key.get_value().as_str()))
    });

    let on_click = move |_| tabs_store.activate_tab(&key.get_value());
    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        tabs_store.close_tab(&key.get_value());
    };

    view! {
        <div class="tab" class:active=is_active on:click=on_click>
            <span>{move || tab_label_for_key(i18n, &key.get_value())}</span>
            <button
                class="tab-close"
                on:click=on_close
                title=move || i18n.t("common", "close")
            >
                {icon("x")}
            </button>
        </div>
    }
}
