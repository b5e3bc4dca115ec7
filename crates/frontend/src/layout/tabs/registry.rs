//! Tab content registry - единственный источник правды для маппинга tab.key → View
//!
//! Ключ таба разбирается в `AppRoute`, и по маршруту строится экран.

use crate::domain::a001_partner::ui::details::PartnerDetails;
use crate::domain::a001_partner::ui::list::PartnerList;
use crate::domain::a002_port::ui::details::PortDetails;
use crate::domain::a002_port::ui::list::PortList;
use crate::layout::global_context::AppGlobalContext;
use crate::routes::AppRoute;
use crate::system::users::ui::list::UsersListPage;
use contracts::domain::common::EntityKind;
use leptos::logging::log;
use leptos::prelude::*;

/// Callback закрытия формы: закрыть её таб и вернуться к списку
fn back_to_list(tabs_store: AppGlobalContext, key: &str, kind: EntityKind) -> Callback<()> {
    let key = key.to_string();
    Callback::new(move |_| tabs_store.close_and_navigate(&key, AppRoute::list(kind)))
}

/// То же после сохранения; список перечитает данные
fn saved_to_list(tabs_store: AppGlobalContext, key: &str, kind: EntityKind) -> Callback<()> {
    let key = key.to_string();
    Callback::new(move |_| {
        tabs_store.mark_changed(kind);
        tabs_store.close_and_navigate(&key, AppRoute::list(kind));
    })
}

/// Рендерит контент таба по его ключу.
///
/// # Arguments
/// * `key` - уникальный ключ таба (например "partner", "port_edit_port-001")
/// * `tabs_store` - контекст для закрытия таба формы после сохранения/отмены
///
/// # Returns
/// AnyView с содержимым таба или placeholder для неизвестных ключей
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let Some(route) = AppRoute::parse(key) else {
        log!("unknown tab key: {}", key);
        return view! {
            <div class="placeholder">{format!("Unknown tab: {}", key)}</div>
        }
        .into_any();
    };

    match route {
        AppRoute::PartnerList => view! { <PartnerList /> }.into_any(),
        AppRoute::PartnerCreate => view! {
            <PartnerDetails
                id=None
                on_saved=saved_to_list(tabs_store, key, EntityKind::Partner)
                on_cancel=back_to_list(tabs_store, key, EntityKind::Partner)
            />
        }
        .into_any(),
        AppRoute::PartnerEdit(id) => view! {
            <PartnerDetails
                id=Some(id)
                on_saved=saved_to_list(tabs_store, key, EntityKind::Partner)
                on_cancel=back_to_list(tabs_store, key, EntityKind::Partner)
            />
        }
        .into_any(),

        AppRoute::PortList => view! { <PortList /> }.into_any(),
        AppRoute::PortCreate => view! {
            <PortDetails
                id=None
                on_saved=saved_to_list(tabs_store, key, EntityKind::Port)
                on_cancel=back_to_list(tabs_store, key, EntityKind::Port)
            />
        }
        .into_any(),
        AppRoute::PortEdit(id) => view! {
            <PortDetails
                id=Some(id)
                on_saved=saved_to_list(tabs_store, key, EntityKind::Port)
                on_cancel=back_to_list(tabs_store, key, EntityKind::Port)
            />
        }
        .into_any(),

        AppRoute::Users => view! { <UsersListPage /> }.into_any(),
    }
}
