//! Application Shell - корневые компоненты приложения
//!
//! Содержит:
//! - `MainLayout` - основной layout приложения (Shell + Sidebar + Tabs)

use crate::layout::global_context::{use_app_context, Tab as TabData};
use crate::layout::left::sidebar::Sidebar;
use crate::layout::tabs::TabPage;
use crate::layout::Shell;
use leptos::prelude::*;

/// Main application layout с Sidebar и Tabs.
///
/// Инициализирует router integration для синхронизации табов с URL (?active=...).
#[component]
pub fn MainLayout() -> impl IntoView {
    let tabs_store = use_app_context();

    // Initialize router integration. This runs once when the component is created.
    tabs_store.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    <For
                        each=move || tabs_store.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab: TabData| {
                            view! { <TabPage tab=tab tabs_store=tabs_store /> }
                        }
                    />
                }
                .into_any()
            }
        />
    }
}
