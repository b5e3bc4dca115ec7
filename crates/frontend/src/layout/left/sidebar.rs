//! Sidebar component with collapsible menu groups

use crate::layout::global_context::use_app_context;
use crate::routes::AppRoute;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    icon: &'static str,
    items: Vec<(AppRoute, &'static str)>, // (route, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "master_data",
            icon: "database",
            items: vec![
                (AppRoute::PartnerList, "handshake"),
                (AppRoute::PortList, "anchor"),
            ],
        },
        MenuGroup {
            id: "system",
            icon: "settings",
            items: vec![(AppRoute::Users, "users")],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();
    let i18n = use_i18n();

    // Все группы раскрыты при старте
    let expanded_groups = RwSignal::new(
        get_menu_groups()
            .iter()
            .map(|g| g.id.to_string())
            .collect::<Vec<_>>(),
    );

    view! {
        <div class="app-sidebar__content">
            {get_menu_groups().into_iter().map(|group| {
                let group_id = group.id;
                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                expanded_groups.update(|items| {
                                    if let Some(pos) = items.iter().position(|x| x == group_id) {
                                        items.remove(pos);
                                    } else {
                                        items.push(group_id.to_string());
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{move || i18n.t("menu", group_id)}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || {
                                    expanded_groups.with(|items| items.iter().any(|x| x == group_id))
                                }
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.with(|items| items.iter().any(|x| x == group_id))>
                            <div class="app-sidebar__children">
                                {group.items.clone().into_iter().map(|(route, icon_name)| {
                                    let item_key = route.key();
                                    let (label_key, _) = route.label_key();
                                    let route = StoredValue::new(route);
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || {
                                                ctx.active.with(|a| a.as_deref() == Some(item_key.as_str()))
                                            }
                                            style:padding-left="10px"
                                            on:click=move |_| ctx.navigate(route.get_value())
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(icon_name)}
                                                <span>{move || i18n.t("menu", label_key)}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
