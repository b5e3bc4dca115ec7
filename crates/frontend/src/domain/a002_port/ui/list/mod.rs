pub mod state;

use self::state::create_state;
use crate::layout::global_context::use_app_context;
use crate::layout::notification_service::use_notifications;
use crate::routes::AppRoute;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::EntityTable;
use crate::shared::config::use_app_config;
use crate::shared::data_source::use_data_source;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::list_state::{delete_selected, load_list};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a002_port::port_columns;
use contracts::domain::common::EntityKind;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn PortList() -> impl IntoView {
    let tabs_store = use_app_context();
    let notifications = use_notifications();
    let i18n = use_i18n();
    let source = StoredValue::new(use_data_source());
    let config = use_app_config();

    let state = create_state(config.page_size);

    let reload = Callback::new(move |_| {
        load_list(state, source.get_value(), notifications, i18n);
    });

    // Первая загрузка и перечитывание после сохранения формы
    Effect::new(move |_| {
        tabs_store.revision(EntityKind::Port);
        reload.run(());
    });

    let on_edit = Callback::new(move |key: String| {
        if let Some(route) = AppRoute::edit(EntityKind::Port, &key) {
            tabs_store.navigate(route);
        }
    });

    let handle_delete = move |_| {
        delete_selected(state, source.get_value(), notifications, i18n, reload);
    };

    let selected_count = move || state.with(|s| s.selection.len());

    view! {
        <PageFrame page_id="a002_port--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{move || i18n.t("port", "list_title")}</h1>
                    <Badge appearance=BadgeAppearance::Tint>
                        {move || state.with(|s| s.total).to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| {
                            if let Some(route) = AppRoute::create(EntityKind::Port) {
                                tabs_store.navigate(route);
                            }
                        }
                    >
                        {icon("plus")}
                        {move || format!(" {}", i18n.t("port", "new_port"))}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=handle_delete
                        disabled=Signal::derive(move || selected_count() == 0)
                    >
                        {icon("delete")}
                        {move || {
                            let count = selected_count().to_string();
                            format!(" {}", i18n.t_with("common", "delete_selected", &[("count", count.as_str())]))
                        }}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| reload.run(())
                        disabled=Signal::derive(move || state.with(|s| s.is_loading))
                    >
                        {icon("refresh")}
                        {move || format!(" {}", i18n.t("common", "refresh"))}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <EntityTable
                    state=state
                    columns=port_columns()
                    namespace="port"
                    on_reload=reload
                    on_edit=on_edit
                />
                <PaginationControls
                    current_page=Signal::derive(move || state.with(|s| s.pagination.current_page))
                    total_pages=Signal::derive(move || state.with(|s| s.total_pages))
                    total_count=Signal::derive(move || state.with(|s| s.total))
                    page_size=Signal::derive(move || state.with(|s| s.pagination.page_size))
                    on_page_change=Callback::new(move |page: usize| {
                        state.update(|s| s.go_to_page(page));
                        reload.run(());
                    })
                    on_page_size_change=Callback::new(move |size: usize| {
                        state.update(|s| s.set_page_size(size));
                        reload.run(());
                    })
                    page_size_options=config.page_size_options.clone()
                />
            </div>
        </PageFrame>
    }
}
