//! Список пользователей (только просмотр)

pub mod state;

use self::state::create_state;
use crate::layout::notification_service::use_notifications;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::EntityTable;
use crate::shared::config::use_app_config;
use crate::shared::data_source::use_data_source;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::list_state::load_list;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use contracts::system::users::user_columns;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn UsersListPage() -> impl IntoView {
    let notifications = use_notifications();
    let i18n = use_i18n();
    let source = StoredValue::new(use_data_source());
    let config = use_app_config();

    let state = create_state(config.page_size);

    let reload = Callback::new(move |_| {
        load_list(state, source.get_value(), notifications, i18n);
    });

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded || s.is_loading) {
            reload.run(());
        }
    });

    view! {
        <PageFrame page_id="sys_users--system" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{move || i18n.t("user", "list_title")}</h1>
                    <Badge appearance=BadgeAppearance::Tint>
                        {move || state.with(|s| s.total).to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
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
                    columns=user_columns()
                    namespace="user"
                    on_reload=reload
                    selectable=false
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
