use crate::app_shell::MainLayout;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::NotificationService;
use crate::shared::config::AppConfig;
use crate::shared::data_source::DataSource;
use crate::shared::i18n::{I18n, Locale};
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let locale = Locale::parse(&config.default_locale).unwrap_or_default();

    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());
    provide_context(NotificationService::new());
    provide_context(I18n::new(locale));
    provide_context(DataSource::from_config(&config));
    provide_context(config);

    view! {
        <ConfigProvider>
            <MainLayout />
        </ConfigProvider>
    }
}
