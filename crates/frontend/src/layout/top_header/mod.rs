//! TopHeader component - application top navigation bar.
//!
//! Contains:
//! - Toggle button for the sidebar
//! - Application title
//! - Data source badge and language switch

use crate::layout::global_context::use_app_context;
use crate::shared::config::{use_app_config, DataSourceKind};
use crate::shared::i18n::{use_i18n, Locale};
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_app_context();
    let i18n = use_i18n();
    let config = use_app_config();

    let is_sidebar_visible = move || ctx.left_open.get();
    let source_key = match config.data_source {
        DataSourceKind::Mock => "data_source_mock",
        DataSourceKind::Remote => "data_source_remote",
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || i18n.t("common", "toggle_sidebar")
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">{move || i18n.t("common", "app_title")}</span>
            </div>

            <div class="top-header__actions">
                <Badge appearance=BadgeAppearance::Tint>
                    {move || i18n.t("common", source_key)}
                </Badge>

                <label class="top-header__locale" title=move || i18n.t("common", "language")>
                    <select
                        prop:value=move || i18n.locale.get().as_str()
                        on:change=move |ev| {
                            if let Some(locale) = Locale::parse(&event_target_value(&ev)) {
                                i18n.set_locale(locale);
                            }
                        }
                    >
                        {Locale::ALL
                            .into_iter()
                            .map(|locale| {
                                view! {
                                    <option value=locale.as_str()>
                                        {locale.as_str().to_uppercase()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>
            </div>
        </div>
    }
}
