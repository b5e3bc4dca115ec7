use crate::shared::i18n::use_i18n;
use contracts::domain::common::StatusKind;
use leptos::prelude::*;

/// Цветной тег статуса; неизвестное значение показывается как есть
#[component]
pub fn StatusTag(kind: StatusKind, #[prop(into)] raw: String) -> impl IntoView {
    let i18n = use_i18n();
    match kind.tag(&raw) {
        Some(tag) => view! {
            <span
                class="status-tag"
                style=format!("color: {0}; border: 1px solid {0}; border-radius: 4px; padding: 0 7px;", tag.color)
            >
                {move || i18n.t("common", tag.label_key)}
            </span>
        }
        .into_any(),
        None => view! { <span class="status-tag">{raw}</span> }.into_any(),
    }
}
