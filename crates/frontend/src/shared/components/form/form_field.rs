//! Поле формы по описанию `FieldSpec`
//!
//! Значение и статус поля живут в `FormState`; компонент только читает их
//! и отправляет правки через `FormState::edit`.

use crate::shared::i18n::use_i18n;
use contracts::domain::common::{filter_options, LookupOption};
use contracts::shared::form::{FieldKind, FieldSpec, FieldStatus, FieldValue, FormState};
use leptos::prelude::*;

#[component]
pub fn FormField(
    form: RwSignal<FormState>,
    spec: FieldSpec,
    /// Пространство переводов подписей и сообщений
    namespace: &'static str,
    /// Варианты для select/multi-select полей
    #[prop(optional, into)]
    options: Signal<Vec<LookupOption>>,
) -> impl IntoView {
    let i18n = use_i18n();
    let name = spec.name;
    let input_id = format!("{namespace}-{name}");

    let placeholder = move || {
        if spec.placeholder_key.is_empty() {
            String::new()
        } else {
            i18n.t(namespace, spec.placeholder_key)
        }
    };

    let invalid = move || form.with(|f| f.status(name) == FieldStatus::Invalid);
    let error_text = move || {
        form.with(|f| f.error(name))
            .filter(|key| !key.is_empty())
            .map(|key| i18n.t(namespace, key))
    };

    let control = match spec.kind {
        FieldKind::Text => view! {
            <input
                type="text"
                id=input_id.clone()
                class="form__input"
                class:form__input--invalid=invalid
                placeholder=placeholder
                prop:value=move || form.with(|f| f.text(name))
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| f.edit(name, FieldValue::Text(value)));
                }
                on:blur=move |_| form.update(|f| f.touch(name))
            />
        }
        .into_any(),

        FieldKind::Select { searchable, .. } => {
            let search = RwSignal::new(String::new());
            let visible = Signal::derive(move || {
                let all = options.get();
                let query = search.get();
                if searchable {
                    filter_options(&all, &query)
                } else {
                    all
                }
            });
            view! {
                <div class="form__select">
                    <Show when=move || searchable>
                        <input
                            type="text"
                            class="form__input form__input--search"
                            placeholder=move || i18n.t("common", "select_search_placeholder")
                            prop:value=move || search.get()
                            on:input=move |ev| search.set(event_target_value(&ev))
                        />
                    </Show>
                    <select
                        id=input_id.clone()
                        class="form__input"
                        class:form__input--invalid=invalid
                        prop:value=move || form.with(|f| f.text(name))
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.edit(name, FieldValue::Text(value)));
                        }
                    >
                        <option value="">
                            {move || {
                                let text = placeholder();
                                if text.is_empty() { i18n.t("common", "select_placeholder") } else { text }
                            }}
                        </option>
                        <For
                            each=move || visible.get()
                            key=|opt| opt.value.clone()
                            children=move |opt| {
                                let value = opt.value.clone();
                                let selected = move || form.with(|f| f.text(name) == value);
                                view! {
                                    <option value=opt.value.clone() selected=selected>
                                        {opt.label}
                                    </option>
                                }
                            }
                        />
                    </select>
                </div>
            }
            .into_any()
        }

        FieldKind::MultiSelect(_) => view! {
            <div
                id=input_id.clone()
                class="form__checkbox-group"
                class:form__input--invalid=invalid
            >
                <For
                    each=move || options.get()
                    key=|opt| opt.value.clone()
                    children=move |opt| {
                        let value = StoredValue::new(opt.value.clone());
                        let checked = move || {
                            form.with(|f| f.many(name).iter().any(|v| *v == value.get_value()))
                        };
                        view! {
                            <label class="form__checkbox">
                                <input
                                    type="checkbox"
                                    prop:checked=checked
                                    on:change=move |ev| {
                                        let on = event_target_checked(&ev);
                                        let value = value.get_value();
                                        form.update(|f| {
                                            let mut many = f.many(name);
                                            many.retain(|v| *v != value);
                                            if on {
                                                many.push(value);
                                            }
                                            f.edit(name, FieldValue::Many(many));
                                        });
                                    }
                                />
                                <span>{opt.label}</span>
                            </label>
                        }
                    }
                />
            </div>
        }
        .into_any(),

        FieldKind::Status(kind) => view! {
            <select
                id=input_id.clone()
                class="form__input"
                class:form__input--invalid=invalid
                prop:value=move || form.with(|f| f.text(name))
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| f.edit(name, FieldValue::Text(value)));
                }
            >
                <option value="">{move || i18n.t("common", "select_placeholder")}</option>
                {kind
                    .filter_options()
                    .iter()
                    .map(|opt| {
                        let value = opt.value;
                        let label_key = opt.label_key;
                        view! {
                            <option
                                value=value
                                selected=move || form.with(|f| f.text(name) == value)
                            >
                                {move || i18n.t("common", label_key)}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        }
        .into_any(),
    };

    view! {
        <div class="form-group" class:form-group--invalid=invalid>
            <label for=input_id class="form__label">
                {move || i18n.t(namespace, spec.label_key)}
                <Show when=move || spec.required>
                    <span class="form__required">"*"</span>
                </Show>
            </label>
            {control}
            {move || error_text().map(|text| view! { <div class="form__error">{text}</div> })}
        </div>
    }
}
