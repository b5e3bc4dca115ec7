//! Фильтр колонки по фиксированному набору значений (статусы)

use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use contracts::shared::table::ValueFilterOption;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ValueFilter(
    options: &'static [ValueFilterOption],

    /// Выбранные значения; пусто = фильтр выключен
    #[prop(into)]
    selected: Signal<Vec<String>>,

    on_change: Callback<Vec<String>>,
) -> impl IntoView {
    let i18n = use_i18n();
    let open = RwSignal::new(false);
    let draft = RwSignal::new(Vec::<String>::new());

    let toggle = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        if !open.get_untracked() {
            draft.set(selected.get_untracked());
        }
        open.update(|o| *o = !*o);
    };

    let apply = move |_| {
        on_change.run(draft.get_untracked());
        open.set(false);
    };

    let reset = move |_| {
        draft.set(Vec::new());
        on_change.run(Vec::new());
        open.set(false);
    };

    view! {
        <span class="column-search" on:click=|e| e.stop_propagation()>
            <span
                class="column-search__trigger"
                class:column-search__trigger--active=move || !selected.get().is_empty()
                on:click=toggle
            >
                {icon("filter")}
            </span>
            <Show when=move || open.get()>
                <div class="column-search__dropdown">
                    {options
                        .iter()
                        .map(|option| {
                            let value = option.value;
                            view! {
                                <label class="column-search__option">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || draft.with(|d| d.iter().any(|v| v == value))
                                        on:change=move |ev| {
                                            let checked = event_target_checked(&ev);
                                            draft.update(|d| {
                                                d.retain(|v| v != value);
                                                if checked {
                                                    d.push(value.to_string());
                                                }
                                            });
                                        }
                                    />
                                    <span>{move || i18n.t("common", option.label_key)}</span>
                                </label>
                            }
                        })
                        .collect_view()}
                    <Flex gap=FlexGap::Small>
                        <Button appearance=ButtonAppearance::Primary size=ButtonSize::Small on_click=apply>
                            {move || i18n.t("common", "filter")}
                        </Button>
                        <Button size=ButtonSize::Small on_click=reset>
                            {move || i18n.t("common", "reset")}
                        </Button>
                    </Flex>
                </div>
            </Show>
        </span>
    }
}
