use contracts::shared::table::HighlightSegment;
use leptos::prelude::*;

/// Текст ячейки с подсветкой совпадений поиска
#[component]
pub fn HighlightedText(#[prop(into)] segments: Signal<Vec<HighlightSegment>>) -> impl IntoView {
    view! {
        <span>
            {move || {
                segments
                    .get()
                    .into_iter()
                    .map(|segment| {
                        if segment.matched {
                            view! { <mark class="table__highlight">{segment.text}</mark> }.into_any()
                        } else {
                            view! { <span>{segment.text}</span> }.into_any()
                        }
                    })
                    .collect_view()
            }}
        </span>
    }
}
