use super::tab::Tab as TabComponent;
use crate::layout::global_context::use_app_context;
use leptos::prelude::*;

#[component]
pub fn Center(children: Children) -> impl IntoView {
    let tabs_store = use_app_context();

    view! {
        <div data-zone="center" class="app-tabs" style="flex: 1; overflow: auto;">
            <div class="tabs__strip">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab| view! { <TabComponent tab=tab /> }
                />
            </div>
            {children()}
        </div>
    }
}
