use super::view_model::PortDetailsVm;
use crate::shared::components::form::FormFields;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn PortDetails(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let i18n = use_i18n();
    let vm = PortDetailsVm::new(id);
    vm.load();

    let title = move || {
        if vm.is_edit_mode() {
            i18n.t("port", "information_edit_port")
        } else {
            i18n.t("port", "new_port")
        }
    };

    view! {
        <PageFrame page_id="a002_port--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h2>{title}</h2>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| vm.save_command(on_saved)
                        disabled=Signal::derive(move || vm.is_saving.get() || vm.is_loading.get())
                    >
                        {icon("save")}
                        {move || {
                            let key = if vm.is_saving.get() { "saving" } else { "save" };
                            format!(" {}", i18n.t("common", key))
                        }}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_cancel.run(())
                    >
                        {icon("x")}
                        {move || format!(" {}", i18n.t("common", "cancel"))}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <Show when=move || vm.is_loading.get()>
                    <Spinner label=i18n.t_untracked("common", "loading") />
                </Show>
                {move || {
                    vm.detail
                        .get()
                        .map(|detail| {
                            view! {
                                <div class="details-meta">
                                    <span class="details-meta__item">
                                        {i18n.t("port", "creator")} ": " {detail.inserted_by}
                                    </span>
                                    <span class="details-meta__item">
                                        {i18n.t("port", "date_created")} ": " {detail.inserted_date}
                                    </span>
                                </div>
                            }
                        })
                }}
                <FormFields form=vm.form namespace="port" lookups=vm.lookups />
            </div>
        </PageFrame>
    }
}
