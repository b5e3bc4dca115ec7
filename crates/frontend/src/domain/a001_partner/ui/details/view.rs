use super::view_model::PartnerDetailsVm;
use crate::shared::components::form::FormFields;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn PartnerDetails(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let i18n = use_i18n();
    let vm = PartnerDetailsVm::new(id);
    vm.load();

    let title = move || {
        if vm.is_edit_mode() {
            i18n.t("partner", "information_edit_partner")
        } else {
            i18n.t("partner", "new_partner")
        }
    };

    view! {
        <PageFrame page_id="a001_partner--detail" category=PAGE_CAT_DETAIL>
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
                <FormFields form=vm.form namespace="partner" lookups=vm.lookups />
            </div>
        </PageFrame>
    }
}
