use super::form_field::FormField;
use crate::shared::detail_form::{field_options, LookupMap};
use contracts::shared::form::FormState;
use leptos::prelude::*;

/// Все поля формы в порядке схемы
#[component]
pub fn FormFields(
    form: RwSignal<FormState>,
    namespace: &'static str,
    lookups: RwSignal<LookupMap>,
) -> impl IntoView {
    // Набор полей зависит только от режима формы
    let fields = form.with_untracked(|f| f.fields().to_vec());

    view! {
        <div class="details-form">
            {fields
                .into_iter()
                .map(|spec| {
                    let options = field_options(lookups, &spec);
                    view! { <FormField form=form spec=spec namespace=namespace options=options /> }
                })
                .collect_view()}
        </div>
    }
}
