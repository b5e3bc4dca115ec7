use super::model;
use crate::layout::notification_service::{use_notifications, NotificationService};
use crate::shared::data_source::{use_data_source, DataSource};
use crate::shared::detail_form::{load_detail, load_lookups, schema_lookups, submit_form, LookupMap};
use crate::shared::i18n::{use_i18n, I18n};
use contracts::domain::a001_partner::{partner_form_schema, PartnerRow};
use contracts::domain::common::EntityKind;
use contracts::shared::form::FormState;
use leptos::prelude::*;

/// ViewModel формы партнёра
#[derive(Clone, Copy)]
pub struct PartnerDetailsVm {
    id: StoredValue<Option<String>>,
    pub form: RwSignal<FormState>,
    pub lookups: RwSignal<LookupMap>,
    pub is_loading: RwSignal<bool>,
    pub is_saving: RwSignal<bool>,
    source: StoredValue<DataSource>,
    notifications: NotificationService,
    i18n: I18n,
}

impl PartnerDetailsVm {
    pub fn new(id: Option<String>) -> Self {
        Self {
            form: RwSignal::new(model::new_form(id.as_deref())),
            is_loading: RwSignal::new(id.is_some()),
            id: StoredValue::new(id),
            lookups: RwSignal::new(LookupMap::new()),
            is_saving: RwSignal::new(false),
            source: StoredValue::new(use_data_source()),
            notifications: use_notifications(),
            i18n: use_i18n(),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.with_value(Option::is_some)
    }

    /// Справочники и, при редактировании, карточка партнёра
    pub fn load(&self) {
        load_lookups(
            self.source.get_value(),
            schema_lookups(&partner_form_schema()),
            self.lookups,
            self.notifications,
            self.i18n,
        );

        let Some(id) = self.id.get_value() else {
            return;
        };
        let is_loading = self.is_loading;
        load_detail::<PartnerRow>(
            self.source.get_value(),
            EntityKind::Partner,
            id,
            self.form,
            PartnerRow::to_form_values,
            move |_| {
                let _ = is_loading.try_set(false);
            },
            self.notifications,
            self.i18n,
        );
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let source = self.source.get_value();
        match self.id.get_value() {
            Some(key) => submit_form(
                source,
                self.form,
                self.is_saving,
                move |values| model::edit_payload(&key, values),
                on_saved,
                self.notifications,
                self.i18n,
            ),
            None => submit_form(
                source,
                self.form,
                self.is_saving,
                model::create_payload,
                on_saved,
                self.notifications,
                self.i18n,
            ),
        }
    }
}
