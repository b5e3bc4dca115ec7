use super::model;
use crate::layout::notification_service::{use_notifications, NotificationService};
use crate::shared::data_source::{use_data_source, DataSource};
use crate::shared::detail_form::{load_detail, load_lookups, schema_lookups, submit_form, LookupMap};
use crate::shared::i18n::{use_i18n, I18n};
use contracts::domain::a002_port::{port_form_schema, PortDetail};
use contracts::domain::common::EntityKind;
use contracts::shared::form::FormState;
use leptos::prelude::*;

/// ViewModel формы порта
#[derive(Clone, Copy)]
pub struct PortDetailsVm {
    port_id: StoredValue<Option<String>>,
    pub form: RwSignal<FormState>,
    pub lookups: RwSignal<LookupMap>,
    /// Карточка для полей только на чтение (кто и когда создал)
    pub detail: RwSignal<Option<PortDetail>>,
    pub is_loading: RwSignal<bool>,
    pub is_saving: RwSignal<bool>,
    source: StoredValue<DataSource>,
    notifications: NotificationService,
    i18n: I18n,
}

impl PortDetailsVm {
    pub fn new(port_id: Option<String>) -> Self {
        Self {
            form: RwSignal::new(model::new_form(port_id.as_deref())),
            is_loading: RwSignal::new(port_id.is_some()),
            port_id: StoredValue::new(port_id),
            lookups: RwSignal::new(LookupMap::new()),
            detail: RwSignal::new(None),
            is_saving: RwSignal::new(false),
            source: StoredValue::new(use_data_source()),
            notifications: use_notifications(),
            i18n: use_i18n(),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.port_id.with_value(Option::is_some)
    }

    pub fn load(&self) {
        load_lookups(
            self.source.get_value(),
            schema_lookups(&port_form_schema()),
            self.lookups,
            self.notifications,
            self.i18n,
        );

        let Some(port_id) = self.port_id.get_value() else {
            return;
        };
        let is_loading = self.is_loading;
        let detail = self.detail;
        load_detail::<PortDetail>(
            self.source.get_value(),
            EntityKind::Port,
            port_id,
            self.form,
            PortDetail::to_form_values,
            move |loaded| {
                let _ = is_loading.try_set(false);
                if let Some(loaded) = loaded {
                    let _ = detail.try_set(Some(loaded));
                }
            },
            self.notifications,
            self.i18n,
        );
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let source = self.source.get_value();
        match self.port_id.get_value() {
            Some(port_id) => submit_form(
                source,
                self.form,
                self.is_saving,
                move |values| model::edit_payload(&port_id, values),
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
