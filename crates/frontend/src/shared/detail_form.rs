//! Общая логика экранов создания/редактирования
//!
//! Загрузка справочников, однократное заполнение формы из карточки записи и
//! сохранение. View-model конкретной сущности только связывает схему формы
//! со своими типами payload.

use crate::layout::notification_service::NotificationService;
use crate::shared::data_source::DataSource;
use crate::shared::i18n::I18n;
use contracts::domain::common::{EntityKind, LookupKind, LookupOption, SavePayload};
use contracts::shared::form::{FieldError, FieldSpec, FormState, FormValues, PayloadError};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;

pub type LookupMap = BTreeMap<LookupKind, Vec<LookupOption>>;

/// Why a submit did not reach the data source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitBlocked {
    Invalid(Vec<FieldError>),
    Payload(PayloadError),
}

/// Справочники, нужные полям схемы (без повторов)
pub fn schema_lookups(schema: &[FieldSpec]) -> Vec<LookupKind> {
    let mut kinds: Vec<LookupKind> = schema.iter().filter_map(FieldSpec::lookup).collect();
    kinds.sort();
    kinds.dedup();
    kinds
}

/// Validate the form and build the payload.
///
/// `Err` means no save call may be made.
pub fn prepare_submit<P>(
    form: &mut FormState,
    build: impl FnOnce(&FormValues) -> Result<P, PayloadError>,
) -> Result<P, SubmitBlocked> {
    let values = form.submit().map_err(SubmitBlocked::Invalid)?;
    build(&values).map_err(SubmitBlocked::Payload)
}

/// Варианты для поля; пусто для полей без справочника
pub fn field_options(lookups: RwSignal<LookupMap>, spec: &FieldSpec) -> Signal<Vec<LookupOption>> {
    let kind = spec.lookup();
    Signal::derive(move || {
        kind.and_then(|kind| lookups.with(|m| m.get(&kind).cloned()))
            .unwrap_or_default()
    })
}

/// Fetch every lookup independently; results after unmount are dropped
pub fn load_lookups(
    source: DataSource,
    kinds: Vec<LookupKind>,
    lookups: RwSignal<LookupMap>,
    notifications: NotificationService,
    i18n: I18n,
) {
    for kind in kinds {
        let source = source.clone();
        spawn_local(async move {
            match source.fetch_options(kind).await {
                Ok(options) => {
                    let _ = lookups.try_update(|m| m.insert(kind, options));
                }
                Err(e) => {
                    log::error!("failed to load {} options: {}", kind.as_str(), e);
                    if !lookups.is_disposed() {
                        notifications.error(i18n.t_with_untracked(
                            "common",
                            "load_failed",
                            &[("error", e.to_string().as_str())],
                        ));
                    }
                }
            }
        });
    }
}

/// Fetch the detail record and seed the form once.
///
/// `on_loaded` gets the record (or `None` on failure) unless the screen is
/// already gone; use it for read-only fields and the loading flag.
#[allow(clippy::too_many_arguments)]
pub fn load_detail<D>(
    source: DataSource,
    kind: EntityKind,
    id: String,
    form: RwSignal<FormState>,
    to_values: fn(&D) -> FormValues,
    on_loaded: impl FnOnce(Option<D>) + 'static,
    notifications: NotificationService,
    i18n: I18n,
) where
    D: DeserializeOwned + 'static,
{
    spawn_local(async move {
        match source.fetch_detail::<D>(kind, &id).await {
            Ok(detail) => {
                let values = to_values(&detail);
                if form.try_update(|f| f.seed_once(values)).is_some() {
                    on_loaded(Some(detail));
                }
            }
            Err(e) => {
                log::error!("failed to load {} {}: {}", kind, id, e);
                if !form.is_disposed() {
                    notifications.error(i18n.t_with_untracked(
                        "common",
                        "load_failed",
                        &[("error", e.to_string().as_str())],
                    ));
                    on_loaded(None);
                }
            }
        }
    });
}

/// Validate, build the payload and hand it to the data source exactly once.
///
/// Invalid forms only surface their inline errors.
pub fn submit_form<P>(
    source: DataSource,
    form: RwSignal<FormState>,
    is_saving: RwSignal<bool>,
    build: impl FnOnce(&FormValues) -> Result<P, PayloadError>,
    on_saved: Callback<()>,
    notifications: NotificationService,
    i18n: I18n,
) where
    P: SavePayload + 'static,
{
    if is_saving.get_untracked() {
        return;
    }
    let mut prepared = None;
    form.update(|f| prepared = Some(prepare_submit(f, build)));
    let payload = match prepared {
        Some(Ok(payload)) => payload,
        Some(Err(SubmitBlocked::Invalid(errors))) => {
            log::debug!("{} form blocked: {} invalid field(s)", P::kind(), errors.len());
            notifications.error(i18n.t_untracked("common", "form_has_errors"));
            return;
        }
        Some(Err(SubmitBlocked::Payload(e))) => {
            log::error!("{} payload: {}", P::kind(), e);
            notifications.error(i18n.t_untracked("common", "form_has_errors"));
            return;
        }
        None => return,
    };

    is_saving.set(true);
    spawn_local(async move {
        let result = source.save(&payload).await;
        let _ = is_saving.try_set(false);
        match result {
            Ok(id) => {
                log::info!("saved {} {}", P::kind(), id);
                notifications.success(i18n.t_untracked("common", "save_success"));
                on_saved.run(());
            }
            Err(e) => {
                log::error!("failed to save {}: {}", P::kind(), e);
                notifications.error(i18n.t_with_untracked(
                    "common",
                    "save_failed",
                    &[("error", e.to_string().as_str())],
                ));
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_partner::{partner_form_schema, PartnerCreate};
    use contracts::domain::a002_port::{port_form_schema, PortCreate, PortEdit};
    use contracts::shared::form::{FieldValue, FormMode};

    fn filled_port_form() -> FormState {
        let mut form = FormState::new(&port_form_schema(), FormMode::Create);
        form.edit("portCode", FieldValue::text("VNSGN"));
        form.edit("portName", FieldValue::text("Sài Gòn"));
        form.edit("typePorts", FieldValue::Many(vec!["1".into()]));
        form.edit("countryID", FieldValue::text("1"));
        form.edit("address", FieldValue::text("Quận 4"));
        form.edit("company", FieldValue::text("SNP"));
        form
    }

    #[test]
    fn test_schema_lookups_deduplicated() {
        assert_eq!(
            schema_lookups(&port_form_schema()),
            vec![LookupKind::Countries, LookupKind::TypePorts]
        );
        assert_eq!(
            schema_lookups(&partner_form_schema()),
            vec![LookupKind::Countries, LookupKind::PartnerTypes, LookupKind::Zones]
        );
    }

    #[test]
    fn test_empty_required_blocks_submit() {
        let mut form = FormState::new(&port_form_schema(), FormMode::Create);
        form.edit("portCode", FieldValue::text(""));
        form.edit("portName", FieldValue::text("P1"));

        let mut builds = 0;
        let result = prepare_submit(&mut form, |v| {
            builds += 1;
            PortCreate::from_values(v)
        });

        match result {
            Err(SubmitBlocked::Invalid(errors)) => {
                assert!(errors.iter().any(|e| e.field == "portCode"));
            }
            other => panic!("expected invalid form, got {other:?}"),
        }
        assert_eq!(builds, 0);
        assert_eq!(form.error("portCode"), Some("code_required"));
    }

    #[test]
    fn test_create_payload_has_only_create_fields() {
        let mut form = filled_port_form();
        let payload = prepare_submit(&mut form, PortCreate::from_values).unwrap();

        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("portID").is_none());
        assert!(json.get("status").is_none());
        assert_eq!(json["portCode"], "VNSGN");
        assert_eq!(json["typePorts"], serde_json::json!(["1"]));
    }

    #[test]
    fn test_edit_payload_carries_id_and_status() {
        let mut form = FormState::new(&port_form_schema(), FormMode::Edit);
        let mut create = filled_port_form();
        let values = create.submit().unwrap().with("status", FieldValue::text("2"));
        form.seed_once(values);

        let payload = prepare_submit(&mut form, |v| PortEdit::from_values("port-7", v)).unwrap();
        assert_eq!(payload.record_id(), Some("port-7"));
        assert_eq!(payload.status.code(), 2);
    }

    #[test]
    fn test_partner_invalid_email_blocks_submit() {
        let mut form = FormState::new(&partner_form_schema(), FormMode::Create);
        form.edit("partnerCode", FieldValue::text("ASLS152"));
        form.edit("partnerName", FieldValue::text("Đông Á"));
        form.edit("typeOfPartner", FieldValue::text("Customer"));
        form.edit("countryID", FieldValue::text("1"));
        form.edit("email", FieldValue::text("abcd@gmail"));

        let result = prepare_submit(&mut form, PartnerCreate::from_values);
        assert!(matches!(result, Err(SubmitBlocked::Invalid(ref e)) if e.len() == 1));
        assert_eq!(form.error("email"), Some("email_invalid"));
    }
}
