use super::field::{FieldSpec, FieldValue, FormValues};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// Состояние поля: `Empty → Touched → Valid | Invalid`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldStatus {
    #[default]
    Empty,
    Touched,
    Valid,
    Invalid,
}

/// Field-level validation failure; `message_key` is a translation key
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message_key}")]
pub struct FieldError {
    pub field: String,
    pub message_key: String,
}

/// Building a typed payload from submitted values failed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PayloadError {
    #[error("field `{0}` is missing from the submitted values")]
    Missing(String),
    #[error("field `{field}` has an invalid value `{value}`")]
    Invalid { field: String, value: String },
}

/// Состояние формы создания/редактирования одной записи.
///
/// Holds the values, the per-field status and the inline errors. Detail
/// seeding happens at most once, and never overwrites a field the user has
/// already edited.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    mode: FormMode,
    fields: Vec<FieldSpec>,
    values: FormValues,
    statuses: BTreeMap<&'static str, FieldStatus>,
    errors: BTreeMap<&'static str, &'static str>,
    /// Поля, изменённые пользователем (не просто посещённые)
    edited: BTreeSet<&'static str>,
    seeded: bool,
}

fn check(spec: &FieldSpec, value: &FieldValue) -> Result<(), &'static str> {
    if value.is_blank() {
        return if spec.required {
            Err(spec.message_key)
        } else {
            Ok(())
        };
    }
    match spec.format {
        Some(format) if !format.accepts(&value.as_text()) => Err(spec.format_message_key),
        _ => Ok(()),
    }
}

impl FormState {
    /// Fields marked `edit_only` are dropped in create mode
    pub fn new(schema: &[FieldSpec], mode: FormMode) -> Self {
        let fields: Vec<FieldSpec> = schema
            .iter()
            .filter(|f| mode == FormMode::Edit || !f.edit_only)
            .copied()
            .collect();
        let mut values = FormValues::new();
        for field in &fields {
            values.insert(field.name, field.empty_value());
        }
        Self {
            mode,
            fields,
            values,
            statuses: BTreeMap::new(),
            errors: BTreeMap::new(),
            edited: BTreeSet::new(),
            seeded: false,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_edit(&self) -> bool {
        self.mode == FormMode::Edit
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn text(&self, name: &str) -> String {
        self.values.text(name)
    }

    pub fn many(&self, name: &str) -> Vec<String> {
        self.values.many(name)
    }

    pub fn status(&self, name: &str) -> FieldStatus {
        self.statuses.get(name).copied().unwrap_or_default()
    }

    pub fn error(&self, name: &str) -> Option<&'static str> {
        self.errors.get(name).copied()
    }

    pub fn is_seeded(&self) -> bool {
        self.seeded
    }

    /// No field is currently invalid
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Focus left the field without a change
    pub fn touch(&mut self, name: &str) {
        let Some(spec) = self.field(name).copied() else {
            return;
        };
        if self.status(spec.name) == FieldStatus::Empty {
            self.statuses.insert(spec.name, FieldStatus::Touched);
        }
    }

    /// User input: marks the field touched and re-validates it
    pub fn edit(&mut self, name: &str, value: FieldValue) {
        let Some(spec) = self.field(name).copied() else {
            return;
        };
        self.values.insert(spec.name, value);
        self.edited.insert(spec.name);
        self.statuses.insert(spec.name, FieldStatus::Touched);
        self.validate_field(&spec);
    }

    /// Seed values from a fetched detail record.
    ///
    /// Returns `false` when the form was already seeded. Fields the user has
    /// edited keep their value, a field only focused and left is still seeded;
    /// names outside the schema are ignored.
    pub fn seed_once(&mut self, record: FormValues) -> bool {
        if self.seeded {
            return false;
        }
        self.seeded = true;
        for spec in self.fields.clone() {
            if self.edited.contains(spec.name) {
                continue;
            }
            if let Some(value) = record.get(spec.name) {
                self.values.insert(spec.name, value.clone());
                if !value.is_blank() {
                    self.statuses.insert(spec.name, FieldStatus::Valid);
                    self.errors.remove(spec.name);
                }
            }
        }
        true
    }

    fn validate_field(&mut self, spec: &FieldSpec) -> Option<FieldError> {
        let value = self
            .values
            .get(spec.name)
            .cloned()
            .unwrap_or_else(|| spec.empty_value());
        match check(spec, &value) {
            Ok(()) => {
                self.statuses.insert(spec.name, FieldStatus::Valid);
                self.errors.remove(spec.name);
                None
            }
            Err(message_key) => {
                self.statuses.insert(spec.name, FieldStatus::Invalid);
                self.errors.insert(spec.name, message_key);
                Some(FieldError {
                    field: spec.name.to_string(),
                    message_key: message_key.to_string(),
                })
            }
        }
    }

    /// Validate every field, surfacing inline errors
    pub fn validate_all(&mut self) -> Vec<FieldError> {
        let fields = self.fields.clone();
        fields
            .iter()
            .filter_map(|spec| self.validate_field(spec))
            .collect()
    }

    /// Validate everything; on success return the values of the valid fields.
    ///
    /// An `Err` means nothing may be handed to the save collaborator.
    pub fn submit(&mut self) -> Result<FormValues, Vec<FieldError>> {
        let errors = self.validate_all();
        if !errors.is_empty() {
            return Err(errors);
        }
        let mut submitted = FormValues::new();
        for spec in &self.fields {
            if self.status(spec.name) == FieldStatus::Valid {
                if let Some(value) = self.values.get(spec.name) {
                    submitted.insert(spec.name, value.clone());
                }
            }
        }
        Ok(submitted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::{LookupKind, StatusKind};
    use crate::shared::form::FieldFormat;

    fn schema() -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("code", "code").required("code_required"),
            FieldSpec::text("name", "name").required("name_required"),
            FieldSpec::text("email", "email").format(FieldFormat::Email, "email_invalid"),
            FieldSpec::multi_select("kinds", "kinds", LookupKind::TypePorts),
            FieldSpec::status("status", "status", StatusKind::Record).required("status_required"),
        ]
    }

    #[test]
    fn test_create_mode_drops_edit_only_fields() {
        let form = FormState::new(&schema(), FormMode::Create);
        assert!(form.field("status").is_none());
        assert_eq!(form.fields().len(), 4);
        assert_eq!(form.values().get("kinds"), Some(&FieldValue::Many(vec![])));
    }

    #[test]
    fn test_field_state_machine() {
        let mut form = FormState::new(&schema(), FormMode::Create);
        assert_eq!(form.status("code"), FieldStatus::Empty);
        form.touch("code");
        assert_eq!(form.status("code"), FieldStatus::Touched);
        form.edit("code", FieldValue::text(""));
        assert_eq!(form.status("code"), FieldStatus::Invalid);
        assert_eq!(form.error("code"), Some("code_required"));
        form.edit("code", FieldValue::text("VNSGN"));
        assert_eq!(form.status("code"), FieldStatus::Valid);
        assert_eq!(form.error("code"), None);
    }

    #[test]
    fn test_submit_blocked_by_required_field() {
        let mut form = FormState::new(&schema(), FormMode::Create);
        form.edit("name", FieldValue::text("P1"));
        let errors = form.submit().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "code");
        assert_eq!(form.error("code"), Some("code_required"));
        assert!(!form.is_valid());
    }

    #[test]
    fn test_format_error_uses_its_own_message() {
        let mut form = FormState::new(&schema(), FormMode::Create);
        form.edit("email", FieldValue::text("not-an-email"));
        assert_eq!(form.error("email"), Some("email_invalid"));
        form.edit("email", FieldValue::text(""));
        assert_eq!(form.error("email"), None);
    }

    #[test]
    fn test_submit_returns_valid_fields() {
        let mut form = FormState::new(&schema(), FormMode::Create);
        form.edit("code", FieldValue::text("VNSGN"));
        form.edit("name", FieldValue::text("Sai Gon"));
        let values = form.submit().unwrap();
        assert_eq!(values.text("code"), "VNSGN");
        assert_eq!(values.text("name"), "Sai Gon");
        assert!(values.contains("email"));
        assert!(!values.contains("status"));
    }

    #[test]
    fn test_seed_once() {
        let mut form = FormState::new(&schema(), FormMode::Edit);
        let record = FormValues::new()
            .with("code", FieldValue::text("VNSGN"))
            .with("name", FieldValue::text("Sai Gon"))
            .with("status", FieldValue::text("1"))
            .with("unknown", FieldValue::text("x"));
        assert!(form.seed_once(record));
        assert_eq!(form.text("code"), "VNSGN");
        assert_eq!(form.status("code"), FieldStatus::Valid);
        assert!(!form.values().contains("unknown"));

        form.edit("name", FieldValue::text("Cat Lai"));
        let stale = FormValues::new().with("name", FieldValue::text("Sai Gon"));
        assert!(!form.seed_once(stale));
        assert_eq!(form.text("name"), "Cat Lai");
    }

    #[test]
    fn test_seed_keeps_fields_touched_before_arrival() {
        let mut form = FormState::new(&schema(), FormMode::Edit);
        form.edit("name", FieldValue::text("typed first"));
        form.seed_once(
            FormValues::new()
                .with("code", FieldValue::text("VNSGN"))
                .with("name", FieldValue::text("from server")),
        );
        assert_eq!(form.text("name"), "typed first");
        assert_eq!(form.text("code"), "VNSGN");
    }

    #[test]
    fn test_seed_fills_field_only_focused_before_arrival() {
        let mut form = FormState::new(&schema(), FormMode::Edit);
        form.touch("code");
        form.touch("name");
        assert_eq!(form.status("code"), FieldStatus::Touched);
        assert!(form.seed_once(
            FormValues::new()
                .with("code", FieldValue::text("VNSGN"))
                .with("name", FieldValue::text("Sai Gon"))
                .with("status", FieldValue::text("1")),
        ));
        assert_eq!(form.text("code"), "VNSGN");
        assert_eq!(form.status("code"), FieldStatus::Valid);
        assert_eq!(form.text("name"), "Sai Gon");
        assert!(form.submit().is_ok());
    }
}
