use super::state::PayloadError;
use crate::domain::common::{LookupKind, StatusKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Widget kind of a form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Single choice from a lookup list; `searchable` filters options by label
    Select { lookup: LookupKind, searchable: bool },
    /// Several choices from a lookup list
    MultiSelect(LookupKind),
    /// Record status chosen from the vocabulary's values
    Status(StatusKind),
}

/// Additional format check applied to non-empty values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFormat {
    Email,
}

impl FieldFormat {
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            FieldFormat::Email => {
                let value = value.trim();
                match value.split_once('@') {
                    Some((local, domain)) => {
                        !local.is_empty()
                            && !domain.contains('@')
                            && domain
                                .split_once('.')
                                .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
                    }
                    None => false,
                }
            }
        }
    }
}

/// Описание поля формы: имя, подписи (ключи перевода) и правила
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label_key: &'static str,
    pub placeholder_key: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Translation key of the message shown when validation fails
    pub message_key: &'static str,
    pub format: Option<FieldFormat>,
    pub format_message_key: &'static str,
    /// Shown only when editing an existing record
    pub edit_only: bool,
}

impl FieldSpec {
    pub const fn text(name: &'static str, label_key: &'static str) -> Self {
        Self {
            name,
            label_key,
            placeholder_key: "",
            kind: FieldKind::Text,
            required: false,
            message_key: "",
            format: None,
            format_message_key: "",
            edit_only: false,
        }
    }

    pub const fn select(name: &'static str, label_key: &'static str, lookup: LookupKind) -> Self {
        let mut spec = Self::text(name, label_key);
        spec.kind = FieldKind::Select {
            lookup,
            searchable: false,
        };
        spec
    }

    pub const fn search_select(
        name: &'static str,
        label_key: &'static str,
        lookup: LookupKind,
    ) -> Self {
        let mut spec = Self::text(name, label_key);
        spec.kind = FieldKind::Select {
            lookup,
            searchable: true,
        };
        spec
    }

    pub const fn multi_select(
        name: &'static str,
        label_key: &'static str,
        lookup: LookupKind,
    ) -> Self {
        let mut spec = Self::text(name, label_key);
        spec.kind = FieldKind::MultiSelect(lookup);
        spec
    }

    /// Status select; shown only when editing
    pub const fn status(name: &'static str, label_key: &'static str, kind: StatusKind) -> Self {
        let mut spec = Self::text(name, label_key);
        spec.kind = FieldKind::Status(kind);
        spec.edit_only = true;
        spec
    }

    pub const fn required(mut self, message_key: &'static str) -> Self {
        self.required = true;
        self.message_key = message_key;
        self
    }

    pub const fn placeholder(mut self, placeholder_key: &'static str) -> Self {
        self.placeholder_key = placeholder_key;
        self
    }

    pub const fn format(mut self, format: FieldFormat, message_key: &'static str) -> Self {
        self.format = Some(format);
        self.format_message_key = message_key;
        self
    }

    /// Справочник, из которого поле берёт варианты
    pub fn lookup(&self) -> Option<LookupKind> {
        match self.kind {
            FieldKind::Select { lookup, .. } | FieldKind::MultiSelect(lookup) => Some(lookup),
            FieldKind::Text | FieldKind::Status(_) => None,
        }
    }

    pub fn empty_value(&self) -> FieldValue {
        match self.kind {
            FieldKind::MultiSelect(_) => FieldValue::Many(Vec::new()),
            _ => FieldValue::Text(String::new()),
        }
    }
}

/// Значение поля формы
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Many(Vec<String>),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Many(items) => items.iter().all(|i| i.trim().is_empty()),
        }
    }

    pub fn as_text(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Many(items) => items.join(", "),
        }
    }

    pub fn as_many(&self) -> Vec<String> {
        match self {
            FieldValue::Text(s) if s.is_empty() => Vec::new(),
            FieldValue::Text(s) => vec![s.clone()],
            FieldValue::Many(items) => items.clone(),
        }
    }
}

/// Field name → value, submitted as one unit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues(BTreeMap<String, FieldValue>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: FieldValue) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: &str, value: FieldValue) {
        self.0.insert(name.to_string(), value);
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.get(name)
    }

    /// Text value, empty when absent
    pub fn text(&self, name: &str) -> String {
        self.get(name).map(FieldValue::as_text).unwrap_or_default()
    }

    pub fn many(&self, name: &str) -> Vec<String> {
        self.get(name).map(FieldValue::as_many).unwrap_or_default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Text of a field that must be present and non-blank
    pub fn require_text(&self, name: &str) -> Result<String, PayloadError> {
        match self.get(name) {
            Some(value) if !value.is_blank() => Ok(value.as_text().trim().to_string()),
            _ => Err(PayloadError::Missing(name.to_string())),
        }
    }

    /// Items of a field that must hold at least one choice
    pub fn require_many(&self, name: &str) -> Result<Vec<String>, PayloadError> {
        match self.get(name) {
            Some(value) if !value.is_blank() => Ok(value.as_many()),
            _ => Err(PayloadError::Missing(name.to_string())),
        }
    }

    /// Optional text, trimmed
    pub fn optional_text(&self, name: &str) -> String {
        self.text(name).trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_values() {
        assert!(FieldValue::text("  ").is_blank());
        assert!(FieldValue::Many(vec![]).is_blank());
        assert!(!FieldValue::Many(vec!["sea".into()]).is_blank());
    }

    #[test]
    fn test_email_format() {
        let email = FieldFormat::Email;
        assert!(email.accepts("abcd@gmail.com"));
        assert!(!email.accepts("abcd@gmail"));
        assert!(!email.accepts("@gmail.com"));
        assert!(!email.accepts("a@b@c.com"));
    }

    #[test]
    fn test_status_field_is_edit_only() {
        let spec =
            FieldSpec::status("status", "status", StatusKind::Record).required("status_required");
        assert!(spec.edit_only);
        assert!(spec.required);
        assert_eq!(spec.kind, FieldKind::Status(StatusKind::Record));
    }

    #[test]
    fn test_form_values_accessors() {
        let values = FormValues::new()
            .with("portCode", FieldValue::text("VNSGN"))
            .with("typePorts", FieldValue::Many(vec!["1".into(), "2".into()]));
        assert_eq!(values.text("portCode"), "VNSGN");
        assert_eq!(values.many("typePorts"), vec!["1", "2"]);
        assert_eq!(values.text("missing"), "");
        assert_eq!(values.require_text("portCode").unwrap(), "VNSGN");
        assert_eq!(
            values.require_text("missing"),
            Err(PayloadError::Missing("missing".into()))
        );
        assert_eq!(values.require_many("typePorts").unwrap().len(), 2);
    }
}
