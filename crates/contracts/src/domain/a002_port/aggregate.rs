use crate::domain::common::{
    EntityKind, EntityRecord, FieldLookup, LookupKind, RecordStatus, SavePayload, StatusKind,
};
use crate::shared::form::{FieldSpec, FieldValue, FormValues, PayloadError};
use crate::shared::table::ColumnDescriptor;
use serde::{Deserialize, Serialize};

// ============================================================================
// Row and detail
// ============================================================================

/// Строка списка портов
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortRow {
    #[serde(rename = "portID")]
    pub port_id: String,
    pub port_code: String,
    pub port_name: String,
    #[serde(default)]
    pub country_name: String,
    /// Names of the port's types, comma separated
    #[serde(default)]
    pub type_port_names: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub company: String,
    pub status: RecordStatus,
    #[serde(default)]
    pub inserted_by: String,
    #[serde(default)]
    pub inserted_date: String,
}

impl FieldLookup for PortRow {
    fn field_text(&self, field: &str) -> Option<String> {
        let value = match field {
            "portID" => self.port_id.clone(),
            "portCode" => self.port_code.clone(),
            "portName" => self.port_name.clone(),
            "countryName" => self.country_name.clone(),
            "typePortNames" => self.type_port_names.clone(),
            "address" => self.address.clone(),
            "company" => self.company.clone(),
            "status" => self.status.code().to_string(),
            "insertedBy" => self.inserted_by.clone(),
            "insertedDate" => self.inserted_date.clone(),
            _ => return None,
        };
        Some(value)
    }
}

impl EntityRecord for PortRow {
    fn kind() -> EntityKind {
        EntityKind::Port
    }

    fn key(&self) -> String {
        self.port_id.clone()
    }
}

/// Карточка порта, как её отдаёт источник данных
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortDetail {
    #[serde(rename = "portID")]
    pub port_id: String,
    pub port_code: String,
    pub port_name: String,
    #[serde(rename = "countryID")]
    pub country_id: String,
    #[serde(default)]
    pub country_name: String,
    /// Ids of the port's types
    #[serde(default)]
    pub type_ports: Vec<String>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub company: String,
    pub status: RecordStatus,
    #[serde(default)]
    pub inserted_by: String,
    #[serde(default)]
    pub inserted_date: String,
}

impl PortDetail {
    /// Значения для формы редактирования
    pub fn to_form_values(&self) -> FormValues {
        FormValues::new()
            .with("portCode", FieldValue::text(&self.port_code))
            .with("portName", FieldValue::text(&self.port_name))
            .with("typePorts", FieldValue::Many(self.type_ports.clone()))
            .with("countryID", FieldValue::text(&self.country_id))
            .with("status", FieldValue::text(self.status.code().to_string()))
            .with("address", FieldValue::text(&self.address))
            .with("company", FieldValue::text(&self.company))
    }
}

// ============================================================================
// Payloads
// ============================================================================

/// Новый порт: без `portID` и `status`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortCreate {
    pub port_code: String,
    pub port_name: String,
    pub type_ports: Vec<String>,
    #[serde(rename = "countryID")]
    pub country_id: String,
    pub address: String,
    pub company: String,
}

impl PortCreate {
    pub fn from_values(values: &FormValues) -> Result<Self, PayloadError> {
        Ok(Self {
            port_code: values.require_text("portCode")?,
            port_name: values.require_text("portName")?,
            type_ports: values.require_many("typePorts")?,
            country_id: values.require_text("countryID")?,
            address: values.require_text("address")?,
            company: values.require_text("company")?,
        })
    }
}

impl SavePayload for PortCreate {
    fn kind() -> EntityKind {
        EntityKind::Port
    }

    fn record_id(&self) -> Option<&str> {
        None
    }
}

/// Изменение порта: все поля формы плюс ключ и статус
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortEdit {
    #[serde(rename = "portID")]
    pub port_id: String,
    #[serde(flatten)]
    pub fields: PortCreate,
    pub status: RecordStatus,
}

impl PortEdit {
    pub fn from_values(port_id: &str, values: &FormValues) -> Result<Self, PayloadError> {
        let raw = values.require_text("status")?;
        let status = raw
            .parse::<i32>()
            .ok()
            .and_then(RecordStatus::from_code)
            .ok_or(PayloadError::Invalid {
                field: "status".into(),
                value: raw,
            })?;
        Ok(Self {
            port_id: port_id.to_string(),
            fields: PortCreate::from_values(values)?,
            status,
        })
    }
}

impl SavePayload for PortEdit {
    fn kind() -> EntityKind {
        EntityKind::Port
    }

    fn record_id(&self) -> Option<&str> {
        Some(&self.port_id)
    }
}

// ============================================================================
// Screen descriptors
// ============================================================================

pub fn port_columns() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::text("portCode", "code", 150)
            .fixed_left()
            .searchable()
            .sortable(),
        ColumnDescriptor::text("portName", "name", 250)
            .searchable()
            .sortable(),
        ColumnDescriptor::text("countryName", "country_name", 200)
            .searchable()
            .sortable(),
        ColumnDescriptor::text("typePortNames", "type_of_port", 200).searchable(),
        ColumnDescriptor::text("address", "address", 300).searchable(),
        ColumnDescriptor::text("company", "company", 200).searchable(),
        ColumnDescriptor::status(
            "status",
            "status",
            150,
            StatusKind::Record,
            StatusKind::Record.filter_options(),
        ),
        ColumnDescriptor::text("insertedBy", "creator", 150).searchable(),
        ColumnDescriptor::text("insertedDate", "date_created", 150).sortable(),
        ColumnDescriptor::edit_action("portID"),
    ]
}

pub fn port_form_schema() -> Vec<FieldSpec> {
    vec![
        FieldSpec::text("portCode", "code")
            .placeholder("new_port_placeholder")
            .required("code_required"),
        FieldSpec::text("portName", "name")
            .placeholder("new_port_title")
            .required("name_required"),
        FieldSpec::multi_select("typePorts", "type_of_port", LookupKind::TypePorts)
            .placeholder("type_of_port_placeholder")
            .required("type_of_port_required"),
        FieldSpec::search_select("countryID", "country_name", LookupKind::Countries)
            .placeholder("country_placeholder")
            .required("country_required"),
        FieldSpec::status("status", "status", StatusKind::Record).required("status_required"),
        FieldSpec::text("address", "address")
            .placeholder("address_placeholder")
            .required("address_required"),
        FieldSpec::text("company", "company")
            .placeholder("company_placeholder")
            .required("company_required"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::{FieldError, FormMode, FormState};

    fn detail() -> PortDetail {
        PortDetail {
            port_id: "p-1".into(),
            port_code: "VNSGN".into(),
            port_name: "Sai Gon".into(),
            country_id: "VN".into(),
            country_name: "Việt Nam".into(),
            type_ports: vec!["sea".into()],
            address: "Quận 4".into(),
            company: "SNP".into(),
            status: RecordStatus::Active,
            inserted_by: "Admin".into(),
            inserted_date: "14/06/2023".into(),
        }
    }

    #[test]
    fn test_create_port_with_empty_code_is_blocked() {
        let mut saves = 0;
        let mut save = |_: PortCreate| saves += 1;

        let mut form = FormState::new(&port_form_schema(), FormMode::Create);
        form.edit("portCode", FieldValue::text(""));
        form.edit("portName", FieldValue::text("P1"));

        match form.submit() {
            Ok(values) => save(PortCreate::from_values(&values).unwrap()),
            Err(errors) => {
                assert!(errors.iter().any(|e: &FieldError| e.field == "portCode"));
            }
        }
        assert_eq!(form.error("portCode"), Some("code_required"));
        assert_eq!(saves, 0);
    }

    #[test]
    fn test_create_payload_excludes_id_and_status() {
        let mut saves = Vec::new();
        let mut form = FormState::new(&port_form_schema(), FormMode::Create);
        let source = detail().to_form_values();
        for name in ["portCode", "portName", "typePorts", "countryID", "address", "company"] {
            form.edit(name, source.get(name).cloned().unwrap());
        }
        if let Ok(values) = form.submit() {
            saves.push(PortCreate::from_values(&values).unwrap());
        }
        assert_eq!(saves.len(), 1);

        let json = serde_json::to_value(&saves[0]).unwrap();
        assert!(json.get("portID").is_none());
        assert!(json.get("status").is_none());
        assert_eq!(json["countryID"], "VN");
        assert_eq!(json["typePorts"], serde_json::json!(["sea"]));
    }

    #[test]
    fn test_edit_payload_from_seeded_form() {
        let mut form = FormState::new(&port_form_schema(), FormMode::Edit);
        assert!(form.seed_once(detail().to_form_values()));
        form.edit("status", FieldValue::text("3"));

        let values = form.submit().unwrap();
        let payload = PortEdit::from_values("p-1", &values).unwrap();
        assert_eq!(payload.status, RecordStatus::Block);
        assert_eq!(payload.record_id(), Some("p-1"));
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["status"], 3);
        assert_eq!(json["portCode"], "VNSGN");
    }

    #[test]
    fn test_row_status_looks_up_as_code() {
        let row: PortRow = serde_json::from_value(serde_json::json!({
            "portID": "p-1",
            "portCode": "VNSGN",
            "portName": "Sai Gon",
            "status": 2
        }))
        .unwrap();
        assert_eq!(row.field_text("status").as_deref(), Some("2"));
        assert_eq!(row.key(), "p-1");
        assert_eq!(row.field_text("unknown"), None);
    }
}
