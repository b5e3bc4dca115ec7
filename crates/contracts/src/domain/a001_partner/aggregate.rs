use crate::domain::common::{
    EntityKind, EntityRecord, FieldLookup, LookupKind, SavePayload, StatusKind,
};
use crate::shared::form::{FieldFormat, FieldSpec, FieldValue, FormValues, PayloadError};
use crate::shared::table::ColumnDescriptor;
use serde::{Deserialize, Serialize};

pub const PARTNER_STATUS_ACTIVE: &str = "Active";
pub const PARTNER_STATUS_DEACTIVE: &str = "DeActive";

// ============================================================================
// Row
// ============================================================================

/// Партнёр (клиент или поставщик)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerRow {
    pub key: String,
    pub partner_code: String,
    #[serde(default)]
    pub abbreviation: String,
    pub partner_name: String,
    pub type_of_partner: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub zone: String,
    #[serde(default)]
    pub country: String,
    #[serde(rename = "countryID", default)]
    pub country_id: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub saleman: String,
    pub status: String,
    #[serde(default)]
    pub potential_analysis: String,
    #[serde(default)]
    pub date_created: String,
    #[serde(default)]
    pub date_update: String,
    #[serde(default)]
    pub updater: String,
    #[serde(default)]
    pub creator: String,
}

impl FieldLookup for PartnerRow {
    fn field_text(&self, field: &str) -> Option<String> {
        let value = match field {
            "key" => &self.key,
            "partnerCode" => &self.partner_code,
            "abbreviation" => &self.abbreviation,
            "partnerName" => &self.partner_name,
            "typeOfPartner" => &self.type_of_partner,
            "phone" => &self.phone,
            "zone" => &self.zone,
            "country" => &self.country,
            "countryID" => &self.country_id,
            "address" => &self.address,
            "email" => &self.email,
            "saleman" => &self.saleman,
            "status" => &self.status,
            "potentialAnalysis" => &self.potential_analysis,
            "dateCreated" => &self.date_created,
            "dateUpdate" => &self.date_update,
            "updater" => &self.updater,
            "creator" => &self.creator,
            _ => return None,
        };
        Some(value.clone())
    }
}

impl EntityRecord for PartnerRow {
    fn kind() -> EntityKind {
        EntityKind::Partner
    }

    fn key(&self) -> String {
        self.key.clone()
    }
}

impl PartnerRow {
    /// Значения для формы редактирования
    pub fn to_form_values(&self) -> FormValues {
        FormValues::new()
            .with("partnerCode", FieldValue::text(&self.partner_code))
            .with("abbreviation", FieldValue::text(&self.abbreviation))
            .with("partnerName", FieldValue::text(&self.partner_name))
            .with("typeOfPartner", FieldValue::text(&self.type_of_partner))
            .with("phone", FieldValue::text(&self.phone))
            .with("zone", FieldValue::text(&self.zone))
            .with("countryID", FieldValue::text(&self.country_id))
            .with("address", FieldValue::text(&self.address))
            .with("email", FieldValue::text(&self.email))
            .with("saleman", FieldValue::text(&self.saleman))
            .with("status", FieldValue::text(&self.status))
    }

    pub fn is_active(&self) -> bool {
        self.status == PARTNER_STATUS_ACTIVE
    }
}

// ============================================================================
// Payloads
// ============================================================================

/// Данные для создания партнёра
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerCreate {
    pub partner_code: String,
    pub abbreviation: String,
    pub partner_name: String,
    pub type_of_partner: String,
    pub phone: String,
    pub zone: String,
    #[serde(rename = "countryID")]
    pub country_id: String,
    pub address: String,
    pub email: String,
    pub saleman: String,
}

impl PartnerCreate {
    pub fn from_values(values: &FormValues) -> Result<Self, PayloadError> {
        Ok(Self {
            partner_code: values.require_text("partnerCode")?,
            abbreviation: values.optional_text("abbreviation"),
            partner_name: values.require_text("partnerName")?,
            type_of_partner: values.require_text("typeOfPartner")?,
            phone: values.optional_text("phone"),
            zone: values.optional_text("zone"),
            country_id: values.require_text("countryID")?,
            address: values.optional_text("address"),
            email: values.optional_text("email"),
            saleman: values.optional_text("saleman"),
        })
    }
}

impl SavePayload for PartnerCreate {
    fn kind() -> EntityKind {
        EntityKind::Partner
    }

    fn record_id(&self) -> Option<&str> {
        None
    }
}

/// Данные для обновления партнёра
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerEdit {
    pub key: String,
    #[serde(flatten)]
    pub fields: PartnerCreate,
    pub status: String,
}

impl PartnerEdit {
    pub fn from_values(key: &str, values: &FormValues) -> Result<Self, PayloadError> {
        let status = values.require_text("status")?;
        if StatusKind::Partner.tag(&status).is_none() {
            return Err(PayloadError::Invalid {
                field: "status".into(),
                value: status,
            });
        }
        Ok(Self {
            key: key.to_string(),
            fields: PartnerCreate::from_values(values)?,
            status,
        })
    }
}

impl SavePayload for PartnerEdit {
    fn kind() -> EntityKind {
        EntityKind::Partner
    }

    fn record_id(&self) -> Option<&str> {
        Some(&self.key)
    }
}

// ============================================================================
// Screen descriptors
// ============================================================================

pub fn partner_columns() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::text("key", "no", 80).fixed_left().sortable(),
        ColumnDescriptor::text("partnerCode", "code", 150)
            .fixed_left()
            .searchable()
            .sortable(),
        ColumnDescriptor::text("abbreviation", "abbreviation", 250)
            .fixed_left()
            .searchable(),
        ColumnDescriptor::text("partnerName", "name", 250)
            .searchable()
            .sortable(),
        ColumnDescriptor::text("typeOfPartner", "type_of_partner", 200).searchable(),
        ColumnDescriptor::text("phone", "phone", 150).searchable(),
        ColumnDescriptor::text("zone", "zone", 150).searchable(),
        ColumnDescriptor::text("country", "country", 200).searchable(),
        ColumnDescriptor::text("address", "address", 500).searchable(),
        ColumnDescriptor::text("email", "email", 180).searchable(),
        ColumnDescriptor::text("saleman", "saleman", 180).searchable(),
        ColumnDescriptor::status(
            "status",
            "status",
            150,
            StatusKind::Partner,
            StatusKind::Partner.filter_options(),
        ),
        ColumnDescriptor::text("potentialAnalysis", "potential_analysis", 200).searchable(),
        ColumnDescriptor::text("dateCreated", "date_created", 150).sortable(),
        ColumnDescriptor::text("dateUpdate", "date_update", 150).sortable(),
        ColumnDescriptor::text("updater", "updater", 200).searchable(),
        ColumnDescriptor::text("creator", "creator", 200).searchable(),
        ColumnDescriptor::edit_action("key"),
    ]
}

pub fn partner_form_schema() -> Vec<FieldSpec> {
    vec![
        FieldSpec::text("partnerCode", "code")
            .placeholder("code_placeholder")
            .required("code_required"),
        FieldSpec::text("abbreviation", "abbreviation").placeholder("abbreviation_placeholder"),
        FieldSpec::text("partnerName", "name")
            .placeholder("name_placeholder")
            .required("name_required"),
        FieldSpec::select("typeOfPartner", "type_of_partner", LookupKind::PartnerTypes)
            .required("type_of_partner_required"),
        FieldSpec::text("phone", "phone").placeholder("phone_placeholder"),
        FieldSpec::select("zone", "zone", LookupKind::Zones),
        FieldSpec::search_select("countryID", "country", LookupKind::Countries)
            .required("country_required"),
        FieldSpec::status("status", "status", StatusKind::Partner).required("status_required"),
        FieldSpec::text("address", "address").placeholder("address_placeholder"),
        FieldSpec::text("email", "email")
            .placeholder("email_placeholder")
            .format(FieldFormat::Email, "email_invalid"),
        FieldSpec::text("saleman", "saleman"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::{FormMode, FormState};
    use crate::shared::table::{ColumnFilterState, RenderKind};

    fn row(key: &str, code: &str) -> PartnerRow {
        PartnerRow {
            key: key.into(),
            partner_code: code.into(),
            partner_name: "Đông Á".into(),
            type_of_partner: "Customer".into(),
            status: PARTNER_STATUS_ACTIVE.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_partner_row_wire_names() {
        let json = serde_json::to_value(row("1", "ASLS152")).unwrap();
        assert_eq!(json["partnerCode"], "ASLS152");
        assert_eq!(json["countryID"], "");
        assert!(json.get("partner_code").is_none());
    }

    #[test]
    fn test_search_partner_code() {
        let rows = vec![row("1", "ASLS152"), row("2", "X")];
        let mut filter = ColumnFilterState::new();
        filter.confirm("partnerCode", "ASLS");

        let visible = filter.apply(&rows);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].key, "1");

        let segments = filter.render("partnerCode", &visible[0].partner_code);
        assert_eq!(segments[0].text, "ASLS");
        assert!(segments[0].matched);
        assert_eq!(segments[1].text, "152");
        assert!(!segments[1].matched);
    }

    #[test]
    fn test_columns_end_with_edit_action() {
        let columns = partner_columns();
        let last = columns.last().unwrap();
        assert_eq!(last.render, RenderKind::EditAction);
        let status = columns.iter().find(|c| c.key == "status").unwrap();
        assert_eq!(status.value_filter.map(|v| v.len()), Some(2));
    }

    #[test]
    fn test_create_payload_from_form() {
        let mut form = FormState::new(&partner_form_schema(), FormMode::Create);
        assert!(form.field("status").is_none());
        form.edit("partnerCode", FieldValue::text("ASLS152"));
        form.edit("partnerName", FieldValue::text("Đông Á"));
        form.edit("typeOfPartner", FieldValue::text("Customer"));
        form.edit("countryID", FieldValue::text("VN"));

        let values = form.submit().unwrap();
        let payload = PartnerCreate::from_values(&values).unwrap();
        assert_eq!(payload.partner_code, "ASLS152");
        assert_eq!(payload.country_id, "VN");
        assert_eq!(payload.record_id(), None);
    }

    #[test]
    fn test_invalid_email_blocks_submit() {
        let mut form = FormState::new(&partner_form_schema(), FormMode::Create);
        for (name, value) in [
            ("partnerCode", "ASLS152"),
            ("partnerName", "Đông Á"),
            ("typeOfPartner", "Supplier"),
            ("countryID", "VN"),
            ("email", "abcd"),
        ] {
            form.edit(name, FieldValue::text(value));
        }
        let errors = form.submit().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message_key, "email_invalid");
    }

    #[test]
    fn test_edit_payload_carries_key_and_status() {
        let mut source = row("7", "ASLS152");
        source.country_id = "VN".into();
        let mut form = FormState::new(&partner_form_schema(), FormMode::Edit);
        form.seed_once(source.to_form_values());
        let values = form.submit().unwrap();

        let payload = PartnerEdit::from_values("7", &values).unwrap();
        assert_eq!(payload.record_id(), Some("7"));
        assert_eq!(payload.status, PARTNER_STATUS_ACTIVE);
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["partnerCode"], "ASLS152");
        assert_eq!(json["key"], "7");
    }

    #[test]
    fn test_edit_payload_rejects_unknown_status() {
        let values = row("7", "A").to_form_values()
            .with("countryID", FieldValue::text("VN"))
            .with("status", FieldValue::text("Paused"));
        assert!(matches!(
            PartnerEdit::from_values("7", &values),
            Err(PayloadError::Invalid { .. })
        ));
    }
}
