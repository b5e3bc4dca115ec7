use contracts::domain::a001_partner::{partner_form_schema, PartnerCreate, PartnerEdit};
use contracts::shared::form::{FormMode, FormState, FormValues, PayloadError};

pub fn form_mode(id: Option<&str>) -> FormMode {
    if id.is_some() {
        FormMode::Edit
    } else {
        FormMode::Create
    }
}

pub fn new_form(id: Option<&str>) -> FormState {
    FormState::new(&partner_form_schema(), form_mode(id))
}

pub fn create_payload(values: &FormValues) -> Result<PartnerCreate, PayloadError> {
    PartnerCreate::from_values(values)
}

pub fn edit_payload(key: &str, values: &FormValues) -> Result<PartnerEdit, PayloadError> {
    PartnerEdit::from_values(key, values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_partner::PartnerRow;
    use contracts::shared::form::FieldValue;

    #[test]
    fn test_status_only_in_edit_form() {
        assert!(new_form(None).field("status").is_none());
        assert!(new_form(Some("7")).field("status").is_some());
    }

    #[test]
    fn test_edit_after_seed_builds_update() {
        let row = PartnerRow {
            key: "7".into(),
            partner_code: "ASLS152".into(),
            partner_name: "Đông Á".into(),
            type_of_partner: "Customer".into(),
            country_id: "1".into(),
            status: "Active".into(),
            ..Default::default()
        };
        let mut form = new_form(Some("7"));
        assert!(form.seed_once(row.to_form_values()));
        form.edit("phone", FieldValue::text("0909"));

        let values = form.submit().unwrap();
        let payload = edit_payload("7", &values).unwrap();
        assert_eq!(payload.key, "7");
        assert_eq!(payload.status, "Active");
        assert_eq!(payload.fields.phone, "0909");
        assert_eq!(payload.fields.partner_code, "ASLS152");
    }

    #[test]
    fn test_create_requires_type_and_country() {
        let mut form = new_form(None);
        form.edit("partnerCode", FieldValue::text("NEW1"));
        form.edit("partnerName", FieldValue::text("New"));

        let errors = form.submit().unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["typeOfPartner", "countryID"]);
    }
}
