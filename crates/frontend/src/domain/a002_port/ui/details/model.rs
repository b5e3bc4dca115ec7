use contracts::domain::a002_port::{port_form_schema, PortCreate, PortEdit};
use contracts::shared::form::{FormMode, FormState, FormValues, PayloadError};

pub fn new_form(port_id: Option<&str>) -> FormState {
    let mode = match port_id {
        Some(_) => FormMode::Edit,
        None => FormMode::Create,
    };
    FormState::new(&port_form_schema(), mode)
}

/// Payload без portID и статуса
pub fn create_payload(values: &FormValues) -> Result<PortCreate, PayloadError> {
    PortCreate::from_values(values)
}

pub fn edit_payload(port_id: &str, values: &FormValues) -> Result<PortEdit, PayloadError> {
    PortEdit::from_values(port_id, values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_port::PortDetail;
    use contracts::domain::common::RecordStatus;
    use contracts::shared::form::FieldValue;

    fn detail() -> PortDetail {
        PortDetail {
            port_id: "port-003".into(),
            port_code: "VNHPH".into(),
            port_name: "Hải Phòng".into(),
            country_id: "1".into(),
            country_name: "Việt Nam".into(),
            type_ports: vec!["1".into(), "2".into()],
            address: "Ngô Quyền".into(),
            company: "Cảng Hải Phòng".into(),
            status: RecordStatus::Active,
            inserted_by: "Admin".into(),
            inserted_date: "14/06/2023".into(),
        }
    }

    #[test]
    fn test_create_port_with_empty_code_is_blocked() {
        let mut form = new_form(None);
        form.edit("portCode", FieldValue::text(""));
        form.edit("portName", FieldValue::text("P1"));

        let errors = form.submit().unwrap_err();
        assert!(errors.iter().any(|e| e.field == "portCode" && e.message_key == "code_required"));
        assert!(form.field("status").is_none());
    }

    #[test]
    fn test_user_edit_survives_late_detail() {
        let mut form = new_form(Some("port-003"));
        form.edit("portName", FieldValue::text("Typed first"));

        assert!(form.seed_once(detail().to_form_values()));
        assert!(!form.seed_once(detail().to_form_values()));

        assert_eq!(form.text("portName"), "Typed first");
        assert_eq!(form.text("portCode"), "VNHPH");
        assert_eq!(form.many("typePorts"), vec!["1".to_string(), "2".to_string()]);
    }

    #[test]
    fn test_edit_payload_from_seeded_detail() {
        let mut form = new_form(Some("port-003"));
        form.seed_once(detail().to_form_values());
        form.edit("status", FieldValue::text("3"));

        let values = form.submit().unwrap();
        let payload = edit_payload("port-003", &values).unwrap();
        assert_eq!(payload.port_id, "port-003");
        assert_eq!(payload.status, RecordStatus::Block);
        assert_eq!(payload.fields.type_ports.len(), 2);
        assert!(create_payload(&values).is_ok());
    }
}
