use crate::domain::common::{EntityKind, EntityRecord, FieldLookup, RecordStatus, StatusKind};
use crate::shared::table::ColumnDescriptor;
use serde::{Deserialize, Serialize};

/// Пользователь системы (только чтение)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRow {
    #[serde(rename = "userID")]
    pub user_id: String,
    pub employee_code: String,
    pub first_name: String,
    #[serde(default)]
    pub citizen_identification: String,
    #[serde(default)]
    pub visa: String,
    #[serde(default)]
    pub nationality: String,
    #[serde(default)]
    pub working_branch: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub last_login: String,
    pub status: RecordStatus,
    #[serde(default)]
    pub created_date: String,
    #[serde(default)]
    pub updated_date: String,
    #[serde(default)]
    pub list_role: String,
}

impl FieldLookup for UserRow {
    fn field_text(&self, field: &str) -> Option<String> {
        let value = match field {
            "userID" => self.user_id.clone(),
            "employeeCode" => self.employee_code.clone(),
            "firstName" => self.first_name.clone(),
            "citizenIdentification" => self.citizen_identification.clone(),
            "visa" => self.visa.clone(),
            "nationality" => self.nationality.clone(),
            "workingBranch" => self.working_branch.clone(),
            "phoneNumber" => self.phone_number.clone(),
            "lastLogin" => self.last_login.clone(),
            "status" => self.status.code().to_string(),
            "createdDate" => self.created_date.clone(),
            "updatedDate" => self.updated_date.clone(),
            "listRole" => self.list_role.clone(),
            _ => return None,
        };
        Some(value)
    }
}

impl EntityRecord for UserRow {
    fn kind() -> EntityKind {
        EntityKind::User
    }

    fn key(&self) -> String {
        self.user_id.clone()
    }
}

pub fn user_columns() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::text("employeeCode", "employee_code", 150)
            .fixed_left()
            .searchable()
            .sortable(),
        ColumnDescriptor::text("firstName", "first_name", 200)
            .searchable()
            .sortable(),
        ColumnDescriptor::text("citizenIdentification", "citizen_identification", 180)
            .searchable(),
        ColumnDescriptor::text("visa", "visa", 120).searchable(),
        ColumnDescriptor::text("nationality", "nationality", 150).searchable(),
        ColumnDescriptor::text("workingBranch", "working_branch", 180).searchable(),
        ColumnDescriptor::text("phoneNumber", "phone_number", 150).searchable(),
        ColumnDescriptor::text("listRole", "list_role", 200).searchable(),
        ColumnDescriptor::status(
            "status",
            "status",
            150,
            StatusKind::Record,
            StatusKind::Record.filter_options(),
        ),
        ColumnDescriptor::text("lastLogin", "last_login", 180).sortable(),
        ColumnDescriptor::text("createdDate", "date_created", 150).sortable(),
        ColumnDescriptor::text("updatedDate", "date_update", 150).sortable(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table::{ListRequest, Pagination, ColumnFilterState};

    fn user(id: &str, name: &str, status: RecordStatus) -> UserRow {
        UserRow {
            user_id: id.into(),
            employee_code: format!("NV{id}"),
            first_name: name.into(),
            citizen_identification: String::new(),
            visa: String::new(),
            nationality: "Việt Nam".into(),
            working_branch: "Hồ Chí Minh".into(),
            phone_number: String::new(),
            last_login: String::new(),
            status,
            created_date: String::new(),
            updated_date: String::new(),
            list_role: "Admin".into(),
        }
    }

    #[test]
    fn test_user_status_value_filter() {
        let rows = vec![
            user("1", "An", RecordStatus::Active),
            user("2", "Bình", RecordStatus::Block),
            user("3", "Chi", RecordStatus::Deactivate),
        ];
        let mut filter = ColumnFilterState::new();
        filter.set_values("status", vec!["3".into()]);
        let request = ListRequest::new(Pagination::default(), &filter, None);
        let page = request.apply(&rows);
        assert_eq!(page.total, 1);
        assert_eq!(page.data[0].first_name, "Bình");
    }

    #[test]
    fn test_users_have_no_edit_column() {
        assert!(user_columns().iter().all(|c| !c.is_action()));
    }
}
