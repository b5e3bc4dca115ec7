use super::EntityKind;
use serde::{de::DeserializeOwned, Serialize};

/// Read access to a record's fields by their wire name.
///
/// Every field of a row is rendered and filtered as a string, so lookups
/// return the string form of the value.
pub trait FieldLookup {
    fn field_text(&self, field: &str) -> Option<String>;
}

/// Строка списка: плоская запись с уникальным ключом
pub trait EntityRecord:
    FieldLookup + Clone + PartialEq + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Сущность, к которой относится запись
    fn kind() -> EntityKind;

    /// Уникальный ключ строки
    fn key(&self) -> String;
}

/// Payload handed to the data source's save operation
pub trait SavePayload: Serialize {
    fn kind() -> EntityKind;

    /// `None` for create, the record key for update
    fn record_id(&self) -> Option<&str>;
}

impl FieldLookup for serde_json::Value {
    fn field_text(&self, field: &str) -> Option<String> {
        match self.get(field)? {
            serde_json::Value::Null => Some(String::new()),
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            serde_json::Value::Bool(b) => Some(b.to_string()),
            serde_json::Value::Array(items) => Some(
                items
                    .iter()
                    .map(|item| match item {
                        serde_json::Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            serde_json::Value::Object(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_field_text_scalars() {
        let row = json!({"code": "ASLS152", "status": 2, "active": true, "note": null});
        assert_eq!(row.field_text("code").as_deref(), Some("ASLS152"));
        assert_eq!(row.field_text("status").as_deref(), Some("2"));
        assert_eq!(row.field_text("active").as_deref(), Some("true"));
        assert_eq!(row.field_text("note").as_deref(), Some(""));
        assert_eq!(row.field_text("missing"), None);
    }

    #[test]
    fn test_json_field_text_joins_arrays() {
        let row = json!({"typePorts": ["Sea", "River"]});
        assert_eq!(row.field_text("typePorts").as_deref(), Some("Sea, River"));
    }
}
