//! In-memory источник данных
//!
//! Хранит записи как JSON-объекты в тех же именах полей, что и API, поэтому
//! фильтрация, сортировка и пагинация идут через общий `ListRequest::apply`.

use super::error::DataSourceError;
use super::seed;
use crate::shared::date_utils::today_stamp;
use contracts::domain::common::{label_for, EntityKind, LookupKind, LookupOption};
use contracts::shared::table::{ListRequest, Paginated};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct MockStore {
    tables: BTreeMap<EntityKind, Vec<Value>>,
    lookups: BTreeMap<LookupKind, Vec<LookupOption>>,
    author: String,
}

impl MockStore {
    pub fn empty(author: &str) -> Self {
        Self {
            tables: BTreeMap::new(),
            lookups: BTreeMap::new(),
            author: author.to_string(),
        }
    }

    /// Store seeded with the demo records
    pub fn seeded() -> Self {
        let mut store = Self::empty(seed::SEED_AUTHOR);
        store.tables.insert(EntityKind::Partner, seed::partners());
        store.tables.insert(EntityKind::Port, seed::ports());
        store.tables.insert(EntityKind::User, seed::users());
        for kind in [
            LookupKind::Countries,
            LookupKind::TypePorts,
            LookupKind::PartnerTypes,
            LookupKind::Zones,
        ] {
            store.lookups.insert(kind, seed::lookup_options(kind));
        }
        store
    }

    pub fn with_rows(mut self, kind: EntityKind, rows: Vec<Value>) -> Self {
        self.tables.insert(kind, rows);
        self
    }

    pub fn with_options(mut self, kind: LookupKind, options: Vec<LookupOption>) -> Self {
        self.lookups.insert(kind, options);
        self
    }

    fn table(&self, kind: EntityKind) -> &[Value] {
        self.tables.get(&kind).map(Vec::as_slice).unwrap_or_default()
    }

    fn position(&self, kind: EntityKind, id: &str) -> Option<usize> {
        let key_field = kind.key_field();
        self.table(kind)
            .iter()
            .position(|row| row.get(key_field).and_then(Value::as_str) == Some(id))
    }

    pub fn list(&self, kind: EntityKind, request: &ListRequest) -> Paginated<Value> {
        request.apply(self.table(kind))
    }

    pub fn detail(&self, kind: EntityKind, id: &str) -> Result<Value, DataSourceError> {
        self.position(kind, id)
            .map(|pos| self.table(kind)[pos].clone())
            .ok_or_else(|| DataSourceError::NotFound {
                kind,
                id: id.to_string(),
            })
    }

    pub fn options(&self, kind: LookupKind) -> Vec<LookupOption> {
        self.lookups.get(&kind).cloned().unwrap_or_default()
    }

    /// Insert (`id == None`) or merge an update into an existing record.
    ///
    /// Returns the record key.
    pub fn save(
        &mut self,
        kind: EntityKind,
        id: Option<&str>,
        payload: Value,
    ) -> Result<String, DataSourceError> {
        let Value::Object(fields) = payload else {
            return Err(DataSourceError::Encode(
                "payload must be a JSON object".into(),
            ));
        };
        let today = today_stamp();
        match id {
            Some(id) => {
                let pos = self.position(kind, id).ok_or_else(|| DataSourceError::NotFound {
                    kind,
                    id: id.to_string(),
                })?;
                let mut record = match self.table(kind)[pos].clone() {
                    Value::Object(map) => map,
                    _ => Map::new(),
                };
                for (name, value) in fields {
                    record.insert(name, value);
                }
                self.stamp_update(kind, &mut record, &today);
                self.derive_labels(kind, &mut record);
                if let Some(rows) = self.tables.get_mut(&kind) {
                    rows[pos] = Value::Object(record);
                }
                Ok(id.to_string())
            }
            None => {
                let mut record = fields;
                let key = self.next_key(kind);
                record.insert(kind.key_field().to_string(), Value::String(key.clone()));
                self.stamp_create(kind, &mut record, &today);
                self.derive_labels(kind, &mut record);
                log::debug!("mock: created {} `{}`", kind, key);
                self.tables
                    .entry(kind)
                    .or_default()
                    .insert(0, Value::Object(record));
                Ok(key)
            }
        }
    }

    /// Remove the records with the given keys, returning how many existed
    pub fn delete(&mut self, kind: EntityKind, ids: &[String]) -> usize {
        let key_field = kind.key_field();
        let Some(rows) = self.tables.get_mut(&kind) else {
            return 0;
        };
        let before = rows.len();
        rows.retain(|row| {
            let key = row.get(key_field).and_then(Value::as_str).unwrap_or_default();
            !ids.iter().any(|id| id == key)
        });
        before - rows.len()
    }

    fn next_key(&self, kind: EntityKind) -> String {
        match kind {
            // Partner keys are running numbers
            EntityKind::Partner => {
                let max = self
                    .table(kind)
                    .iter()
                    .filter_map(|row| row.get("key").and_then(Value::as_str))
                    .filter_map(|key| key.parse::<u64>().ok())
                    .max()
                    .unwrap_or(0);
                (max + 1).to_string()
            }
            EntityKind::Port | EntityKind::User => uuid::Uuid::new_v4().to_string(),
        }
    }

    fn stamp_create(&self, kind: EntityKind, record: &mut Map<String, Value>, today: &str) {
        let author = Value::String(self.author.clone());
        let today = Value::String(today.to_string());
        match kind {
            EntityKind::Partner => {
                record
                    .entry("status")
                    .or_insert_with(|| Value::String("Active".into()));
                record.insert("creator".into(), author.clone());
                record.insert("updater".into(), author);
                record.insert("dateCreated".into(), today.clone());
                record.insert("dateUpdate".into(), today);
            }
            EntityKind::Port => {
                record.entry("status").or_insert_with(|| Value::from(1));
                record.insert("insertedBy".into(), author);
                record.insert("insertedDate".into(), today);
            }
            EntityKind::User => {
                record.entry("status").or_insert_with(|| Value::from(1));
                record.insert("createdDate".into(), today.clone());
                record.insert("updatedDate".into(), today);
            }
        }
    }

    fn stamp_update(&self, kind: EntityKind, record: &mut Map<String, Value>, today: &str) {
        let today = Value::String(today.to_string());
        match kind {
            EntityKind::Partner => {
                record.insert("updater".into(), Value::String(self.author.clone()));
                record.insert("dateUpdate".into(), today);
            }
            EntityKind::User => {
                record.insert("updatedDate".into(), today);
            }
            EntityKind::Port => {}
        }
    }

    /// Keep display columns in sync with the ids a form submits
    fn derive_labels(&self, kind: EntityKind, record: &mut Map<String, Value>) {
        let countries = self.options(LookupKind::Countries);
        let country_id = record
            .get("countryID")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let country = label_for(&countries, &country_id).unwrap_or_default().to_string();
        match kind {
            EntityKind::Partner => {
                if !country_id.is_empty() {
                    record.insert("country".into(), Value::String(country));
                }
            }
            EntityKind::Port => {
                record.insert("countryName".into(), Value::String(country));
                let types = self.options(LookupKind::TypePorts);
                let names: Vec<String> = record
                    .get("typePorts")
                    .and_then(Value::as_array)
                    .map(|ids| {
                        ids.iter()
                            .filter_map(Value::as_str)
                            .map(|id| label_for(&types, id).unwrap_or(id).to_string())
                            .collect()
                    })
                    .unwrap_or_default();
                record.insert("typePortNames".into(), Value::String(names.join(", ")));
            }
            EntityKind::User => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_partner::PartnerRow;
    use contracts::domain::a002_port::{PortCreate, PortDetail, PortRow};
    use contracts::domain::common::RecordStatus;
    use contracts::shared::table::{ColumnFilterState, Pagination, SortSpec};
    use contracts::system::users::UserRow;

    fn request(page: usize, size: usize) -> ListRequest {
        ListRequest::new(Pagination::new(page, size), &ColumnFilterState::new(), None)
    }

    #[test]
    fn test_seed_rows_decode() {
        let store = MockStore::seeded();
        let partners = store.list(EntityKind::Partner, &request(1, 100));
        assert_eq!(partners.total, 46);
        for row in partners.data {
            serde_json::from_value::<PartnerRow>(row).unwrap();
        }
        for row in store.list(EntityKind::Port, &request(1, 100)).data {
            serde_json::from_value::<PortRow>(row.clone()).unwrap();
            serde_json::from_value::<PortDetail>(row).unwrap();
        }
        for row in store.list(EntityKind::User, &request(1, 100)).data {
            serde_json::from_value::<UserRow>(row).unwrap();
        }
    }

    #[test]
    fn test_list_pages_partners() {
        let store = MockStore::seeded();
        let page = store.list(EntityKind::Partner, &request(5, 10));
        assert_eq!(page.total_pages, 5);
        assert_eq!(page.data.len(), 6);
        assert_eq!(page.current_page, 5);
    }

    #[test]
    fn test_list_filters_and_sorts() {
        let store = MockStore::seeded();
        let mut filter = ColumnFilterState::new();
        filter.confirm("countryName", "việt");
        let sort = SortSpec {
            field: "portCode".into(),
            ascending: false,
        };
        let req = ListRequest::new(Pagination::new(1, 50), &filter, Some(sort));
        let page = store.list(EntityKind::Port, &req);
        assert_eq!(page.total, 6);
        assert_eq!(page.data[0]["portCode"], "VNSTG");
    }

    #[test]
    fn test_create_port_derives_labels() {
        let mut store = MockStore::seeded();
        let payload = PortCreate {
            port_code: "VNQNH".into(),
            port_name: "Quy Nhơn".into(),
            type_ports: vec!["sea".into(), "river".into()],
            country_id: "VN".into(),
            address: "Bình Định".into(),
            company: "Cảng Quy Nhơn".into(),
        };
        let id = store
            .save(EntityKind::Port, None, serde_json::to_value(&payload).unwrap())
            .unwrap();

        let detail: PortDetail =
            serde_json::from_value(store.detail(EntityKind::Port, &id).unwrap()).unwrap();
        assert_eq!(detail.country_name, "Việt Nam");
        assert_eq!(detail.status, RecordStatus::Active);
        assert_eq!(detail.inserted_by, seed::SEED_AUTHOR);

        let row: PortRow =
            serde_json::from_value(store.detail(EntityKind::Port, &id).unwrap()).unwrap();
        assert_eq!(row.type_port_names, "Cảng biển, Cảng sông");
    }

    #[test]
    fn test_update_merges_into_existing_record() {
        let mut store = MockStore::seeded();
        let patch = serde_json::json!({"partnerName": "Đông Á Mới", "countryID": "SG"});
        store.save(EntityKind::Partner, Some("3"), patch).unwrap();

        let row: PartnerRow =
            serde_json::from_value(store.detail(EntityKind::Partner, "3").unwrap()).unwrap();
        assert_eq!(row.partner_name, "Đông Á Mới");
        assert_eq!(row.country, "Singapore");
        assert_eq!(row.partner_code, "ASLS152");
    }

    #[test]
    fn test_update_unknown_record_fails() {
        let mut store = MockStore::seeded();
        let result = store.save(EntityKind::Port, Some("nope"), serde_json::json!({}));
        assert!(matches!(result, Err(DataSourceError::NotFound { .. })));
    }

    #[test]
    fn test_new_partner_key_follows_max() {
        let mut store = MockStore::seeded();
        let key = store
            .save(
                EntityKind::Partner,
                None,
                serde_json::json!({"partnerCode": "NEW1", "partnerName": "N", "typeOfPartner": "Customer"}),
            )
            .unwrap();
        assert_eq!(key, "47");
        let first = store.list(EntityKind::Partner, &request(1, 1));
        assert_eq!(first.data[0]["key"], "47");
        assert_eq!(first.data[0]["status"], "Active");
    }

    #[test]
    fn test_delete_counts_existing_only() {
        let mut store = MockStore::seeded();
        let removed = store.delete(EntityKind::Partner, &["1".into(), "2".into(), "999".into()]);
        assert_eq!(removed, 2);
        assert_eq!(store.list(EntityKind::Partner, &request(1, 10)).total, 44);
        assert!(store.detail(EntityKind::Partner, "1").is_err());
    }
}
