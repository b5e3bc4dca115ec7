//! Маршруты приложения
//!
//! Каждый маршрут открывается отдельным табом; ключ таба и есть маршрут
//! (`?active=<key>` в адресной строке).

use contracts::domain::common::EntityKind;

const PARTNER_EDIT_PREFIX: &str = "partner_edit_";
const PORT_EDIT_PREFIX: &str = "port_edit_";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    PartnerList,
    PartnerCreate,
    PartnerEdit(String),
    PortList,
    PortCreate,
    PortEdit(String),
    Users,
}

impl AppRoute {
    /// Tab key of the route
    pub fn key(&self) -> String {
        match self {
            AppRoute::PartnerList => "partner".to_string(),
            AppRoute::PartnerCreate => "partner_create".to_string(),
            AppRoute::PartnerEdit(id) => format!("{}{}", PARTNER_EDIT_PREFIX, id),
            AppRoute::PortList => "port".to_string(),
            AppRoute::PortCreate => "port_create".to_string(),
            AppRoute::PortEdit(id) => format!("{}{}", PORT_EDIT_PREFIX, id),
            AppRoute::Users => "sys_users".to_string(),
        }
    }

    pub fn parse(key: &str) -> Option<AppRoute> {
        let route = match key {
            "partner" => AppRoute::PartnerList,
            "partner_create" => AppRoute::PartnerCreate,
            "port" => AppRoute::PortList,
            "port_create" => AppRoute::PortCreate,
            "sys_users" => AppRoute::Users,
            k => {
                if let Some(id) = k.strip_prefix(PARTNER_EDIT_PREFIX) {
                    AppRoute::PartnerEdit(non_empty(id)?)
                } else if let Some(id) = k.strip_prefix(PORT_EDIT_PREFIX) {
                    AppRoute::PortEdit(non_empty(id)?)
                } else {
                    return None;
                }
            }
        };
        Some(route)
    }

    /// Edit route for a record of `kind`; users have no form
    pub fn edit(kind: EntityKind, id: &str) -> Option<AppRoute> {
        match kind {
            EntityKind::Partner => Some(AppRoute::PartnerEdit(id.to_string())),
            EntityKind::Port => Some(AppRoute::PortEdit(id.to_string())),
            EntityKind::User => None,
        }
    }

    pub fn create(kind: EntityKind) -> Option<AppRoute> {
        match kind {
            EntityKind::Partner => Some(AppRoute::PartnerCreate),
            EntityKind::Port => Some(AppRoute::PortCreate),
            EntityKind::User => None,
        }
    }

    pub fn list(kind: EntityKind) -> AppRoute {
        match kind {
            EntityKind::Partner => AppRoute::PartnerList,
            EntityKind::Port => AppRoute::PortList,
            EntityKind::User => AppRoute::Users,
        }
    }

    /// Translation key (namespace `menu`) of the tab title, and its `{id}` argument
    pub fn label_key(&self) -> (&'static str, Option<&str>) {
        match self {
            AppRoute::PartnerList => ("partner", None),
            AppRoute::PartnerCreate => ("partner_create", None),
            AppRoute::PartnerEdit(id) => ("partner_edit", Some(id)),
            AppRoute::PortList => ("port", None),
            AppRoute::PortCreate => ("port_create", None),
            AppRoute::PortEdit(id) => ("port_edit", Some(id)),
            AppRoute::Users => ("sys_users", None),
        }
    }
}

fn non_empty(id: &str) -> Option<String> {
    if id.is_empty() {
        None
    } else {
        Some(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_round_trip() {
        let routes = [
            AppRoute::PartnerList,
            AppRoute::PartnerCreate,
            AppRoute::PartnerEdit("12".into()),
            AppRoute::PortList,
            AppRoute::PortCreate,
            AppRoute::PortEdit("port-003".into()),
            AppRoute::Users,
        ];
        for route in routes {
            assert_eq!(AppRoute::parse(&route.key()), Some(route));
        }
    }

    #[test]
    fn test_parse_rejects_unknown_and_empty_ids() {
        assert_eq!(AppRoute::parse("a001_connection_1c"), None);
        assert_eq!(AppRoute::parse("partner_edit_"), None);
        assert_eq!(AppRoute::parse(""), None);
    }

    #[test]
    fn test_entity_routes() {
        assert_eq!(
            AppRoute::edit(EntityKind::Port, "p1"),
            Some(AppRoute::PortEdit("p1".into()))
        );
        assert_eq!(AppRoute::edit(EntityKind::User, "u1"), None);
        assert_eq!(AppRoute::list(EntityKind::User), AppRoute::Users);
        assert_eq!(AppRoute::create(EntityKind::Partner), Some(AppRoute::PartnerCreate));
    }
}
