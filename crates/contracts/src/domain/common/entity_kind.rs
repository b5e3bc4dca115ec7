use serde::{Deserialize, Serialize};

/// Сущности, которые показывают экраны списков и форм
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Partner,
    Port,
    User,
}

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [EntityKind::Partner, EntityKind::Port, EntityKind::User];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Partner => "partner",
            EntityKind::Port => "port",
            EntityKind::User => "user",
        }
    }

    /// Translation namespace holding the screen's labels
    pub fn namespace(&self) -> &'static str {
        self.as_str()
    }

    /// Name of the key field in the row record
    pub fn key_field(&self) -> &'static str {
        match self {
            EntityKind::Partner => "key",
            EntityKind::Port => "portID",
            EntityKind::User => "userID",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
