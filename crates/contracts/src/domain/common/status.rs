use crate::shared::table::ValueFilterOption;
use serde::{Deserialize, Serialize};

/// Визуальный тег статуса: ключ перевода (namespace `common`) и цвет
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusTag {
    pub label_key: &'static str,
    pub color: &'static str,
}

pub const COLOR_ACTIVE: &str = "#00A651";
pub const COLOR_DEACTIVATE: &str = "#ED1C27";
pub const COLOR_BLOCK: &str = "#8C8C8C";

/// Numeric status shared by ports and users: 1 Active, 2 Deactivate, 3 Block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum RecordStatus {
    Active,
    Deactivate,
    Block,
}

impl RecordStatus {
    pub const ALL: [RecordStatus; 3] = [
        RecordStatus::Active,
        RecordStatus::Deactivate,
        RecordStatus::Block,
    ];

    pub fn code(&self) -> i32 {
        match self {
            RecordStatus::Active => 1,
            RecordStatus::Deactivate => 2,
            RecordStatus::Block => 3,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(RecordStatus::Active),
            2 => Some(RecordStatus::Deactivate),
            3 => Some(RecordStatus::Block),
            _ => None,
        }
    }

    pub fn tag(&self) -> StatusTag {
        match self {
            RecordStatus::Active => StatusTag {
                label_key: "status_active",
                color: COLOR_ACTIVE,
            },
            RecordStatus::Deactivate => StatusTag {
                label_key: "status_deactivate",
                color: COLOR_DEACTIVATE,
            },
            RecordStatus::Block => StatusTag {
                label_key: "status_block",
                color: COLOR_BLOCK,
            },
        }
    }
}

impl TryFrom<i32> for RecordStatus {
    type Error = String;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        RecordStatus::from_code(code).ok_or_else(|| format!("Unknown status code: {}", code))
    }
}

impl From<RecordStatus> for i32 {
    fn from(status: RecordStatus) -> Self {
        status.code()
    }
}

/// Which status vocabulary a status column renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// "Active" / "DeActive" strings
    Partner,
    /// 1 / 2 / 3 codes
    Record,
}

const PARTNER_STATUS_FILTERS: &[ValueFilterOption] = &[
    ValueFilterOption {
        value: "Active",
        label_key: "status_active",
    },
    ValueFilterOption {
        value: "DeActive",
        label_key: "status_deactive",
    },
];

const RECORD_STATUS_FILTERS: &[ValueFilterOption] = &[
    ValueFilterOption {
        value: "1",
        label_key: "status_active",
    },
    ValueFilterOption {
        value: "2",
        label_key: "status_deactivate",
    },
    ValueFilterOption {
        value: "3",
        label_key: "status_block",
    },
];

impl StatusKind {
    /// Tag for the raw cell value, `None` for values outside the vocabulary
    pub fn tag(&self, raw: &str) -> Option<StatusTag> {
        match self {
            StatusKind::Partner => match raw {
                "Active" => Some(StatusTag {
                    label_key: "status_active",
                    color: COLOR_ACTIVE,
                }),
                "DeActive" => Some(StatusTag {
                    label_key: "status_deactive",
                    color: COLOR_DEACTIVATE,
                }),
                _ => None,
            },
            StatusKind::Record => raw
                .trim()
                .parse::<i32>()
                .ok()
                .and_then(RecordStatus::from_code)
                .map(|s| s.tag()),
        }
    }

    pub fn filter_options(&self) -> &'static [ValueFilterOption] {
        match self {
            StatusKind::Partner => PARTNER_STATUS_FILTERS,
            StatusKind::Record => RECORD_STATUS_FILTERS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_status_codes_round_trip() {
        for status in RecordStatus::ALL {
            assert_eq!(RecordStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(RecordStatus::from_code(7), None);
    }

    #[test]
    fn test_record_status_serde_as_number() {
        let json = serde_json::to_string(&RecordStatus::Block).unwrap();
        assert_eq!(json, "3");
        assert!(serde_json::from_str::<RecordStatus>("9").is_err());
    }

    #[test]
    fn test_status_tags() {
        assert_eq!(
            StatusKind::Partner.tag("DeActive").map(|t| t.label_key),
            Some("status_deactive")
        );
        assert_eq!(StatusKind::Record.tag("1").map(|t| t.color), Some(COLOR_ACTIVE));
        assert_eq!(StatusKind::Record.tag("abc"), None);
    }
}
