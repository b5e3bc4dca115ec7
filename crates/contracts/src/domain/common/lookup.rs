use serde::{Deserialize, Serialize};

/// Справочники для полей выбора
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LookupKind {
    Countries,
    TypePorts,
    PartnerTypes,
    Zones,
}

impl LookupKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupKind::Countries => "countries",
            LookupKind::TypePorts => "typePorts",
            LookupKind::PartnerTypes => "partnerTypes",
            LookupKind::Zones => "zones",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LookupOption {
    pub value: String,
    pub label: String,
}

impl LookupOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Options whose label contains `input` (case-insensitive), for searchable selects
pub fn filter_options(options: &[LookupOption], input: &str) -> Vec<LookupOption> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return options.to_vec();
    }
    options
        .iter()
        .filter(|o| o.label.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Label for `value`, if the option list has it
pub fn label_for<'a>(options: &'a [LookupOption], value: &str) -> Option<&'a str> {
    options
        .iter()
        .find(|o| o.value == value)
        .map(|o| o.label.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn countries() -> Vec<LookupOption> {
        vec![
            LookupOption::new("VN", "Việt Nam"),
            LookupOption::new("SG", "Singapore"),
            LookupOption::new("JP", "Japan"),
        ]
    }

    #[test]
    fn test_filter_options_by_label() {
        let found = filter_options(&countries(), "PORE");
        assert_eq!(found, vec![LookupOption::new("SG", "Singapore")]);
    }

    #[test]
    fn test_filter_options_empty_input_keeps_all() {
        assert_eq!(filter_options(&countries(), "  ").len(), 3);
    }

    #[test]
    fn test_label_for() {
        assert_eq!(label_for(&countries(), "JP"), Some("Japan"));
        assert_eq!(label_for(&countries(), "XX"), None);
    }
}
