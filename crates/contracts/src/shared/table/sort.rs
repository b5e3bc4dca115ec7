use crate::domain::common::FieldLookup;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    pub ascending: bool,
}

impl SortSpec {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ascending: true,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ascending: false,
        }
    }

    /// Click on a header: flip direction on the same field, ascending on a new one
    pub fn toggled(current: Option<&SortSpec>, field: &str) -> SortSpec {
        match current {
            Some(spec) if spec.field == field => SortSpec {
                field: field.to_string(),
                ascending: !spec.ascending,
            },
            _ => SortSpec::asc(field),
        }
    }
}

/// `dd/mm/yyyy` as (year, month, day)
fn parse_display_date(value: &str) -> Option<(u32, u32, u32)> {
    let mut parts = value.trim().splitn(3, '/');
    let day = parts.next()?.parse().ok()?;
    let month = parts.next()?.parse().ok()?;
    let year = parts.next()?.parse().ok()?;
    Some((year, month, day))
}

/// Ключ сортировки ячейки; варианты упорядочены: числа < даты < текст
#[derive(Debug)]
enum SortKey {
    Number(f64),
    Date((u32, u32, u32)),
    Text(String),
}

impl SortKey {
    fn of(value: &str) -> Self {
        if let Ok(number) = value.trim().parse::<f64>() {
            return SortKey::Number(number);
        }
        if let Some(date) = parse_display_date(value) {
            return SortKey::Date(date);
        }
        SortKey::Text(value.to_lowercase())
    }

    fn rank(&self) -> u8 {
        match self {
            SortKey::Number(_) => 0,
            SortKey::Date(_) => 1,
            SortKey::Text(_) => 2,
        }
    }

    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Number(x), SortKey::Number(y)) => x.total_cmp(y),
            (SortKey::Date(x), SortKey::Date(y)) => x.cmp(y),
            (SortKey::Text(x), SortKey::Text(y)) => x.cmp(y),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// Numbers compare numerically, `dd/mm/yyyy` dates chronologically,
/// everything else case-insensitively; mixed kinds go numbers, dates, text
pub fn compare_field_values(a: &str, b: &str) -> Ordering {
    SortKey::of(a).compare(&SortKey::of(b))
}

/// Stable sort by one field
pub fn sort_rows<R: FieldLookup>(rows: &mut [R], spec: &SortSpec) {
    rows.sort_by(|a, b| {
        let left = a.field_text(&spec.field).unwrap_or_default();
        let right = b.field_text(&spec.field).unwrap_or_default();
        let cmp = compare_field_values(&left, &right);
        if spec.ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}
