/// Utilities for date formatting
///
/// Экраны показывают даты как DD/MM/YYYY; remote-источник может отдавать ISO.

pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

/// Format ISO datetime string to DD/MM/YYYY HH:MM:SS format
/// Example: "2024-03-15T14:02:26.123Z" -> "15/03/2024 14:02:26"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        if let Some(date) = split_iso_date(date_part) {
            let time = time_part
                .trim_end_matches('Z')
                .split('.')
                .next()
                .unwrap_or(time_part);
            return format!("{} {}", date, time);
        }
    }
    datetime_str.to_string()
}

/// Format ISO date string to DD/MM/YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15/03/2024".
/// Values already in display form pass through.
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    split_iso_date(date_part).unwrap_or_else(|| date_str.to_string())
}

fn split_iso_date(date_part: &str) -> Option<String> {
    let (year, rest) = date_part.split_once('-')?;
    let (month, day) = rest.split_once('-')?;
    if year.len() != 4 {
        return None;
    }
    Some(format!("{}/{}/{}", day, month, year))
}

/// Today's date in display form, for created/updated stamps
pub fn today_stamp() -> String {
    chrono::Local::now().format(DISPLAY_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2024-03-15T14:02:26.123Z"),
            "15/03/2024 14:02:26"
        );
        assert_eq!(
            format_datetime("2024-12-31T23:59:59Z"),
            "31/12/2024 23:59:59"
        );
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15/03/2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15/03/2024");
        assert_eq!(format_date("14/06/2023"), "14/06/2023");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn test_today_stamp_parses_back() {
        let stamp = today_stamp();
        assert!(chrono::NaiveDate::parse_from_str(&stamp, DISPLAY_DATE_FORMAT).is_ok());
    }
}
