//! Due-date display helpers.
//!
//! Due dates are stored exactly as typed; these helpers parse them
//! opportunistically so the UI can show relative labels, falling back to the
//! raw string when the value is not an ISO date.

use chrono::NaiveDate;

/// Parse an ISO `YYYY-MM-DD` date, ignoring surrounding whitespace.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Format a stored due-date string relative to today.
///
/// Parsable dates become "today", "tomorrow", "in 3d" or "2d late";
/// unparsable non-empty strings are shown verbatim; empty means no due date.
pub fn format_due_relative(due: &str, today: NaiveDate) -> String {
    if due.trim().is_empty() {
        return "-".into();
    }
    match parse_date(due) {
        None => due.trim().to_string(),
        Some(d) => {
            let days = (d - today).num_days();
            if days == 0 {
                "today".into()
            } else if days == 1 {
                "tomorrow".into()
            } else if days > 1 {
                format!("in {}d", days)
            } else {
                format!("{}d late", -days)
            }
        }
    }
}

/// Whether a stored due-date string is a parsable date earlier than today.
pub fn is_overdue(due: &str, today: NaiveDate) -> bool {
    parse_date(due).is_some_and(|d| d < today)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_date_accepts_iso_only() {
        assert_eq!(parse_date("2024-05-01"), Some(day(2024, 5, 1)));
        assert_eq!(parse_date(" 2024-05-01 "), Some(day(2024, 5, 1)));
        assert_eq!(parse_date("05/01/2024"), None);
        assert_eq!(parse_date("next tuesday"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_relative_formatting() {
        let today = day(2024, 5, 1);
        assert_eq!(format_due_relative("2024-05-01", today), "today");
        assert_eq!(format_due_relative("2024-05-02", today), "tomorrow");
        assert_eq!(format_due_relative("2024-05-04", today), "in 3d");
        assert_eq!(format_due_relative("2024-04-29", today), "2d late");
    }

    #[test]
    fn test_unparsable_input_falls_back_to_raw_string() {
        let today = day(2024, 5, 1);
        assert_eq!(format_due_relative("sometime soon", today), "sometime soon");
        assert_eq!(format_due_relative("", today), "-");
        assert_eq!(format_due_relative("   ", today), "-");
    }

    #[test]
    fn test_is_overdue() {
        let today = day(2024, 5, 1);
        assert!(is_overdue("2024-04-30", today));
        assert!(!is_overdue("2024-05-01", today));
        assert!(!is_overdue("not a date", today));
        assert!(!is_overdue("", today));
    }
}
