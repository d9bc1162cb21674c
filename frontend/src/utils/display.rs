use chrono::{DateTime, NaiveDate, Utc};

pub const PLACEHOLDER: &str = "---";

/// The single rendering rule for optional fields: absent or blank text shows
/// as `---`.
pub fn display_or_placeholder<T: ToString>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .filter(|text| !text.trim().is_empty())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

pub fn display_date(date: Option<NaiveDate>) -> String {
    display_or_placeholder(date.map(super::time::format_date))
}

pub fn display_date_time(at: Option<DateTime<Utc>>) -> String {
    display_or_placeholder(at.map(super::time::format_date_time))
}

/// Day counts drop a trailing `.0`: `2`, `1.5`.
pub fn display_days(days: Option<f64>) -> String {
    display_or_placeholder(days.map(|d| {
        if d.fract() == 0.0 {
            format!("{}", d as i64)
        } else {
            format!("{}", d)
        }
    }))
}

pub fn display_amount(amount: Option<f64>) -> String {
    display_or_placeholder(amount.map(|a| format!("{:.2}", a)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_and_blank_values_use_placeholder() {
        assert_eq!(display_or_placeholder(None::<&str>), "---");
        assert_eq!(display_or_placeholder(Some("  ")), "---");
        assert_eq!(display_or_placeholder(Some("Jane")), "Jane");
        assert_eq!(display_or_placeholder(Some(3)), "3");
    }

    #[test]
    fn optional_dates_and_numbers() {
        assert_eq!(display_date(None), "---");
        assert_eq!(
            display_date(NaiveDate::from_ymd_opt(2025, 2, 3)),
            "03 Feb 2025"
        );
        assert_eq!(display_days(Some(2.0)), "2");
        assert_eq!(display_days(Some(1.5)), "1.5");
        assert_eq!(display_amount(Some(1000.5)), "1000.50");
        assert_eq!(display_amount(None), "---");
    }
}
