use crate::api::AttendanceRecord;
use crate::components::forms::{format_date_input, parse_date_input};
use crate::listing::Filterable;
use crate::utils::display::display_or_placeholder;
use crate::utils::time::format_minutes;
use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use leptos::*;

pub const STATUS_OPTIONS: [&str; 5] = ["Present", "Absent", "Half Day", "Leave", "Holiday"];

impl Filterable for AttendanceRecord {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![self.employee_name.as_deref()]
    }

    fn status_value(&self) -> Option<&str> {
        self.status.as_deref()
    }

    fn sort_key(&self) -> Option<NaiveDateTime> {
        self.attendance_date.and_then(|date| date.and_hms_opt(0, 0, 0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayType {
    Weekday,
    Weekend,
    Holiday,
}

impl DayType {
    pub fn label(&self) -> &'static str {
        match self {
            DayType::Weekday => "Weekday",
            DayType::Weekend => "Weekend",
            DayType::Holiday => "Holiday",
        }
    }
}

/// A holiday status wins over the calendar; otherwise Saturday and Sunday
/// are weekend days.
pub fn day_type(record: &AttendanceRecord) -> Option<DayType> {
    if record
        .status
        .as_deref()
        .is_some_and(|status| status.to_lowercase().contains("holiday"))
    {
        return Some(DayType::Holiday);
    }
    record.attendance_date.map(|date| match date.weekday() {
        Weekday::Sat | Weekday::Sun => DayType::Weekend,
        _ => DayType::Weekday,
    })
}

pub fn display_hours(record: &AttendanceRecord) -> String {
    display_or_placeholder(record.duration.filter(|m| *m >= 0).map(format_minutes))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PunchDirection {
    In,
    Out,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PunchEntry {
    pub time: NaiveTime,
    pub direction: Option<PunchDirection>,
}

impl PunchEntry {
    pub fn label(&self) -> String {
        let time = self.time.format("%H:%M");
        match self.direction {
            Some(PunchDirection::In) => format!("{} in", time),
            Some(PunchDirection::Out) => format!("{} out", time),
            None => time.to_string(),
        }
    }
}

fn parse_punch(token: &str) -> Option<PunchEntry> {
    let lower = token.trim().to_lowercase();
    let lower = lower.trim_end_matches(')');
    let (time_part, direction) = if let Some(rest) = lower.strip_suffix("out") {
        (rest, Some(PunchDirection::Out))
    } else if let Some(rest) = lower.strip_suffix("in") {
        (rest, Some(PunchDirection::In))
    } else {
        (lower, None)
    };
    let time_part = time_part
        .trim_end_matches(|c: char| c == ':' || c == '(' || c.is_whitespace())
        .trim();
    let time = NaiveTime::parse_from_str(time_part, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(time_part, "%H:%M"))
        .ok()?;
    Some(PunchEntry { time, direction })
}

/// Splits the server's delimited punch string (`"09:02:in,13:00:out"`).
/// Unreadable entries are skipped.
pub fn parse_punch_records(raw: Option<&str>) -> Vec<PunchEntry> {
    raw.unwrap_or_default()
        .split([',', ';', '|'])
        .filter(|token| !token.trim().is_empty())
        .filter_map(|token| {
            let entry = parse_punch(token);
            if entry.is_none() {
                log::debug!("skipping unreadable punch entry {:?}", token);
            }
            entry
        })
        .collect()
}

pub fn month_bounds(today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(today.year(), today.month(), 1)?;
    let next_month = first.checked_add_months(Months::new(1))?;
    let last = next_month.checked_sub_signed(Duration::days(1))?;
    Some((first, last))
}

/// Date range inputs of the history filter.
#[derive(Clone, Copy)]
pub struct RangeFormState {
    from: RwSignal<String>,
    to: RwSignal<String>,
}

impl RangeFormState {
    pub fn new() -> Self {
        Self {
            from: create_rw_signal(String::new()),
            to: create_rw_signal(String::new()),
        }
    }

    pub fn from_signal(&self) -> RwSignal<String> {
        self.from
    }

    pub fn to_signal(&self) -> RwSignal<String> {
        self.to
    }

    pub fn set_range(&self, from: NaiveDate, to: NaiveDate) {
        self.from.set(format_date_input(from));
        self.to.set(format_date_input(to));
    }

    pub fn to_range(&self) -> Result<(Option<NaiveDate>, Option<NaiveDate>), String> {
        let from = parse_date_input(&self.from.get_untracked(), "From date")?;
        let to = parse_date_input(&self.to.get_untracked(), "To date")?;
        if let (Some(f), Some(t)) = (from, to) {
            if f > t {
                return Err("From date must be on or before the To date.".into());
            }
        }
        Ok((from, to))
    }
}

impl Default for RangeFormState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: Option<NaiveDate>, status: Option<&str>) -> AttendanceRecord {
        AttendanceRecord {
            attendance_date: date,
            status: status.map(str::to_string),
            ..AttendanceRecord::default()
        }
    }

    #[test]
    fn day_type_prefers_holiday_status() {
        let saturday = NaiveDate::from_ymd_opt(2025, 1, 4);
        let monday = NaiveDate::from_ymd_opt(2025, 1, 6);
        assert_eq!(day_type(&record(saturday, Some("Absent"))), Some(DayType::Weekend));
        assert_eq!(day_type(&record(monday, Some("Present"))), Some(DayType::Weekday));
        assert_eq!(
            day_type(&record(monday, Some("Public Holiday"))),
            Some(DayType::Holiday)
        );
        assert_eq!(day_type(&record(None, None)), None);
    }

    #[test]
    fn hours_use_padded_minutes() {
        let mut row = AttendanceRecord::default();
        assert_eq!(display_hours(&row), "---");
        row.duration = Some(548);
        assert_eq!(display_hours(&row), "9:08");
    }

    #[test]
    fn punch_records_accept_common_shapes() {
        let entries = parse_punch_records(Some("09:02:in, 13:00:15:out;14:01 (in)|garbage|18:30"));
        let labels: Vec<_> = entries.iter().map(PunchEntry::label).collect();
        assert_eq!(labels, vec!["09:02 in", "13:00 out", "14:01 in", "18:30"]);
        assert!(parse_punch_records(None).is_empty());
    }

    #[test]
    fn month_bounds_cover_whole_month() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 15).unwrap();
        let (first, last) = month_bounds(today).unwrap();
        assert_eq!(first, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(last, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }
}
