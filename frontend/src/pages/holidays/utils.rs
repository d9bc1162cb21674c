use crate::api::Holiday;
use crate::listing::Filterable;
use chrono::{Datelike, NaiveDate, NaiveDateTime};

impl Filterable for Holiday {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            self.name.as_deref(),
            self.holiday_type.as_deref(),
            self.description.as_deref(),
        ]
    }

    fn type_value(&self) -> Option<&str> {
        self.holiday_type.as_deref()
    }

    fn sort_key(&self) -> Option<NaiveDateTime> {
        self.date.and_then(|date| date.and_hms_opt(0, 0, 0))
    }
}

/// "Mon", "Tue", ... for the holiday's date.
pub fn weekday_label(date: Option<NaiveDate>) -> Option<String> {
    date.map(|d| d.weekday().to_string())
}

pub fn is_upcoming(holiday: &Holiday, today: NaiveDate) -> bool {
    holiday.date.is_some_and(|date| date >= today)
}

/// Distinct holiday types in first-seen order, for the type filter.
pub fn holiday_types(holidays: &[Holiday]) -> Vec<String> {
    let mut types: Vec<String> = Vec::new();
    for kind in holidays.iter().filter_map(|h| h.holiday_type.as_deref()) {
        if !types.iter().any(|seen| seen == kind) {
            types.push(kind.to_string());
        }
    }
    types
}
