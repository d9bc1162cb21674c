use crate::api::PayrollRow;
use crate::listing::Filterable;
use chrono::Month;
use leptos::*;

impl Filterable for PayrollRow {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![self.employee_name.as_deref(), self.employee_id.as_deref()]
    }

    fn status_value(&self) -> Option<&str> {
        self.status.as_deref()
    }
}

pub const DEFAULT_PAGE_LIMIT: usize = 10;

pub fn period_label(row: &PayrollRow) -> Option<String> {
    let month = row
        .month
        .and_then(|m| u8::try_from(m).ok())
        .and_then(|m| Month::try_from(m).ok())?;
    Some(match row.year {
        Some(year) => format!("{} {}", month.name(), year),
        None => month.name().to_string(),
    })
}

/// Payslip URL when the server gave a usable one.
pub fn payslip_link(row: &PayrollRow) -> Option<String> {
    row.payslip_url
        .as_deref()
        .map(str::trim)
        .filter(|url| url.starts_with("http://") || url.starts_with("https://") || url.starts_with('/'))
        .map(str::to_string)
}

#[derive(Clone, Copy)]
pub struct PeriodFormState {
    month: RwSignal<String>,
    year: RwSignal<String>,
}

impl Default for PeriodFormState {
    fn default() -> Self {
        Self {
            month: create_rw_signal(String::new()),
            year: create_rw_signal(String::new()),
        }
    }
}

impl PeriodFormState {
    pub fn month_signal(&self) -> RwSignal<String> {
        self.month
    }

    pub fn year_signal(&self) -> RwSignal<String> {
        self.year
    }

    /// Both blank means every period. A month needs a year.
    pub fn to_period(&self) -> Result<(Option<u32>, Option<i32>), String> {
        let month = self.month.get_untracked();
        let year = self.year.get_untracked();
        let month = match month.trim() {
            "" => None,
            raw => match raw.parse::<u32>() {
                Ok(m) if (1..=12).contains(&m) => Some(m),
                _ => return Err("Month must be between 1 and 12.".into()),
            },
        };
        let year = match year.trim() {
            "" => None,
            raw => match raw.parse::<i32>() {
                Ok(y) if (2000..=2100).contains(&y) => Some(y),
                _ => return Err("Year must be a four-digit year.".into()),
            },
        };
        if month.is_some() && year.is_none() {
            return Err("Pick a year for the selected month.".into());
        }
        Ok((month, year))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_label_uses_month_name() {
        let row = PayrollRow {
            month: Some(3),
            year: Some(2025),
            ..PayrollRow::default()
        };
        assert_eq!(period_label(&row).as_deref(), Some("March 2025"));
        let bad = PayrollRow {
            month: Some(13),
            ..PayrollRow::default()
        };
        assert_eq!(period_label(&bad), None);
    }

    #[test]
    fn payslip_link_requires_url() {
        let mut row = PayrollRow::default();
        assert_eq!(payslip_link(&row), None);
        row.payslip_url = Some("  ".into());
        assert_eq!(payslip_link(&row), None);
        row.payslip_url = Some("https://files.example/p/1.pdf".into());
        assert_eq!(payslip_link(&row).as_deref(), Some("https://files.example/p/1.pdf"));
    }
}
