use crate::api::AttendanceRecord;
use crate::pages::attendance::utils::{day_type, display_hours, parse_punch_records, PunchEntry};
use crate::utils::display::{display_date, display_or_placeholder, PLACEHOLDER};
use leptos::*;

const HEADERS: [&str; 8] = ["Date", "Employee", "Day", "In", "Out", "Hours", "Status", "Punches"];

pub fn header_count() -> usize {
    HEADERS.len()
}

fn punch_summary(record: &AttendanceRecord) -> String {
    let entries = parse_punch_records(record.punch_records.as_deref());
    if entries.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        entries.iter().map(PunchEntry::label).collect::<Vec<_>>().join(", ")
    }
}

#[component]
pub fn HistoryTable(rows: Signal<Vec<AttendanceRecord>>) -> impl IntoView {
    view! {
        <thead class="bg-surface-muted">
            <tr>
                {HEADERS
                    .iter()
                    .map(|header| view! {
                        <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">{*header}</th>
                    })
                    .collect_view()}
            </tr>
        </thead>
        <tbody class="divide-y divide-border">
            {move || {
                rows.get()
                    .into_iter()
                    .map(|row| {
                        let cells = [
                            display_date(row.attendance_date),
                            display_or_placeholder(row.employee_name.as_deref()),
                            display_or_placeholder(day_type(&row).map(|day| day.label())),
                            display_or_placeholder(row.in_time.as_deref()),
                            display_or_placeholder(row.out_time.as_deref()),
                            display_hours(&row),
                            display_or_placeholder(row.status.as_deref()),
                            punch_summary(&row),
                        ];
                        view! {
                            <tr>
                                {cells
                                    .into_iter()
                                    .map(|cell| view! { <td class="px-4 py-3 text-sm text-fg">{cell}</td> })
                                    .collect_view()}
                            </tr>
                        }
                    })
                    .collect_view()
            }}
        </tbody>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use chrono::NaiveDate;

    #[test]
    fn history_row_shows_derived_columns() {
        let html = render_to_string(move || {
            let rows = create_rw_signal(vec![AttendanceRecord {
                employee_name: Some("Asha".into()),
                attendance_date: NaiveDate::from_ymd_opt(2025, 1, 4),
                duration: Some(548),
                punch_records: Some("09:02:in,18:10:out".into()),
                ..AttendanceRecord::default()
            }]);
            view! { <table><HistoryTable rows=rows.into() /></table> }
        });
        assert!(html.contains("04 Jan 2025"));
        assert!(html.contains("Weekend"));
        assert!(html.contains("9:08"));
        assert!(html.contains("09:02 in, 18:10 out"));
        assert!(html.contains("---"));
    }
}
