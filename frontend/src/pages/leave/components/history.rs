use crate::api::ApprovalRequest;
use crate::pages::approvals::utils::status_badge_class;
use crate::utils::display::{display_date, display_days, display_or_placeholder};
use leptos::*;

pub const HEADERS: [&str; 6] = ["Type", "From", "To", "Days", "Reason", "Status"];

#[component]
pub fn MyLeavesTable(rows: Signal<Vec<ApprovalRequest>>) -> impl IntoView {
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
                        let badge = status_badge_class(row.request_status());
                        view! {
                            <tr>
                                <td class="px-4 py-3 text-sm">{display_or_placeholder(row.leave_type.as_deref())}</td>
                                <td class="px-4 py-3 text-sm">{display_date(row.leave_start_date)}</td>
                                <td class="px-4 py-3 text-sm">{display_date(row.leave_end_date)}</td>
                                <td class="px-4 py-3 text-sm">{display_days(row.total_days)}</td>
                                <td class="px-4 py-3 text-sm">{display_or_placeholder(row.reason.as_deref())}</td>
                                <td class="px-4 py-3 text-sm">
                                    <span class=format!("px-2 py-0.5 rounded-full text-xs font-medium {}", badge)>
                                        {display_or_placeholder(row.status.as_deref())}
                                    </span>
                                </td>
                            </tr>
                        }
                    })
                    .collect_view()
            }}
        </tbody>
    }
}
