use crate::api::{ApprovalKind, ApprovalRequest};
use crate::pages::approvals::utils::{column_headers, row_cells, status_badge_class};
use leptos::*;

/// Rows of one approval tab. Approve and Reject are offered only on
/// pending rows.
#[component]
pub fn ApprovalsTable(
    kind: Signal<ApprovalKind>,
    rows: Signal<Vec<ApprovalRequest>>,
    on_approve: Callback<String>,
    on_reject: Callback<String>,
    #[prop(into)] busy: Signal<bool>,
) -> impl IntoView {
    view! {
        <thead class="bg-surface-muted">
            <tr>
                {move || {
                    column_headers(kind.get())
                        .into_iter()
                        .chain(std::iter::once("Actions"))
                        .map(|header| view! {
                            <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">
                                {header}
                            </th>
                        })
                        .collect_view()
                }}
            </tr>
        </thead>
        <tbody class="divide-y divide-border">
            <For
                each=move || rows.get()
                key=|row| (row.id.clone(), row.status.clone())
                children=move |row: ApprovalRequest| {
                    let mut cells = row_cells(kind.get_untracked(), &row);
                    let status = cells.pop().unwrap_or_default();
                    let badge = status_badge_class(row.request_status());
                    let pending = row.is_pending();
                    let approve_id = row.id.clone();
                    let reject_id = row.id.clone();
                    view! {
                        <tr data-row-id=row.id.clone()>
                            {cells
                                .into_iter()
                                .map(|cell| view! { <td class="px-4 py-3 text-sm text-fg">{cell}</td> })
                                .collect_view()}
                            <td class="px-4 py-3 text-sm">
                                <span class=format!("px-2 py-0.5 rounded-full text-xs font-medium {}", badge)>
                                    {status}
                                </span>
                            </td>
                            <td class="px-4 py-3 text-sm whitespace-nowrap">
                                <Show when=move || pending>
                                    <div class="flex gap-2">
                                        {
                                            let approve_id = approve_id.clone();
                                            view! {
                                                <button
                                                    type="button"
                                                    data-action="approve"
                                                    class="px-3 py-1 rounded bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                                                    disabled=move || busy.get()
                                                    on:click=move |_| on_approve.call(approve_id.clone())
                                                >
                                                    "Approve"
                                                </button>
                                            }
                                        }
                                        {
                                            let reject_id = reject_id.clone();
                                            view! {
                                                <button
                                                    type="button"
                                                    data-action="reject"
                                                    class="px-3 py-1 rounded bg-action-danger-bg text-action-danger-text disabled:opacity-50"
                                                    disabled=move || busy.get()
                                                    on:click=move |_| on_reject.call(reject_id.clone())
                                                >
                                                    "Reject"
                                                </button>
                                            }
                                        }
                                    </div>
                                </Show>
                            </td>
                        </tr>
                    }
                }
            />
        </tbody>
    }
}
