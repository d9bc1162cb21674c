use crate::api::Document;
use crate::utils::display::{display_date_time, display_or_placeholder};
use leptos::*;

pub const HEADERS: [&str; 5] = ["Name", "Type", "Employee", "Uploaded", "File"];

#[component]
pub fn DocumentsTable(rows: Signal<Vec<Document>>) -> impl IntoView {
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
                    .map(|doc| {
                        let link = doc.location.clone().filter(|url| !url.trim().is_empty());
                        view! {
                            <tr>
                                <td class="px-4 py-3 text-sm text-fg">{display_or_placeholder(doc.document_name.as_deref())}</td>
                                <td class="px-4 py-3 text-sm">{display_or_placeholder(doc.doc_type.as_deref())}</td>
                                <td class="px-4 py-3 text-sm">{display_or_placeholder(doc.employee_id.as_deref())}</td>
                                <td class="px-4 py-3 text-sm">{display_date_time(doc.created_at)}</td>
                                <td class="px-4 py-3 text-sm">
                                    {match link {
                                        Some(url) => view! {
                                            <a href=url target="_blank" rel="noopener" class="text-action-primary-bg underline">"Open"</a>
                                        }.into_view(),
                                        None => display_or_placeholder(None::<&str>).into_view(),
                                    }}
                                </td>
                            </tr>
                        }
                    })
                    .collect_view()
            }}
        </tbody>
    }
}
