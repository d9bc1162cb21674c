use crate::api::Employee;
use crate::pages::directory::utils::initials;
use crate::utils::display::display_or_placeholder;
use leptos::*;

pub const HEADERS: [&str; 5] = ["Employee", "Designation", "Department", "Contact", "Status"];

#[component]
pub fn EmployeesTable(rows: Signal<Vec<Employee>>) -> impl IntoView {
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
                    .map(|employee| {
                        let badge = initials(employee.employee_name.as_deref());
                        view! {
                            <tr>
                                <td class="px-4 py-3 text-sm text-fg">
                                    <div class="flex items-center gap-2">
                                        <span class="h-8 w-8 rounded-full bg-surface-muted flex items-center justify-center text-xs font-semibold">{badge}</span>
                                        <div>
                                            <div>{display_or_placeholder(employee.employee_name.as_deref())}</div>
                                            <div class="text-xs text-fg-muted">{display_or_placeholder(employee.employee_id.as_deref())}</div>
                                        </div>
                                    </div>
                                </td>
                                <td class="px-4 py-3 text-sm">{display_or_placeholder(employee.designation.as_deref())}</td>
                                <td class="px-4 py-3 text-sm">{display_or_placeholder(employee.department.as_deref())}</td>
                                <td class="px-4 py-3 text-sm">
                                    <div>{display_or_placeholder(employee.email.as_deref())}</div>
                                    <div class="text-xs text-fg-muted">{display_or_placeholder(employee.phone.as_deref())}</div>
                                </td>
                                <td class="px-4 py-3 text-sm">{display_or_placeholder(employee.status.as_deref())}</td>
                            </tr>
                        }
                    })
                    .collect_view()
            }}
        </tbody>
    }
}
