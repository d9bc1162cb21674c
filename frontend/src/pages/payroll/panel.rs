use crate::api::PayrollRow;
use crate::components::{
    common::{Button, ButtonVariant},
    empty_state::EmptyState,
    error::InlineErrorMessage,
    forms::TextField,
    layout::{Layout, PageTitle, TableSkeleton},
    list_toolbar::ListToolbar,
    pagination::Pagination,
};
use crate::pages::payroll::{
    utils::{payslip_link, period_label},
    view_model::use_payroll_view_model,
};
use crate::utils::display::{display_amount, display_or_placeholder};
use leptos::*;

pub const HEADERS: [&str; 6] = ["Employee", "Period", "Gross", "Deductions", "Net", "Payslip"];

#[component]
pub fn PayrollTable(rows: Signal<Vec<PayrollRow>>) -> impl IntoView {
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
                        let period = display_or_placeholder(period_label(&row));
                        let link = payslip_link(&row);
                        view! {
                            <tr>
                                <td class="px-4 py-3 text-sm text-fg">{display_or_placeholder(row.employee_name.as_deref())}</td>
                                <td class="px-4 py-3 text-sm">{period}</td>
                                <td class="px-4 py-3 text-sm text-right">{display_amount(row.gross_pay)}</td>
                                <td class="px-4 py-3 text-sm text-right">{display_amount(row.deductions)}</td>
                                <td class="px-4 py-3 text-sm text-right font-semibold">{display_amount(row.net_pay)}</td>
                                <td class="px-4 py-3 text-sm">
                                    {match link {
                                        Some(url) => view! {
                                            <a href=url target="_blank" rel="noopener" class="text-action-primary-bg underline">"Payslip"</a>
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

#[component]
pub fn PayrollPage() -> impl IntoView {
    let vm = use_payroll_view_model();
    let list = vm.list;
    let skeleton = list.shows_skeleton();
    let empty = list.is_empty();
    let loading = list.is_loading();

    view! {
        <Layout>
            <PageTitle title="Payroll" />
            <div class="flex flex-col gap-2 md:flex-row md:items-end mb-4">
                <TextField label="Month" value=vm.period_form.month_signal() placeholder="1-12" input_type="number" />
                <TextField label="Year" value=vm.period_form.year_signal() placeholder="2025" input_type="number" />
                <Button
                    variant=ButtonVariant::Secondary
                    loading=loading
                    on:click=move |_| vm.apply_period()
                >
                    "Apply"
                </Button>
            </div>
            {move || vm.period_error.get().map(|message| view! {
                <p class="text-sm text-status-error-text mb-2">{message}</p>
            })}
            <ListToolbar
                search=list.search()
                on_search=Callback::new(move |value| list.set_search(value))
                placeholder="Search this page by employee"
            />
            <InlineErrorMessage error=list.error() on_retry=Callback::new(move |_| vm.reload()) />
            <div class="bg-surface-elevated shadow rounded-lg overflow-x-auto mt-4">
                <Show when=move || !empty.get() fallback=|| view! { <EmptyState /> }>
                    <table class="min-w-full divide-y divide-border">
                        <Show
                            when=move || !skeleton.get()
                            fallback=|| view! { <TableSkeleton columns=HEADERS.len() /> }
                        >
                            <PayrollTable rows=list.visible() />
                        </Show>
                    </table>
                </Show>
            </div>
            <Pagination
                paginator=list.paginator()
                on_prev=Callback::new(move |_| vm.prev_page())
                on_next=Callback::new(move |_| vm.next_page())
                on_go_to=Callback::new(move |page| vm.go_to(page))
            />
        </Layout>
    }
}
