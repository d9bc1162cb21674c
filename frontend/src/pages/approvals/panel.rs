use crate::components::{
    empty_state::EmptyState,
    error::InlineErrorMessage,
    layout::{Layout, PageTitle, TableSkeleton},
    list_toolbar::ListToolbar,
    pagination::Pagination,
    reason_dialog::ReasonDialog,
};
use crate::pages::approvals::{
    components::{table::ApprovalsTable, tabs::ApprovalTabs},
    utils::{column_headers, reject_prompt, STATUS_OPTIONS},
    view_model::use_approvals_view_model,
};
use leptos::*;

#[component]
pub fn ApprovalsPage() -> impl IntoView {
    let vm = use_approvals_view_model();
    let active = vm.active();
    let cache = vm.active_cache();
    let error = Signal::derive(move || cache.with(|c| c.error().cloned()));
    let skeleton = Signal::derive(move || cache.with(|c| c.shows_skeleton()));
    let has_rows = vm.has_filtered_rows();
    let is_empty = Signal::derive(move || cache.with(|c| c.is_loaded()) && !has_rows.get());
    let busy: Signal<bool> = vm.action_pending.into();

    let reject_open = Signal::derive(move || vm.reject_target.with(Option::is_some));
    let reject_message = Signal::derive(move || reject_prompt(active.get()));
    let reason_required = move || active.get().rejection_requires_reason();

    view! {
        <Layout>
            <PageTitle title="Approvals">
                <button
                    type="button"
                    class="px-3 py-1 text-sm border border-border rounded hover:bg-action-ghost-bg-hover disabled:opacity-50"
                    disabled=move || cache.with(|c| c.is_loading())
                    on:click=move |_| vm.refresh()
                >
                    "Refresh"
                </button>
            </PageTitle>
            <ApprovalTabs active=active on_select=Callback::new(move |kind| vm.select_tab(kind)) />
            <ListToolbar
                search=vm.search()
                on_search=Callback::new(move |value| vm.set_search(value))
                placeholder="Search employee, type or reason"
                status=vm.status_filter()
                status_options=STATUS_OPTIONS.to_vec()
                on_status=Callback::new(move |value| vm.set_status(value))
                kind=vm.type_filter()
                kind_options=vm.type_options()
                on_kind=Callback::new(move |value| vm.set_type(value))
                sort=vm.sort()
                on_sort=Callback::new(move |_| vm.toggle_sort())
            />
            <InlineErrorMessage error=error on_retry=Callback::new(move |_| vm.refresh()) />
            <div class="bg-surface-elevated shadow rounded-lg overflow-x-auto mt-4">
                <Show when=move || !is_empty.get() fallback=|| view! { <EmptyState /> }>
                    <table class="min-w-full divide-y divide-border">
                        <Show
                            when=move || !skeleton.get()
                            fallback=move || view! {
                                <TableSkeleton columns=column_headers(active.get_untracked()).len() + 1 />
                            }
                        >
                            <ApprovalsTable
                                kind=active
                                rows=vm.visible_rows()
                                on_approve=Callback::new(move |id| vm.approve(id))
                                on_reject=Callback::new(move |id| vm.begin_reject(id))
                                busy=busy
                            />
                        </Show>
                    </table>
                </Show>
            </div>
            <Pagination
                paginator=vm.paginator()
                on_prev=Callback::new(move |_| vm.prev_page())
                on_next=Callback::new(move |_| vm.next_page())
                on_go_to=Callback::new(move |page| vm.go_to(page))
                on_page_size=Callback::new(move |size| vm.set_page_size(size))
            />
            {move || {
                let required = reason_required();
                view! {
                    <ReasonDialog
                        is_open=reject_open
                        title=Signal::derive(move || format!("Reject {}", active.get().resource_name().to_lowercase()))
                        message=reject_message
                        reason=vm.reject_reason
                        on_confirm=Callback::new(move |reason| vm.confirm_reject(reason))
                        on_cancel=Callback::new(move |_| vm.cancel_reject())
                        required=required
                        busy=busy
                    />
                }
            }}
        </Layout>
    }
}
