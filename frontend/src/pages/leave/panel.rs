use crate::components::{
    empty_state::EmptyState,
    error::InlineErrorMessage,
    layout::{Layout, PageTitle, TableSkeleton},
    list_toolbar::ListToolbar,
    pagination::Pagination,
};
use crate::pages::approvals::utils::STATUS_OPTIONS;
use crate::pages::leave::{
    components::{
        forms::{CompOffForm, LeaveApplyForm, RevertForm},
        history::{MyLeavesTable, HEADERS},
    },
    utils::revertible,
    view_model::{use_leave_view_model, LeaveForm},
};
use leptos::*;

#[component]
pub fn LeavePage() -> impl IntoView {
    let vm = use_leave_view_model();
    let list = vm.list;
    let records = list.records();
    let revertible_leaves = Signal::derive(move || revertible(&records.get()));
    let skeleton = list.shows_skeleton();
    let empty = list.is_empty();

    view! {
        <Layout>
            <PageTitle title="Leave" />
            <div class="grid grid-cols-1 lg:grid-cols-3 gap-4">
                <LeaveApplyForm
                    state=vm.leave_form
                    error=vm.error_for(LeaveForm::Leave)
                    submitting=vm.is_submitting(LeaveForm::Leave)
                    on_submit=Callback::new(move |_| vm.submit(LeaveForm::Leave))
                />
                <CompOffForm
                    state=vm.comp_off_form
                    error=vm.error_for(LeaveForm::CompOff)
                    submitting=vm.is_submitting(LeaveForm::CompOff)
                    on_submit=Callback::new(move |_| vm.submit(LeaveForm::CompOff))
                />
                <RevertForm
                    state=vm.revert_form
                    leaves=revertible_leaves
                    error=vm.error_for(LeaveForm::Revert)
                    submitting=vm.is_submitting(LeaveForm::Revert)
                    on_submit=Callback::new(move |_| vm.submit(LeaveForm::Revert))
                />
            </div>
            <h3 class="text-lg font-medium text-fg mt-6 mb-2">"My leave requests"</h3>
            <ListToolbar
                search=list.search()
                on_search=Callback::new(move |value| list.set_search(value))
                placeholder="Search type or reason"
                status=list.status()
                status_options=STATUS_OPTIONS.to_vec()
                on_status=Callback::new(move |value| list.set_status(value))
                sort=list.sort()
                on_sort=Callback::new(move |_| list.toggle_sort())
            />
            <InlineErrorMessage error=list.error() on_retry=Callback::new(move |_| vm.reload()) />
            <div class="bg-surface-elevated shadow rounded-lg overflow-x-auto mt-4">
                <Show when=move || !empty.get() fallback=|| view! { <EmptyState /> }>
                    <table class="min-w-full divide-y divide-border">
                        <Show
                            when=move || !skeleton.get()
                            fallback=|| view! { <TableSkeleton columns=HEADERS.len() /> }
                        >
                            <MyLeavesTable rows=list.visible() />
                        </Show>
                    </table>
                </Show>
            </div>
            <Pagination
                paginator=list.paginator()
                on_prev=Callback::new(move |_| list.prev_page())
                on_next=Callback::new(move |_| list.next_page())
                on_go_to=Callback::new(move |page| list.go_to(page))
            />
        </Layout>
    }
}
