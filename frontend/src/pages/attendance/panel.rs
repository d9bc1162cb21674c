use crate::components::{
    common::{Button, ButtonVariant},
    empty_state::EmptyState,
    error::InlineErrorMessage,
    layout::{Layout, PageTitle, TableSkeleton},
    list_toolbar::ListToolbar,
    pagination::Pagination,
};
use crate::pages::attendance::{
    components::{
        history::{header_count, HistoryTable},
        range::RangeFormSection,
    },
    utils::STATUS_OPTIONS,
    view_model::{use_attendance_view_model, PunchKind},
};
use leptos::*;

#[component]
pub fn AttendancePage() -> impl IntoView {
    let vm = use_attendance_view_model();
    let list = vm.list;
    let skeleton = list.shows_skeleton();
    let empty = list.is_empty();
    let punching: Signal<bool> = vm.punch_pending.into();

    view! {
        <Layout>
            <PageTitle title="Attendance">
                <div class="flex gap-2">
                    <Button loading=punching on:click=move |_| vm.punch(PunchKind::In)>
                        "Punch in"
                    </Button>
                    <Button
                        variant=ButtonVariant::Secondary
                        loading=punching
                        on:click=move |_| vm.punch(PunchKind::Out)
                    >
                        "Punch out"
                    </Button>
                </div>
            </PageTitle>
            <RangeFormSection
                from_input=vm.range_form.from_signal()
                to_input=vm.range_form.to_signal()
                loading=list.is_loading()
                range_error=vm.range_error.into()
                on_select_current_month=Callback::new(move |_| vm.select_current_month())
                on_load_range=Callback::new(move |_| vm.apply_range())
            />
            <div class="mt-4">
                <ListToolbar
                    search=list.search()
                    on_search=Callback::new(move |value| list.set_search(value))
                    placeholder="Search by employee name"
                    status=list.status()
                    status_options=STATUS_OPTIONS.to_vec()
                    on_status=Callback::new(move |value| list.set_status(value))
                    sort=list.sort()
                    on_sort=Callback::new(move |_| list.toggle_sort())
                />
            </div>
            <InlineErrorMessage error=list.error() on_retry=Callback::new(move |_| vm.reload()) />
            <div class="bg-surface-elevated shadow rounded-lg overflow-x-auto mt-4">
                <Show when=move || !empty.get() fallback=|| view! { <EmptyState /> }>
                    <table class="min-w-full divide-y divide-border">
                        <Show
                            when=move || !skeleton.get()
                            fallback=|| view! { <TableSkeleton columns=header_count() /> }
                        >
                            <HistoryTable rows=list.visible() />
                        </Show>
                    </table>
                </Show>
            </div>
            <Pagination
                paginator=list.paginator()
                on_prev=Callback::new(move |_| list.prev_page())
                on_next=Callback::new(move |_| list.next_page())
                on_go_to=Callback::new(move |page| list.go_to(page))
                on_page_size=Callback::new(move |size| list.set_page_size(size))
            />
        </Layout>
    }
}
