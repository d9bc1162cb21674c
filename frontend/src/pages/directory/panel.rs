use crate::components::{
    empty_state::EmptyState,
    error::InlineErrorMessage,
    layout::{Layout, PageTitle, TableSkeleton},
    list_toolbar::ListToolbar,
    pagination::Pagination,
};
use crate::pages::directory::{
    components::table::{EmployeesTable, HEADERS},
    utils::STATUS_OPTIONS,
    view_model::use_directory_view_model,
};
use leptos::*;

#[component]
pub fn DirectoryPage() -> impl IntoView {
    let vm = use_directory_view_model();
    let list = vm.list;
    let skeleton = list.shows_skeleton();
    let empty = list.is_empty();

    view! {
        <Layout>
            <PageTitle title="Employee directory" />
            <ListToolbar
                search=list.search()
                on_search=Callback::new(move |value| list.set_search(value))
                placeholder="Search by name, designation or department"
                status=list.status()
                status_options=STATUS_OPTIONS.to_vec()
                on_status=Callback::new(move |value| list.set_status(value))
            />
            <InlineErrorMessage error=list.error() on_retry=Callback::new(move |_| vm.reload()) />
            <div class="bg-surface-elevated shadow rounded-lg overflow-x-auto mt-4">
                <Show when=move || !empty.get() fallback=|| view! { <EmptyState /> }>
                    <table class="min-w-full divide-y divide-border">
                        <Show
                            when=move || !skeleton.get()
                            fallback=|| view! { <TableSkeleton columns=HEADERS.len() /> }
                        >
                            <EmployeesTable rows=list.visible() />
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
