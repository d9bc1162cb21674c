use crate::components::{
    empty_state::EmptyState,
    error::InlineErrorMessage,
    layout::{Layout, PageTitle, TableSkeleton},
    list_toolbar::ListToolbar,
    pagination::Pagination,
};
use crate::pages::documents::{
    components::{
        table::{DocumentsTable, HEADERS},
        upload::UploadForm,
    },
    utils::DOC_TYPE_OPTIONS,
    view_model::use_documents_view_model,
};
use leptos::*;

#[component]
pub fn DocumentsPage() -> impl IntoView {
    let vm = use_documents_view_model();
    let list = vm.list;
    let skeleton = list.shows_skeleton();
    let empty = list.is_empty();
    let type_options = Signal::derive(|| DOC_TYPE_OPTIONS.iter().map(|t| t.to_string()).collect());

    view! {
        <Layout>
            <PageTitle title="Documents" />
            <UploadForm
                state=vm.upload_form
                error=vm.upload_error.into()
                uploading=vm.uploading.into()
                on_submit=Callback::new(move |_| vm.upload())
            />
            <ListToolbar
                search=list.search()
                on_search=Callback::new(move |value| list.set_search(value))
                placeholder="Search by name or employee"
                kind=list.kind()
                kind_options=type_options
                on_kind=Callback::new(move |value| list.set_kind(value))
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
                            <DocumentsTable rows=list.visible() />
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
