use crate::api::{Announcement, ApiError};
use crate::components::{
    common::{Button, ButtonVariant},
    empty_state::EmptyState,
    error::InlineErrorMessage,
    forms::{SelectField, TextArea, TextField},
    layout::{Layout, LoadingSpinner, PageTitle},
    list_toolbar::ListToolbar,
    pagination::Pagination,
};
use crate::pages::announcements::{
    utils::{AnnouncementFormState, AUDIENCES},
    view_model::use_announcements_view_model,
};
use crate::utils::display::{display_date_time, display_or_placeholder};
use leptos::*;

#[component]
fn AnnouncementCard(announcement: Announcement) -> impl IntoView {
    view! {
        <article class="bg-surface-elevated shadow rounded-lg p-4 space-y-2" data-announcement="true">
            <header class="flex items-start justify-between gap-3">
                <h3 class="text-lg font-semibold text-fg">{display_or_placeholder(announcement.title.as_deref())}</h3>
                {announcement.audience.map(|audience| view! {
                    <span class="text-xs rounded-full bg-surface-muted px-2 py-0.5">{audience}</span>
                })}
            </header>
            <p class="text-sm text-fg whitespace-pre-line">{announcement.message.unwrap_or_default()}</p>
            <footer class="text-xs text-fg-muted">
                {display_or_placeholder(announcement.created_by.as_deref())}
                " · "
                {display_date_time(announcement.created_at)}
            </footer>
        </article>
    }
}

#[component]
fn AnnouncementForm(
    state: AnnouncementFormState,
    error: Signal<Option<ApiError>>,
    posting: Signal<bool>,
    on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-4 space-y-3 mb-4">
            <TextField label="Title" value=state.title_signal() required=true />
            <TextArea label="Message" value=state.message_signal() rows=4 required=true />
            <SelectField label="Audience" value=state.audience_signal() options=AUDIENCES.to_vec() />
            <InlineErrorMessage error=error />
            <Button loading=posting on:click=move |_| on_submit.call(())>"Post"</Button>
        </section>
    }
}

#[component]
pub fn AnnouncementsPage() -> impl IntoView {
    let vm = use_announcements_view_model();
    let list = vm.list;
    let skeleton = list.shows_skeleton();
    let empty = list.is_empty();
    let rows = list.visible();

    view! {
        <Layout>
            <PageTitle title="Announcements">
                <Button variant=ButtonVariant::Secondary on:click=move |_| vm.toggle_form()>
                    {move || if vm.form_open.get() { "Cancel" } else { "New announcement" }}
                </Button>
            </PageTitle>
            <Show when=move || vm.form_open.get()>
                <AnnouncementForm
                    state=vm.form
                    error=vm.form_error.into()
                    posting=vm.posting.into()
                    on_submit=Callback::new(move |_| vm.post())
                />
            </Show>
            <ListToolbar
                search=list.search()
                on_search=Callback::new(move |value| list.set_search(value))
                placeholder="Search announcements"
                sort=list.sort()
                on_sort=Callback::new(move |_| list.toggle_sort())
            />
            <InlineErrorMessage error=list.error() on_retry=Callback::new(move |_| vm.reload()) />
            <Show when=move || !empty.get() fallback=|| view! { <EmptyState /> }>
                <Show when=move || !skeleton.get() fallback=|| view! { <LoadingSpinner /> }>
                    <div class="space-y-3 mt-4">
                        {move || {
                            rows.get()
                                .into_iter()
                                .map(|announcement| view! { <AnnouncementCard announcement=announcement /> })
                                .collect_view()
                        }}
                    </div>
                </Show>
            </Show>
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
