use crate::api::Holiday;
use crate::components::{
    empty_state::EmptyState,
    error::InlineErrorMessage,
    layout::{Layout, PageTitle, TableSkeleton},
    list_toolbar::ListToolbar,
};
use crate::pages::holidays::{
    utils::{is_upcoming, weekday_label},
    view_model::use_holidays_view_model,
};
use crate::utils::display::{display_date, display_or_placeholder};
use crate::utils::time::today_in_app_tz;
use leptos::*;

const HEADERS: [&str; 4] = ["Date", "Day", "Holiday", "Type"];

#[component]
fn HolidayRow(holiday: Holiday) -> impl IntoView {
    let upcoming = is_upcoming(&holiday, today_in_app_tz());
    let name = display_or_placeholder(holiday.name.as_deref());
    let row_class = if upcoming { "" } else { "text-fg-muted" };
    view! {
        <tr class=row_class data-upcoming=upcoming.to_string()>
            <td class="px-4 py-3 text-sm">{display_date(holiday.date)}</td>
            <td class="px-4 py-3 text-sm">{display_or_placeholder(weekday_label(holiday.date))}</td>
            <td class="px-4 py-3 text-sm">
                <div>{name}</div>
                {holiday.description.map(|d| view! { <div class="text-xs text-fg-muted">{d}</div> })}
            </td>
            <td class="px-4 py-3 text-sm">{display_or_placeholder(holiday.holiday_type.as_deref())}</td>
        </tr>
    }
}

#[component]
pub fn HolidaysPage() -> impl IntoView {
    let vm = use_holidays_view_model();
    let list = vm.list;
    let skeleton = list.shows_skeleton();
    let empty = list.is_empty();
    let rows = list.visible();

    view! {
        <Layout>
            <PageTitle title="Holidays" />
            <ListToolbar
                search=list.search()
                on_search=Callback::new(move |value| list.set_search(value))
                placeholder="Search holidays"
                kind=list.kind()
                kind_options=vm.type_options()
                on_kind=Callback::new(move |value| list.set_kind(value))
                sort=list.sort()
                on_sort=Callback::new(move |_| list.toggle_sort())
            />
            <InlineErrorMessage error=list.error() on_retry=Callback::new(move |_| vm.reload()) />
            <div class="bg-surface-elevated shadow rounded-lg overflow-x-auto mt-4">
                <Show when=move || !empty.get() fallback=|| view! { <EmptyState /> }>
                    <table class="min-w-full divide-y divide-border">
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
                        <Show
                            when=move || !skeleton.get()
                            fallback=|| view! { <TableSkeleton columns=HEADERS.len() /> }
                        >
                            <tbody class="divide-y divide-border">
                                {move || {
                                    rows.get()
                                        .into_iter()
                                        .map(|holiday| view! { <HolidayRow holiday=holiday /> })
                                        .collect_view()
                                }}
                            </tbody>
                        </Show>
                    </table>
                </Show>
            </div>
        </Layout>
    }
}
