use crate::listing::SortOrder;
use leptos::*;

/// Search box plus optional status/type selects and a date sort toggle.
/// Every change is reported upward; the owner resets pagination.
#[component]
pub fn ListToolbar(
    search: Signal<String>,
    on_search: Callback<String>,
    #[prop(into, default = "Search".to_string())] placeholder: String,
    #[prop(optional)] status: Option<Signal<String>>,
    #[prop(optional)] status_options: Vec<&'static str>,
    #[prop(optional)] on_status: Option<Callback<String>>,
    #[prop(optional)] kind: Option<Signal<String>>,
    #[prop(optional)] kind_options: Option<Signal<Vec<String>>>,
    #[prop(optional)] on_kind: Option<Callback<String>>,
    #[prop(optional)] sort: Option<Signal<Option<SortOrder>>>,
    #[prop(optional)] on_sort: Option<Callback<()>>,
) -> impl IntoView {
    let status_select = status.zip(on_status).map(|(status, on_status)| {
        view! {
            <select
                class="border border-border rounded px-2 py-1 text-sm bg-surface-elevated"
                aria-label="Status"
                prop:value=move || status.get()
                on:change=move |ev| on_status.call(event_target_value(&ev))
            >
                <option value="">"All statuses"</option>
                {status_options
                    .iter()
                    .map(|value| view! { <option value=*value>{*value}</option> })
                    .collect_view()}
            </select>
        }
    });
    let kind_select = kind.zip(on_kind).map(|(kind, on_kind)| {
        view! {
            <select
                class="border border-border rounded px-2 py-1 text-sm bg-surface-elevated"
                aria-label="Type"
                prop:value=move || kind.get()
                on:change=move |ev| on_kind.call(event_target_value(&ev))
            >
                <option value="">"All types"</option>
                {move || {
                    kind_options
                        .map(|options| options.get())
                        .unwrap_or_default()
                        .into_iter()
                        .map(|value| view! { <option value=value.clone()>{value}</option> })
                        .collect_view()
                }}
            </select>
        }
    });
    let sort_button = on_sort.map(|on_sort| {
        let label = move || match sort.and_then(|sort| sort.get()) {
            Some(SortOrder::Ascending) => "Date ↑",
            Some(SortOrder::Descending) => "Date ↓",
            None => "Sort by date",
        };
        view! {
            <button
                type="button"
                class="border border-border rounded px-3 py-1 text-sm hover:bg-action-ghost-bg-hover"
                on:click=move |_| on_sort.call(())
            >
                {label}
            </button>
        }
    });

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-4 flex flex-col gap-3 md:flex-row md:items-center">
            <input
                type="search"
                class="border border-border rounded px-3 py-1 text-sm flex-1"
                placeholder=placeholder
                prop:value=move || search.get()
                on:input=move |ev| on_search.call(event_target_value(&ev))
            />
            <div class="flex items-center gap-2">
                {status_select}
                {kind_select}
                {sort_button}
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn toolbar_renders_configured_controls() {
        let html = render_to_string(move || {
            let search = create_rw_signal("jo".to_string());
            let status = create_rw_signal(String::new());
            view! {
                <ListToolbar
                    search=search.into()
                    on_search=Callback::new(move |value| search.set(value))
                    placeholder="Search by employee"
                    status=status.into()
                    status_options=vec!["Pending", "Approved", "Rejected"]
                    on_status=Callback::new(move |value| status.set(value))
                />
            }
        });
        assert!(html.contains("Search by employee"));
        assert!(html.contains("All statuses"));
        assert!(html.contains("Rejected"));
        assert!(!html.contains("All types"));
        assert!(!html.contains("Sort by date"));
    }

    #[test]
    fn toolbar_renders_type_options_and_sort() {
        let html = render_to_string(move || {
            let search = create_rw_signal(String::new());
            let kind = create_rw_signal(String::new());
            let sort = create_rw_signal(Some(SortOrder::Ascending));
            view! {
                <ListToolbar
                    search=search.into()
                    on_search=Callback::new(move |value| search.set(value))
                    kind=kind.into()
                    kind_options=Signal::derive(|| vec!["Public".to_string(), "Private".to_string()])
                    on_kind=Callback::new(move |value| kind.set(value))
                    sort=sort.into()
                    on_sort=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("All types"));
        assert!(html.contains("Private"));
        assert!(html.contains("Date ↑"));
    }
}
