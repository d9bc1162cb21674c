use crate::listing::{PageSize, Paginator};
use leptos::ev::KeyboardEvent;
use leptos::*;

pub const PAGE_SIZE_OPTIONS: [i64; 4] = [10, 25, 50, -1];

fn page_size_label(raw: i64) -> String {
    if raw == -1 {
        "All".to_string()
    } else {
        raw.to_string()
    }
}

/// Reads the page-number box. Anything that is not a whole number maps to
/// page 0 so the caller rejects it like any other out-of-range page.
pub fn parse_page_input(raw: &str) -> usize {
    raw.trim().parse::<usize>().unwrap_or(0)
}

pub fn summary_text(paginator: &Paginator) -> String {
    match paginator.visible_range() {
        Some((start, end)) => format!(
            "Showing {}-{} of {}",
            start,
            end,
            paginator.total_items()
        ),
        None => "Showing 0 of 0".to_string(),
    }
}

#[component]
pub fn Pagination(
    paginator: Signal<Paginator>,
    on_prev: Callback<()>,
    on_next: Callback<()>,
    #[prop(optional)] on_page_size: Option<Callback<PageSize>>,
    #[prop(optional)] on_go_to: Option<Callback<usize>>,
) -> impl IntoView {
    let has_prev = move || paginator.with(|p| p.has_prev());
    let has_next = move || paginator.with(|p| p.has_next());
    let page_input = create_rw_signal(String::new());
    view! {
        <div class="flex flex-col gap-2 sm:flex-row sm:items-center sm:justify-between py-3 text-sm text-fg-muted">
            <span>{move || paginator.with(summary_text)}</span>
            <div class="flex items-center gap-2">
                {on_page_size.map(|on_page_size| view! {
                    <label class="flex items-center gap-1">
                        "Rows"
                        <select
                            class="border border-border rounded px-2 py-1 bg-surface-elevated"
                            prop:value=move || paginator.with(|p| p.page_size().as_raw().to_string())
                            on:change=move |ev| {
                                let raw = event_target_value(&ev).parse::<i64>().unwrap_or(-2);
                                match PageSize::from_raw(raw) {
                                    Ok(size) => on_page_size.call(size),
                                    Err(err) => log::warn!("{}", err),
                                }
                            }
                        >
                            {PAGE_SIZE_OPTIONS
                                .iter()
                                .map(|raw| view! { <option value=raw.to_string()>{page_size_label(*raw)}</option> })
                                .collect_view()}
                        </select>
                    </label>
                })}
                <button
                    type="button"
                    class="px-3 py-1 rounded border border-border disabled:opacity-50"
                    disabled=move || !has_prev()
                    on:click=move |_| on_prev.call(())
                >
                    "Previous"
                </button>
                <span>
                    {move || paginator.with(|p| format!("Page {} of {}", p.page(), p.total_pages()))}
                </span>
                <button
                    type="button"
                    class="px-3 py-1 rounded border border-border disabled:opacity-50"
                    disabled=move || !has_next()
                    on:click=move |_| on_next.call(())
                >
                    "Next"
                </button>
                {on_go_to.map(|on_go_to| {
                    let submit = move || on_go_to.call(parse_page_input(&page_input.get_untracked()));
                    view! {
                        <div class="flex items-center gap-1">
                            <label class="flex items-center gap-1">
                                "Go to"
                                <input
                                    type="number"
                                    min="1"
                                    class="w-16 border border-border rounded px-2 py-1 bg-surface-elevated"
                                    aria-label="Page number"
                                    prop:value=move || page_input.get()
                                    on:input=move |ev| page_input.set(event_target_value(&ev))
                                    on:keydown=move |ev: KeyboardEvent| {
                                        if ev.key() == "Enter" {
                                            ev.prevent_default();
                                            submit();
                                        }
                                    }
                                />
                            </label>
                            <button
                                type="button"
                                class="px-3 py-1 rounded border border-border"
                                on:click=move |_| submit()
                            >
                                "Go"
                            </button>
                        </div>
                    }
                })}
            </div>
        </div>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn pagination_renders_page_position() {
        let html = render_to_string(move || {
            let mut paginator = Paginator::client(PageSize::fixed(10).unwrap());
            paginator.set_total(23);
            let signal = create_rw_signal(paginator);
            view! {
                <Pagination
                    paginator=signal.into()
                    on_prev=Callback::new(|_| {})
                    on_next=Callback::new(|_| {})
                    on_page_size=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Page 1 of 3"));
        assert!(html.contains("Showing 1-10 of 23"));
        assert!(html.contains("All"));
        assert!(!html.contains("Page number"));
    }

    #[test]
    fn go_to_box_renders_when_handler_given() {
        let html = render_to_string(move || {
            let mut paginator = Paginator::client(PageSize::fixed(10).unwrap());
            paginator.set_total(23);
            let signal = create_rw_signal(paginator);
            view! {
                <Pagination
                    paginator=signal.into()
                    on_prev=Callback::new(|_| {})
                    on_next=Callback::new(|_| {})
                    on_go_to=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("aria-label=\"Page number\""));
        assert!(html.contains("Go to"));
        assert!(!html.contains("Rows"));
    }
}
