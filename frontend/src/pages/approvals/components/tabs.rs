use crate::api::ApprovalKind;
use leptos::*;

#[component]
pub fn ApprovalTabs(active: Signal<ApprovalKind>, on_select: Callback<ApprovalKind>) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2 border-b border-border mb-4" role="tablist">
            {ApprovalKind::ALL
                .into_iter()
                .map(|kind| {
                    let selected = move || active.get() == kind;
                    view! {
                        <button
                            type="button"
                            role="tab"
                            data-tab=kind.key()
                            aria-selected=move || selected().to_string()
                            class=move || {
                                if selected() {
                                    "px-4 py-2 text-sm font-medium border-b-2 border-action-primary-bg text-fg"
                                } else {
                                    "px-4 py-2 text-sm font-medium text-fg-muted hover:text-fg"
                                }
                            }
                            on:click=move |_| on_select.call(kind)
                        >
                            {kind.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_one_tab_per_kind_with_active_marked() {
        let html = render_to_string(move || {
            let active = create_rw_signal(ApprovalKind::CompOff);
            view! { <ApprovalTabs active=active.into() on_select=Callback::new(|_| {}) /> }
        });
        for kind in ApprovalKind::ALL {
            assert!(html.contains(kind.label()));
        }
        assert_eq!(html.matches("aria-selected=\"true\"").count(), 1);
    }
}
