use crate::state::toast::{use_toasts, Notifier, ToastKind};
use leptos::*;

fn toast_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Loading => "bg-surface-elevated border-border text-fg",
        ToastKind::Success => {
            "bg-status-success-bg border-status-success-border text-status-success-text"
        }
        ToastKind::Error => "bg-status-error-bg border-status-error-border text-status-error-text",
        ToastKind::Info => "bg-status-info-bg border-status-info-border text-status-info-text",
    }
}

/// Renders the toasts of the nearest `ToastContext`.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();
    let store = toasts.store();
    view! {
        <div class="fixed top-4 right-4 z-[80] flex flex-col gap-2 w-80" aria-live="polite">
            <For
                each=move || store.get().toasts().to_vec()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let kind = toast.kind;
                    let role = if kind == ToastKind::Error { "alert" } else { "status" };
                    view! {
                        <div
                            role=role
                            class=format!("flex items-start justify-between gap-3 rounded border px-4 py-3 shadow {}", toast_class(kind))
                        >
                            <Show when=move || kind == ToastKind::Loading>
                                <div class="animate-spin rounded-full h-4 w-4 border-b-2 border-action-primary-bg"></div>
                            </Show>
                            <p class="text-sm flex-1">{toast.message.clone()}</p>
                            <button
                                type="button"
                                aria-label="Dismiss"
                                class="text-sm opacity-75 hover:opacity-100"
                                on:click=move |_| toasts.dismiss(id)
                            >
                                {"✕"}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::toast::provide_toasts;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn host_renders_each_distinct_toast_once() {
        let html = render_to_string(move || {
            let toasts = provide_toasts();
            toasts.error("Network error");
            toasts.error("Network error");
            toasts.success("Leave request approved");
            view! { <ToastHost /> }
        });
        assert_eq!(html.matches("Network error").count(), 1);
        assert!(html.contains("Leave request approved"));
        assert!(html.contains("role=\"alert\""));
    }
}
