use leptos::ev::KeyboardEvent;
use leptos::*;

/// Modal that collects a free-text reason before a rejection. With
/// `required`, confirming an empty (trimmed) reason is disabled.
#[component]
pub fn ReasonDialog(
    is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(into)] message: MaybeSignal<String>,
    reason: RwSignal<String>,
    on_confirm: Callback<String>,
    on_cancel: Callback<()>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] confirm_label: MaybeSignal<String>,
    #[prop(optional, into)] busy: MaybeSignal<bool>,
) -> impl IntoView {
    let confirm_label_text = Signal::derive(move || {
        let text = confirm_label.get();
        if text.trim().is_empty() {
            "Reject".to_string()
        } else {
            text
        }
    });
    let title = Signal::derive(move || title.get());
    let message = Signal::derive(move || message.get());
    let busy = Signal::derive(move || busy.get());
    let reason_missing = move || required && reason.with(|r| r.trim().is_empty());
    let confirm_disabled = move || busy.get() || reason_missing();
    let placeholder = if required {
        "Reason (required)"
    } else {
        "Reason (optional)"
    };

    let confirm = move || {
        if confirm_disabled() {
            return;
        }
        on_confirm.call(reason.get_untracked().trim().to_string());
    };

    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| on_cancel.call(())
                ></button>
                <div
                    class="relative z-[71] w-full max-w-md rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            on_cancel.call(());
                        }
                    }
                >
                    <h2 class="text-lg font-semibold text-fg">{move || title.get()}</h2>
                    <p class="text-sm text-fg-muted">{move || message.get()}</p>
                    <textarea
                        class="w-full border border-border rounded px-3 py-2 text-sm"
                        rows="3"
                        placeholder=placeholder
                        prop:value=move || reason.get()
                        on:input=move |ev| reason.set(event_target_value(&ev))
                    ></textarea>
                    <Show when=reason_missing>
                        <p class="text-xs text-status-error-text">"A reason is required."</p>
                    </Show>
                    <div class="flex justify-end gap-2">
                        <button
                            type="button"
                            class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg hover:bg-surface-elevated"
                            on:click=move |_| on_cancel.call(())
                        >
                            "Cancel"
                        </button>
                        <button
                            type="button"
                            class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-danger-bg text-action-danger-text hover:bg-action-danger-bg-hover disabled:opacity-50"
                            disabled=confirm_disabled
                            on:click=move |_| confirm()
                        >
                            {move || confirm_label_text.get()}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
