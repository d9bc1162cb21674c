use crate::api::ApiError;
use leptos::*;

/// Banner for a failed fetch or submit. Previous rows stay on screen below it.
#[component]
pub fn InlineErrorMessage(
    error: Signal<Option<ApiError>>,
    #[prop(optional)] on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div role="alert" class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2">
                <div class="flex items-start justify-between gap-3">
                    <div class="font-bold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                    {on_retry.map(|retry| view! {
                        <button
                            type="button"
                            class="text-sm underline hover:no-underline"
                            on:click=move |_| retry.call(())
                        >
                            "Retry"
                        </button>
                    })}
                </div>
                {move || error.get().map(|e| {
                    if e.is_validation() {
                        if let Some(errors) = e
                            .details
                            .as_ref()
                            .and_then(|details| details.get("errors"))
                            .and_then(|v| v.as_array())
                        {
                            return view! {
                                <ul class="list-disc list-inside text-sm">
                                    {errors.iter().map(|err| {
                                        view! { <li>{err.as_str().unwrap_or_default().to_string()}</li> }
                                    }).collect_view()}
                                </ul>
                            }.into_view();
                        }
                    }
                    if !e.code.is_empty() && e.code != "UNKNOWN" && e.code != "NETWORK_ERROR" {
                        view! { <div class="text-xs opacity-75">{"Code: "}{e.code.clone()}</div> }.into_view()
                    } else {
                        ().into_view()
                    }
                }).unwrap_or_else(|| ().into_view())}
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use serde_json::json;

    #[test]
    fn inline_error_lists_validation_details() {
        let html = render_to_string(move || {
            let mut error = ApiError::validation("Form has errors");
            error.details = Some(json!({ "errors": ["Title is required", "Message is required"] }));
            let signal = create_rw_signal(Some(error));
            view! { <InlineErrorMessage error={signal.into()} /> }
        });
        assert!(html.contains("Form has errors"));
        assert!(html.contains("Title is required"));
        assert!(html.contains("Message is required"));
    }

    #[test]
    fn inline_error_shows_server_code_and_retry() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(Some(ApiError::server(503, "Service unavailable")));
            view! {
                <InlineErrorMessage error={signal.into()} on_retry=Callback::new(|_| {}) />
            }
        });
        assert!(html.contains("Service unavailable"));
        assert!(html.contains("Code: HTTP_503"));
        assert!(html.contains("Retry"));
    }

    #[test]
    fn inline_error_hidden_without_error() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(None::<ApiError>);
            view! { <InlineErrorMessage error={signal.into()} /> }
        });
        assert!(!html.contains("role=\"alert\""));
    }
}
