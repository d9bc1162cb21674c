#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod helpers {
    use crate::api::test_support::mock::MockServer;
    use crate::api::ApiClient;
    use crate::state::toast::{provide_toasts, ToastContext, ToastKind};
    use leptos::*;

    /// Provides an `ApiClient` pointed at the mock server plus a toast
    /// context, the way the app shell does.
    pub fn provide_app(server: &MockServer) -> ToastContext {
        provide_context(ApiClient::new_with_base_url(server.url("/api")));
        provide_toasts()
    }

    pub fn toast_messages(toasts: ToastContext, kind: ToastKind) -> Vec<String> {
        toasts
            .store()
            .get_untracked()
            .toasts()
            .iter()
            .filter(|toast| toast.kind == kind)
            .map(|toast| toast.message.clone())
            .collect()
    }
}
