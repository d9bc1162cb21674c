use leptos::*;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastKind {
    Loading,
    Success,
    Error,
    Info,
}

impl ToastKind {
    /// Loading toasts stay until dismissed by whoever raised them.
    pub fn auto_dismiss(&self) -> bool {
        !matches!(self, ToastKind::Loading)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub kind: ToastKind,
    pub message: String,
}

/// Visible toasts plus a registry keyed by `(kind, message)` so the same
/// notification is never stacked twice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastStore {
    toasts: Vec<Toast>,
    by_message: HashMap<(ToastKind, String), ToastId>,
    next_id: u64,
}

impl ToastStore {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> ToastId {
        let message = message.into();
        let key = (kind, message.clone());
        if let Some(existing) = self.by_message.get(&key) {
            return *existing;
        }
        self.next_id += 1;
        let id = ToastId(self.next_id);
        self.by_message.insert(key, id);
        self.toasts.push(Toast { id, kind, message });
        id
    }

    pub fn dismiss(&mut self, id: ToastId) {
        if let Some(pos) = self.toasts.iter().position(|toast| toast.id == id) {
            let toast = self.toasts.remove(pos);
            self.by_message.remove(&(toast.kind, toast.message));
        }
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Sink for user-facing notifications raised by list pages and the action
/// dispatcher.
pub trait Notifier {
    fn loading(&self, message: &str) -> ToastId;
    fn dismiss(&self, id: ToastId);
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

#[derive(Clone, Copy)]
pub struct ToastContext {
    store: RwSignal<ToastStore>,
}

impl ToastContext {
    pub fn new() -> Self {
        Self {
            store: create_rw_signal(ToastStore::default()),
        }
    }

    pub fn store(&self) -> RwSignal<ToastStore> {
        self.store
    }

    pub fn info(&self, message: &str) {
        self.push(ToastKind::Info, message);
    }

    fn push(&self, kind: ToastKind, message: &str) -> ToastId {
        let mut id = None;
        self.store.update(|store| id = Some(store.push(kind, message)));
        let id = id.unwrap_or(ToastId(0));
        if kind.auto_dismiss() {
            self.schedule_dismiss(id);
        }
        id
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, id: ToastId) {
        let store = self.store;
        let timeout = crate::config::current().toast_timeout_ms;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(timeout).await;
            store.update(|s| s.dismiss(id));
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _id: ToastId) {}
}

impl Default for ToastContext {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ToastContext {
    fn loading(&self, message: &str) -> ToastId {
        self.push(ToastKind::Loading, message)
    }

    fn dismiss(&self, id: ToastId) {
        self.store.update(|store| store.dismiss(id));
    }

    fn success(&self, message: &str) {
        self.push(ToastKind::Success, message);
    }

    fn error(&self, message: &str) {
        log::error!("{}", message);
        self.push(ToastKind::Error, message);
    }
}

pub fn provide_toasts() -> ToastContext {
    let ctx = ToastContext::new();
    provide_context(ctx);
    ctx
}

pub fn use_toasts() -> ToastContext {
    use_context::<ToastContext>().unwrap_or_else(provide_toasts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_messages_are_deduplicated() {
        let mut store = ToastStore::default();
        let first = store.push(ToastKind::Error, "Network error");
        let second = store.push(ToastKind::Error, "Network error");
        assert_eq!(first, second);
        assert_eq!(store.toasts().len(), 1);

        store.push(ToastKind::Success, "Network error");
        assert_eq!(store.toasts().len(), 2);
    }

    #[test]
    fn dismiss_frees_the_message_key() {
        let mut store = ToastStore::default();
        let id = store.push(ToastKind::Info, "Saved");
        store.dismiss(id);
        assert!(store.is_empty());
        let again = store.push(ToastKind::Info, "Saved");
        assert_ne!(id, again);
        assert_eq!(store.toasts().len(), 1);
    }

    #[test]
    fn dismissing_unknown_id_is_a_no_op() {
        let mut store = ToastStore::default();
        store.push(ToastKind::Info, "Saved");
        store.dismiss(ToastId(99));
        assert_eq!(store.toasts().len(), 1);
    }

    #[test]
    fn loading_toasts_are_not_auto_dismissed() {
        assert!(!ToastKind::Loading.auto_dismiss());
        assert!(ToastKind::Error.auto_dismiss());
    }
}
