use super::{
    repository::ApprovalsRepository,
    utils::{distinct_types, load_saved_tab, save_tab},
};
use crate::api::{ApiClient, ApprovalKind, ApprovalRequest};
use crate::config;
use crate::listing::{PageSize, Paginator, SortOrder};
use crate::state::{
    approvals::ApprovalsState,
    cache::RemoteCache,
    dispatcher::{ActionDispatcher, ActionRequest},
    tabs::{FetchCompletion, FetchTicket},
    toast::{use_toasts, Notifier, ToastContext},
};
use leptos::*;

/// Reactive wrapper around `ApprovalsState`. Components read derived signals
/// and call the methods below; nothing else mutates the state.
#[derive(Clone, Copy)]
pub struct ApprovalsViewModel {
    pub state: RwSignal<ApprovalsState>,
    pub toasts: ToastContext,
    pub reject_target: RwSignal<Option<String>>,
    pub reject_reason: RwSignal<String>,
    pub action_pending: RwSignal<bool>,
    repository: StoredValue<ApprovalsRepository>,
}

fn default_page_size() -> PageSize {
    PageSize::from_raw(config::current().page_size).unwrap_or(PageSize::All)
}

impl ApprovalsViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = store_value(ApprovalsRepository::new(api));
        let toasts = use_toasts();
        let (initial, ticket) = ApprovalsState::new(load_saved_tab(), default_page_size());
        let vm = Self {
            state: create_rw_signal(initial),
            toasts,
            reject_target: create_rw_signal(None),
            reject_reason: create_rw_signal(String::new()),
            action_pending: create_rw_signal(false),
            repository,
        };
        vm.fetch(ticket);
        vm
    }

    fn fetch(&self, ticket: FetchTicket<ApprovalKind>) {
        let state = self.state;
        let toasts = self.toasts;
        let repo = self.repository.get_value();
        spawn_local(async move {
            let result = repo.list(ticket.tab).await;
            let message = result.as_ref().err().map(|err| err.error.clone());
            let mut completion = FetchCompletion::Stale;
            state.update(|s| completion = s.complete(ticket, result));
            match completion {
                FetchCompletion::Failed { notify } => {
                    let message = message.unwrap_or_default();
                    log::error!("{} list failed: {}", ticket.tab.key(), message);
                    if notify {
                        toasts.error(&message);
                    }
                }
                FetchCompletion::Stale => {
                    log::debug!("discarded stale {} response", ticket.tab.key());
                }
                FetchCompletion::Applied => {}
            }
        });
    }

    pub fn active(&self) -> Signal<ApprovalKind> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.active()))
    }

    pub fn select_tab(&self, kind: ApprovalKind) {
        let mut ticket = None;
        self.state.update(|s| ticket = s.select(kind));
        self.reject_target.set(None);
        save_tab(kind);
        if let Some(ticket) = ticket {
            self.fetch(ticket);
        }
    }

    pub fn refresh(&self) {
        self.refresh_kind(self.state.with_untracked(|s| s.active()));
    }

    /// Refetches `kind` even when the user has since switched away from it.
    pub fn refresh_kind(&self, kind: ApprovalKind) {
        let mut ticket = None;
        self.state.update(|s| ticket = Some(s.refresh_kind(kind)));
        if let Some(ticket) = ticket {
            self.fetch(ticket);
        }
    }

    pub fn visible_rows(&self) -> Signal<Vec<ApprovalRequest>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.visible()))
    }

    pub fn active_cache(&self) -> Signal<RemoteCache<ApprovalRequest>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.active_cache().cloned().unwrap_or_default()))
    }

    pub fn paginator(&self) -> Signal<Paginator> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.paginator().clone()))
    }

    pub fn has_filtered_rows(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| !s.filtered().is_empty()))
    }

    pub fn type_options(&self) -> Signal<Vec<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| distinct_types(s.records())))
    }

    pub fn search(&self) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.filters().search.clone()))
    }

    pub fn status_filter(&self) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.filters().status.clone()))
    }

    pub fn type_filter(&self) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.filters().kind.clone()))
    }

    pub fn sort(&self) -> Signal<Option<SortOrder>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.filters().sort))
    }

    pub fn set_search(&self, value: String) {
        self.state.update(|s| s.set_search(value));
    }

    pub fn set_status(&self, value: String) {
        self.state.update(|s| s.set_status(value));
    }

    pub fn set_type(&self, value: String) {
        self.state.update(|s| s.set_kind(value));
    }

    pub fn toggle_sort(&self) {
        self.state.update(|s| s.toggle_sort());
    }

    pub fn next_page(&self) {
        self.state.update(|s| s.next_page());
    }

    pub fn prev_page(&self) {
        self.state.update(|s| s.prev_page());
    }

    /// Jumps to `page`; an out-of-range page leaves the current one and
    /// shows an error toast.
    pub fn go_to(&self, page: usize) {
        let mut outcome = Ok(());
        self.state.update(|s| outcome = s.go_to(page));
        if let Err(err) = outcome {
            log::warn!("approvals {}", err);
            self.toasts.error(&err.to_string());
        }
    }

    pub fn set_page_size(&self, size: PageSize) {
        self.state.update(|s| s.set_page_size(size));
    }

    pub fn approve(&self, id: String) {
        self.run(ActionRequest::approve(id));
    }

    /// Opens the reason modal for a rejection.
    pub fn begin_reject(&self, id: String) {
        self.reject_reason.set(String::new());
        self.reject_target.set(Some(id));
    }

    pub fn cancel_reject(&self) {
        self.reject_target.set(None);
        self.reject_reason.set(String::new());
    }

    pub fn confirm_reject(&self, reason: String) {
        let Some(id) = self.reject_target.get_untracked() else {
            return;
        };
        let reason = Some(reason).filter(|r| !r.trim().is_empty());
        self.run(ActionRequest::reject(id, reason));
    }

    fn run(&self, request: ActionRequest) {
        if self.action_pending.get_untracked() {
            return;
        }
        let vm = *self;
        let (kind, records) = self
            .state
            .with_untracked(|s| (s.active(), s.records().to_vec()));
        let repo = self.repository.get_value();
        self.action_pending.set(true);
        spawn_local(async move {
            let dispatcher = ActionDispatcher::new(kind, vm.toasts);
            let result = dispatcher
                .apply(
                    &records,
                    request,
                    |kind, payload| async move { repo.update_status(kind, payload).await },
                    move || vm.refresh_kind(kind),
                )
                .await;
            vm.action_pending.set(false);
            if result.is_ok() {
                vm.cancel_reject();
            }
        });
    }
}

pub fn use_approvals_view_model() -> ApprovalsViewModel {
    match use_context::<ApprovalsViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = ApprovalsViewModel::new();
            provide_context(vm);
            vm
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::state::tabs::LoadState;
    use crate::state::toast::ToastKind;
    use crate::test_support::helpers::{provide_app, toast_messages};
    use crate::test_support::ssr::{wait_until, with_local_runtime_async};
    use serde_json::json;

    fn leave_rows(count: usize) -> serde_json::Value {
        let rows: Vec<_> = (0..count)
            .map(|i| {
                json!({
                    "_id": format!("x{}", i + 1),
                    "employeeInfo": { "employeeName": if i % 2 == 0 { "John Doe" } else { "Jane" } },
                    "leaveType": "Casual",
                    "status": "Pending"
                })
            })
            .collect();
        json!({ "data": rows, "totalRecords": count })
    }

    fn mock_server() -> MockServer {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/leave/requests");
            then.status(200).json_body(leave_rows(23));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/comp-off/requests");
            then.status(200).json_body(json!({ "data": [] }));
        });
        server.mock(|when, then| {
            when.method(PUT).path("/api/leave/requests/status");
            then.status(200).json_body(json!({ "success": true }));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/vendor-meetings");
            then.status(500).json_body(json!({ "message": "Vendor service down" }));
        });
        server
    }

    fn loaded(vm: ApprovalsViewModel, kind: ApprovalKind) -> impl Fn() -> bool {
        move || vm.state.with_untracked(|s| s.load_state(kind) != LoadState::Loading)
    }

    #[test]
    fn loads_default_tab_and_switch_resets_filters() {
        with_local_runtime_async(|| async {
            let server = mock_server();
            provide_app(&server);
            let vm = ApprovalsViewModel::new();
            assert!(wait_until(loaded(vm, ApprovalKind::Leave)).await);
            assert_eq!(vm.visible_rows().get_untracked().len(), 10);
            assert_eq!(vm.paginator().get_untracked().total_pages(), 3);

            vm.set_search("john".into());
            vm.set_status("Pending".into());
            vm.next_page();
            assert_eq!(vm.paginator().get_untracked().page(), 2);

            vm.select_tab(ApprovalKind::CompOff);
            assert_eq!(vm.search().get_untracked(), "");
            assert_eq!(vm.status_filter().get_untracked(), "");
            assert_eq!(vm.paginator().get_untracked().page(), 1);
            assert!(wait_until(loaded(vm, ApprovalKind::CompOff)).await);
            assert!(vm.active_cache().get_untracked().is_empty_result());

            vm.select_tab(ApprovalKind::Leave);
            assert_eq!(server.hits(GET, "/api/leave/requests"), 1);
        });
    }

    #[test]
    fn approve_shows_success_and_refetches() {
        with_local_runtime_async(|| async {
            let server = mock_server();
            let toasts = provide_app(&server);
            let vm = ApprovalsViewModel::new();
            assert!(wait_until(loaded(vm, ApprovalKind::Leave)).await);

            vm.approve("x1".into());
            assert!(wait_until(|| server.hits(GET, "/api/leave/requests") == 2).await);
            assert!(wait_until(|| !vm.action_pending.get_untracked()).await);
            assert_eq!(
                toast_messages(toasts, ToastKind::Success),
                vec!["Leave request approved".to_string()]
            );
            assert!(toast_messages(toasts, ToastKind::Loading).is_empty());
        });
    }

    #[test]
    fn leave_reject_without_reason_sends_nothing() {
        with_local_runtime_async(|| async {
            let server = mock_server();
            let toasts = provide_app(&server);
            let vm = ApprovalsViewModel::new();
            assert!(wait_until(loaded(vm, ApprovalKind::Leave)).await);

            vm.begin_reject("x1".into());
            vm.confirm_reject("   ".into());
            assert!(wait_until(|| !vm.action_pending.get_untracked()).await);
            assert_eq!(server.hits(PUT, "/api/leave/requests/status"), 0);
            assert_eq!(toast_messages(toasts, ToastKind::Error).len(), 1);
            assert!(vm.reject_target.get_untracked().is_some());
        });
    }

    #[test]
    fn approval_refetches_its_own_tab_after_a_switch() {
        with_local_runtime_async(|| async {
            let server = mock_server();
            let toasts = provide_app(&server);
            let vm = ApprovalsViewModel::new();
            assert!(wait_until(loaded(vm, ApprovalKind::Leave)).await);

            vm.approve("x1".into());
            vm.select_tab(ApprovalKind::CompOff);
            assert!(wait_until(|| !vm.action_pending.get_untracked()).await);
            assert!(wait_until(|| server.hits(GET, "/api/leave/requests") == 2).await);
            assert!(wait_until(loaded(vm, ApprovalKind::Leave)).await);
            assert_eq!(
                toast_messages(toasts, ToastKind::Success),
                vec!["Leave request approved".to_string()]
            );
            assert_eq!(vm.active().get_untracked(), ApprovalKind::CompOff);
            assert!(wait_until(loaded(vm, ApprovalKind::CompOff)).await);
            assert!(vm.active_cache().get_untracked().is_empty_result());

            vm.select_tab(ApprovalKind::Leave);
            assert!(wait_until(|| server.hits(GET, "/api/leave/requests") == 3).await);
            assert!(wait_until(loaded(vm, ApprovalKind::Leave)).await);
            assert_eq!(
                vm.state.with_untracked(|s| s.load_state(ApprovalKind::Leave)),
                LoadState::Loaded
            );
        });
    }

    #[test]
    fn unknown_record_is_rejected_without_a_request() {
        with_local_runtime_async(|| async {
            let server = mock_server();
            let toasts = provide_app(&server);
            let vm = ApprovalsViewModel::new();
            assert!(wait_until(loaded(vm, ApprovalKind::Leave)).await);

            vm.approve("missing".into());
            assert!(wait_until(|| !vm.action_pending.get_untracked()).await);
            assert_eq!(server.hits(PUT, "/api/leave/requests/status"), 0);
            assert_eq!(server.hits(GET, "/api/leave/requests"), 1);
            assert_eq!(
                toast_messages(toasts, ToastKind::Error),
                vec!["Request not found. Refresh the list and try again.".to_string()]
            );
            assert!(toast_messages(toasts, ToastKind::Success).is_empty());
        });
    }

    #[test]
    fn go_to_out_of_range_page_toasts_and_stays() {
        with_local_runtime_async(|| async {
            let server = mock_server();
            let toasts = provide_app(&server);
            let vm = ApprovalsViewModel::new();
            assert!(wait_until(loaded(vm, ApprovalKind::Leave)).await);

            vm.go_to(2);
            assert_eq!(vm.paginator().get_untracked().page(), 2);
            vm.go_to(4);
            assert_eq!(vm.paginator().get_untracked().page(), 2);
            assert_eq!(
                toast_messages(toasts, ToastKind::Error),
                vec!["Page 4 is out of range (1-3).".to_string()]
            );
            vm.go_to(3);
            assert_eq!(vm.visible_rows().get_untracked().len(), 3);
        });
    }

    #[test]
    fn failed_tab_load_toasts_once() {
        with_local_runtime_async(|| async {
            let server = mock_server();
            let toasts = provide_app(&server);
            let vm = ApprovalsViewModel::new();
            assert!(wait_until(loaded(vm, ApprovalKind::Leave)).await);

            vm.select_tab(ApprovalKind::VendorMeeting);
            assert!(wait_until(loaded(vm, ApprovalKind::VendorMeeting)).await);
            vm.refresh();
            assert!(wait_until(|| server.hits(GET, "/api/vendor-meetings") == 2).await);
            assert!(wait_until(loaded(vm, ApprovalKind::VendorMeeting)).await);

            assert_eq!(
                toast_messages(toasts, ToastKind::Error),
                vec!["Vendor service down".to_string()]
            );
            assert!(vm.active_cache().get_untracked().error().is_some());
        });
    }
}
