use super::{
    repository::AttendanceRepository,
    utils::{month_bounds, RangeFormState},
};
use crate::api::{ApiClient, AttendanceRecord};
use crate::config;
use crate::listing::PageSize;
use crate::state::{
    list::ListState,
    list_view::ListViewModel,
    toast::{use_toasts, Notifier, ToastContext},
};
use crate::utils::time::today_in_app_tz;
use chrono::NaiveDate;
use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PunchKind {
    In,
    Out,
}

impl PunchKind {
    fn done_message(&self) -> &'static str {
        match self {
            PunchKind::In => "Punched in",
            PunchKind::Out => "Punched out",
        }
    }
}

#[derive(Clone, Copy)]
pub struct AttendanceViewModel {
    pub list: ListViewModel<AttendanceRecord>,
    pub range_form: RangeFormState,
    pub range_error: RwSignal<Option<String>>,
    pub punch_pending: RwSignal<bool>,
    range: RwSignal<(Option<NaiveDate>, Option<NaiveDate>)>,
    toasts: ToastContext,
    repository: StoredValue<AttendanceRepository>,
}

impl AttendanceViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let toasts = use_toasts();
        let page_size = PageSize::from_raw(config::current().page_size).unwrap_or(PageSize::All);
        let today = today_in_app_tz();
        let (from, to) = month_bounds(today).unwrap_or((today, today));
        let range_form = RangeFormState::new();
        range_form.set_range(from, to);
        let vm = Self {
            list: ListViewModel::new("attendance", ListState::client_paged(page_size), toasts),
            range_form,
            range_error: create_rw_signal(None),
            punch_pending: create_rw_signal(false),
            range: create_rw_signal((Some(from), Some(to))),
            toasts,
            repository: store_value(AttendanceRepository::new(api)),
        };
        vm.reload();
        vm
    }

    pub fn reload(&self) {
        let (from, to) = self.range.get_untracked();
        let repo = self.repository.get_value();
        self.list.load(async move { repo.history(from, to).await });
    }

    pub fn apply_range(&self) {
        match self.range_form.to_range() {
            Ok(range) => {
                self.range_error.set(None);
                self.range.set(range);
                self.reload();
            }
            Err(message) => {
                log::warn!("attendance range rejected: {}", message);
                self.range_error.set(Some(message));
            }
        }
    }

    pub fn select_current_month(&self) {
        let today = today_in_app_tz();
        if let Some((from, to)) = month_bounds(today) {
            self.range_form.set_range(from, to);
            self.apply_range();
        }
    }

    pub fn punch(&self, kind: PunchKind) {
        if self.punch_pending.get_untracked() {
            return;
        }
        let vm = *self;
        let repo = self.repository.get_value();
        self.punch_pending.set(true);
        spawn_local(async move {
            let result = match kind {
                PunchKind::In => repo.punch_in().await,
                PunchKind::Out => repo.punch_out().await,
            };
            vm.punch_pending.set(false);
            match result {
                Ok(_) => {
                    vm.toasts.success(kind.done_message());
                    vm.reload();
                }
                Err(err) => {
                    log::error!("punch {:?} failed: {}", kind, err.error);
                    vm.toasts.error(&err.error);
                }
            }
        });
    }
}

pub fn use_attendance_view_model() -> AttendanceViewModel {
    match use_context::<AttendanceViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = AttendanceViewModel::new();
            provide_context(vm);
            vm
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::state::toast::ToastKind;
    use crate::test_support::helpers::{provide_app, toast_messages};
    use crate::test_support::ssr::{wait_until, with_local_runtime_async};
    use serde_json::json;

    fn mock_server() -> MockServer {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/attendance");
            then.status(200).json_body(json!({
                "data": [
                    { "employeeName": "Asha", "attendanceDate": "2025-01-06", "status": "Present" },
                    { "employeeName": "Ravi", "attendanceDate": "2025-01-07", "status": "Absent" }
                ]
            }));
        });
        server.mock(|when, then| {
            when.method(POST).path("/api/attendance/punch-in");
            then.status(200).json_body(json!({ "status": "success" }));
        });
        server.mock(|when, then| {
            when.method(POST).path("/api/attendance/punch-out");
            then.status(409).json_body(json!({ "message": "Already punched out" }));
        });
        server
    }

    #[test]
    fn punch_in_refreshes_history() {
        with_local_runtime_async(|| async {
            let server = mock_server();
            let toasts = provide_app(&server);
            let vm = AttendanceViewModel::new();
            assert!(wait_until(|| vm.list.cache().get_untracked().is_loaded()).await);
            assert_eq!(server.hits(GET, "/api/attendance"), 1);

            vm.punch(PunchKind::In);
            assert!(wait_until(|| server.hits(GET, "/api/attendance") == 2).await);
            assert_eq!(
                toast_messages(toasts, ToastKind::Success),
                vec!["Punched in".to_string()]
            );
        });
    }

    #[test]
    fn failed_punch_out_keeps_history() {
        with_local_runtime_async(|| async {
            let server = mock_server();
            let toasts = provide_app(&server);
            let vm = AttendanceViewModel::new();
            assert!(wait_until(|| vm.list.cache().get_untracked().is_loaded()).await);

            vm.punch(PunchKind::Out);
            assert!(wait_until(|| !vm.punch_pending.get_untracked()).await);
            assert_eq!(
                toast_messages(toasts, ToastKind::Error),
                vec!["Already punched out".to_string()]
            );
            assert_eq!(server.hits(GET, "/api/attendance"), 1);
            assert_eq!(vm.list.records().get_untracked().len(), 2);
        });
    }

    #[test]
    fn invalid_range_blocks_fetch() {
        with_local_runtime_async(|| async {
            let server = mock_server();
            provide_app(&server);
            let vm = AttendanceViewModel::new();
            assert!(wait_until(|| vm.list.cache().get_untracked().is_loaded()).await);

            vm.range_form.from_signal().set("2025-03-10".into());
            vm.range_form.to_signal().set("2025-03-01".into());
            vm.apply_range();
            assert!(vm.range_error.get_untracked().is_some());
            assert_eq!(server.hits(GET, "/api/attendance"), 1);

            vm.range_form.to_signal().set("2025-03-31".into());
            vm.apply_range();
            assert!(wait_until(|| server.hits(GET, "/api/attendance") == 2).await);
            let call = server.last_call(GET, "/api/attendance").unwrap();
            assert_eq!(
                call.query.as_deref(),
                Some("dateFrom=2025-03-10&dateTo=2025-03-31")
            );
        });
    }
}
