use super::{
    repository::PayrollRepository,
    utils::{PeriodFormState, DEFAULT_PAGE_LIMIT},
};
use crate::api::{ApiClient, PayrollRow};
use crate::config;
use crate::listing::Paginator;
use crate::state::{list::ListState, list_view::ListViewModel, toast::use_toasts};
use leptos::*;
use std::num::NonZeroUsize;

#[derive(Clone, Copy)]
pub struct PayrollViewModel {
    pub list: ListViewModel<PayrollRow>,
    pub period_form: PeriodFormState,
    pub period_error: RwSignal<Option<String>>,
    period: RwSignal<(Option<u32>, Option<i32>)>,
    repository: StoredValue<PayrollRepository>,
}

fn server_limit() -> NonZeroUsize {
    usize::try_from(config::current().page_size)
        .ok()
        .and_then(NonZeroUsize::new)
        .or_else(|| NonZeroUsize::new(DEFAULT_PAGE_LIMIT))
        .unwrap_or(NonZeroUsize::MIN)
}

impl PayrollViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let vm = Self {
            list: ListViewModel::new(
                "payroll",
                ListState::new(Paginator::server(server_limit())),
                use_toasts(),
            ),
            period_form: PeriodFormState::default(),
            period_error: create_rw_signal(None),
            period: create_rw_signal((None, None)),
            repository: store_value(PayrollRepository::new(api)),
        };
        vm.reload();
        vm
    }

    /// Fetches the paginator's current page for the applied period.
    pub fn reload(&self) {
        self.fetch(None);
    }

    fn fetch(&self, previous: Option<usize>) {
        let (page, limit) = self.list.paginator().with_untracked(|p| p.query());
        let (month, year) = self.period.get_untracked();
        let repo = self.repository.get_value();
        let request = async move { repo.page(page, limit, month, year).await };
        match previous {
            Some(previous) => self.list.load_page(previous, request),
            None => self.list.load(request),
        }
    }

    /// Applies a page move and fetches the new page; the move is undone if
    /// that fetch fails.
    fn turn_page(&self, step: impl FnOnce(&ListViewModel<PayrollRow>)) {
        let before = self.list.current_page();
        step(&self.list);
        if self.list.current_page() != before {
            self.fetch(Some(before));
        }
    }

    pub fn apply_period(&self) {
        match self.period_form.to_period() {
            Ok(period) => {
                self.period_error.set(None);
                self.period.set(period);
                self.list.reset_page();
                self.reload();
            }
            Err(message) => {
                log::warn!("payroll period rejected: {}", message);
                self.period_error.set(Some(message));
            }
        }
    }

    pub fn next_page(&self) {
        self.turn_page(|list| list.next_page());
    }

    pub fn prev_page(&self) {
        self.turn_page(|list| list.prev_page());
    }

    pub fn go_to(&self, page: usize) {
        self.turn_page(|list| list.go_to(page));
    }
}

pub fn use_payroll_view_model() -> PayrollViewModel {
    match use_context::<PayrollViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = PayrollViewModel::new();
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
        let rows: Vec<_> = (1..=10)
            .map(|n| json!({ "employeeName": format!("Employee {}", n), "month": 1, "year": 2025 }))
            .collect();
        server.mock(|when, then| {
            when.method(GET).path("/api/payroll");
            then.status(200)
                .json_body(json!({ "data": rows, "totalRecords": 23 }));
        });
        server
    }

    #[test]
    fn paging_requests_the_next_server_page() {
        with_local_runtime_async(|| async {
            let server = mock_server();
            provide_app(&server);
            let vm = PayrollViewModel::new();
            assert!(wait_until(|| vm.list.cache().get_untracked().is_loaded()).await);
            let first = server.last_call(GET, "/api/payroll").unwrap();
            assert_eq!(first.query.as_deref(), Some("page=1&limit=10"));
            assert_eq!(vm.list.paginator().get_untracked().total_pages(), 3);

            vm.next_page();
            assert!(wait_until(|| server.hits(GET, "/api/payroll") == 2).await);
            let second = server.last_call(GET, "/api/payroll").unwrap();
            assert_eq!(second.query.as_deref(), Some("page=2&limit=10"));
            vm.prev_page();
            vm.prev_page();
            assert!(wait_until(|| server.hits(GET, "/api/payroll") == 3).await);
        });
    }

    #[test]
    fn failed_page_fetch_keeps_pager_on_shown_page() {
        with_local_runtime_async(|| async {
            let server = mock_server();
            server.mock(|when, then| {
                when.method(GET).path("/api/payroll").query("page=2&limit=10");
                then.status(500).json_body(json!({ "message": "Payroll service down" }));
            });
            let toasts = provide_app(&server);
            let vm = PayrollViewModel::new();
            assert!(wait_until(|| vm.list.cache().get_untracked().is_loaded()).await);

            vm.next_page();
            assert_eq!(vm.list.current_page(), 2);
            assert!(wait_until(|| vm.list.error().get_untracked().is_some()).await);
            assert_eq!(vm.list.current_page(), 1);
            assert_eq!(vm.list.visible().get_untracked().len(), 10);
            assert_eq!(
                toast_messages(toasts, ToastKind::Error),
                vec!["Payroll service down".to_string()]
            );

            vm.go_to(3);
            assert!(wait_until(|| server.hits(GET, "/api/payroll") == 3).await);
            let call = server.last_call(GET, "/api/payroll").unwrap();
            assert_eq!(call.query.as_deref(), Some("page=3&limit=10"));
            assert!(wait_until(|| vm.list.error().get_untracked().is_none()).await);
            assert_eq!(vm.list.current_page(), 3);

            vm.go_to(7);
            assert_eq!(vm.list.current_page(), 3);
            assert_eq!(server.hits(GET, "/api/payroll"), 3);
        });
    }

    #[test]
    fn period_filter_goes_back_to_first_page() {
        with_local_runtime_async(|| async {
            let server = mock_server();
            provide_app(&server);
            let vm = PayrollViewModel::new();
            assert!(wait_until(|| vm.list.cache().get_untracked().is_loaded()).await);
            vm.next_page();
            assert!(wait_until(|| server.hits(GET, "/api/payroll") == 2).await);

            vm.period_form.month_signal().set("2".into());
            vm.apply_period();
            assert!(vm.period_error.get_untracked().is_some());

            vm.period_form.year_signal().set("2025".into());
            vm.apply_period();
            assert!(wait_until(|| server.hits(GET, "/api/payroll") == 3).await);
            let call = server.last_call(GET, "/api/payroll").unwrap();
            assert_eq!(call.query.as_deref(), Some("page=1&limit=10&month=2&year=2025"));
        });
    }
}
