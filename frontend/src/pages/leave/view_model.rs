use super::{
    repository::LeaveRepository,
    utils::{CompOffFormState, LeaveFormState, RevertFormState},
};
use crate::api::{ApiClient, ApiError, ApprovalRequest, MutationEnvelope};
use crate::config;
use crate::listing::PageSize;
use crate::state::{
    list::ListState,
    list_view::ListViewModel,
    toast::{use_toasts, Notifier, ToastContext},
};
use leptos::*;
use std::future::Future;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeaveForm {
    Leave,
    CompOff,
    Revert,
}

impl LeaveForm {
    fn success_message(&self) -> &'static str {
        match self {
            LeaveForm::Leave => "Leave request submitted",
            LeaveForm::CompOff => "Comp-off request submitted",
            LeaveForm::Revert => "Revert request submitted",
        }
    }
}

#[derive(Clone, Copy)]
pub struct LeaveViewModel {
    pub list: ListViewModel<ApprovalRequest>,
    pub leave_form: LeaveFormState,
    pub comp_off_form: CompOffFormState,
    pub revert_form: RevertFormState,
    pub form_error: RwSignal<Option<(LeaveForm, ApiError)>>,
    pub submitting: RwSignal<Option<LeaveForm>>,
    toasts: ToastContext,
    repository: StoredValue<LeaveRepository>,
}

impl LeaveViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let toasts = use_toasts();
        let page_size = PageSize::from_raw(config::current().page_size).unwrap_or(PageSize::All);
        let vm = Self {
            list: ListViewModel::new("leave", ListState::client_paged(page_size), toasts),
            leave_form: LeaveFormState::default(),
            comp_off_form: CompOffFormState::default(),
            revert_form: RevertFormState::default(),
            form_error: create_rw_signal(None),
            submitting: create_rw_signal(None),
            toasts,
            repository: store_value(LeaveRepository::new(api)),
        };
        vm.reload();
        vm
    }

    pub fn reload(&self) {
        let repo = self.repository.get_value();
        self.list.load(async move { repo.my_leaves().await });
    }

    pub fn error_for(&self, form: LeaveForm) -> Signal<Option<ApiError>> {
        let form_error = self.form_error;
        Signal::derive(move || {
            form_error.with(|current| match current {
                Some((owner, err)) if *owner == form => Some(err.clone()),
                _ => None,
            })
        })
    }

    pub fn is_submitting(&self, form: LeaveForm) -> Signal<bool> {
        let submitting = self.submitting;
        Signal::derive(move || submitting.get() == Some(form))
    }

    pub fn submit(&self, form: LeaveForm) {
        if self.submitting.get_untracked().is_some() {
            return;
        }
        let repo = self.repository.get_value();
        match form {
            LeaveForm::Leave => match self.leave_form.to_payload() {
                Ok(payload) => self.send(form, async move { repo.apply_leave(payload).await }),
                Err(err) => self.reject(form, err),
            },
            LeaveForm::CompOff => match self.comp_off_form.to_payload() {
                Ok(payload) => self.send(form, async move { repo.apply_comp_off(payload).await }),
                Err(err) => self.reject(form, err),
            },
            LeaveForm::Revert => {
                let leaves = self.list.records().get_untracked();
                match self.revert_form.to_payload(&leaves) {
                    Ok(payload) => {
                        self.send(form, async move { repo.request_revert(payload).await })
                    }
                    Err(err) => self.reject(form, err),
                }
            }
        }
    }

    fn reject(&self, form: LeaveForm, err: ApiError) {
        log::warn!("{:?} form rejected: {}", form, err.error);
        self.toasts.error(&err.error);
        self.form_error.set(Some((form, err)));
    }

    fn send<Fut>(&self, form: LeaveForm, request: Fut)
    where
        Fut: Future<Output = Result<MutationEnvelope, ApiError>> + 'static,
    {
        let vm = *self;
        self.form_error.set(None);
        self.submitting.set(Some(form));
        spawn_local(async move {
            let result = request.await;
            vm.submitting.set(None);
            match result {
                Ok(_) => {
                    vm.toasts.success(form.success_message());
                    match form {
                        LeaveForm::Leave => vm.leave_form.reset(),
                        LeaveForm::CompOff => vm.comp_off_form.reset(),
                        LeaveForm::Revert => vm.revert_form.reset(),
                    }
                    vm.reload();
                }
                Err(err) => {
                    log::error!("{:?} submission failed: {}", form, err.error);
                    vm.toasts.error(&err.error);
                    vm.form_error.set(Some((form, err)));
                }
            }
        });
    }
}

pub fn use_leave_view_model() -> LeaveViewModel {
    match use_context::<LeaveViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = LeaveViewModel::new();
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
            when.method(GET).path("/api/leave/requests");
            then.status(200).json_body(json!({
                "data": [
                    { "_id": "l1", "leaveType": "Casual", "status": "Approved", "totalDays": 2 },
                    { "_id": "l2", "leaveType": "Sick", "status": "Pending", "totalDays": 1 }
                ]
            }));
        });
        server.mock(|when, then| {
            when.method(POST).path("/api/leave/revert");
            then.status(200).json_body(json!({ "success": true }));
        });
        server.mock(|when, then| {
            when.method(POST).path("/api/comp-off/apply");
            then.status(422).json_body(json!({ "message": "Worked date is a holiday" }));
        });
        server
    }

    #[test]
    fn invalid_revert_never_reaches_server() {
        with_local_runtime_async(|| async {
            let server = mock_server();
            let toasts = provide_app(&server);
            let vm = LeaveViewModel::new();
            assert!(wait_until(|| vm.list.cache().get_untracked().is_loaded()).await);

            vm.revert_form.leave_signal().set("l1".into());
            vm.revert_form.days_signal().set("3".into());
            vm.submit(LeaveForm::Revert);
            assert_eq!(server.hits(POST, "/api/leave/revert"), 0);
            assert!(vm.error_for(LeaveForm::Revert).get_untracked().is_some());
            assert!(vm.error_for(LeaveForm::Leave).get_untracked().is_none());
            assert_eq!(toast_messages(toasts, ToastKind::Error).len(), 1);
        });
    }

    #[test]
    fn revert_submits_and_reloads() {
        with_local_runtime_async(|| async {
            let server = mock_server();
            let toasts = provide_app(&server);
            let vm = LeaveViewModel::new();
            assert!(wait_until(|| vm.list.cache().get_untracked().is_loaded()).await);

            vm.revert_form.leave_signal().set("l1".into());
            vm.revert_form.days_signal().set("1.5".into());
            vm.submit(LeaveForm::Revert);
            assert!(wait_until(|| server.hits(GET, "/api/leave/requests") == 2).await);
            let body = server
                .last_call(POST, "/api/leave/revert")
                .and_then(|call| call.json_body())
                .unwrap();
            assert_eq!(body["leaveId"], "l1");
            assert_eq!(body["revertDays"], 1.5);
            assert_eq!(
                toast_messages(toasts, ToastKind::Success),
                vec!["Revert request submitted".to_string()]
            );
            assert_eq!(vm.revert_form.leave_signal().get_untracked(), "");
        });
    }

    #[test]
    fn server_rejection_keeps_form_values() {
        with_local_runtime_async(|| async {
            let server = mock_server();
            provide_app(&server);
            let vm = LeaveViewModel::new();
            vm.comp_off_form.worked_signal().set("2025-01-26".into());
            vm.submit(LeaveForm::CompOff);
            assert!(wait_until(|| vm.submitting.get_untracked().is_none()).await);
            assert_eq!(
                vm.error_for(LeaveForm::CompOff)
                    .get_untracked()
                    .map(|err| err.error),
                Some("Worked date is a holiday".to_string())
            );
            assert_eq!(vm.comp_off_form.worked_signal().get_untracked(), "2025-01-26");
        });
    }
}
