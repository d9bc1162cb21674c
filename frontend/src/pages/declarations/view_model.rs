use super::{repository::DeclarationRepository, utils::DeclarationFormState};
use crate::api::{ApiClient, ApiError};
use crate::state::toast::{use_toasts, Notifier, ToastContext};
use crate::utils::storage::{load_preference, save_preference, EMPLOYEE_ID_KEY};
use leptos::*;

/// Whether the loaded employee already had a declaration on file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeclarationStatus {
    NotLoaded,
    Existing,
    New,
}

#[derive(Clone, Copy)]
pub struct DeclarationViewModel {
    pub form: DeclarationFormState,
    pub lookup: RwSignal<String>,
    pub status: RwSignal<DeclarationStatus>,
    pub loading: RwSignal<bool>,
    pub submitting: RwSignal<bool>,
    pub error: RwSignal<Option<ApiError>>,
    seq: StoredValue<u64>,
    toasts: ToastContext,
    repository: StoredValue<DeclarationRepository>,
}

impl DeclarationViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let saved = load_preference(EMPLOYEE_ID_KEY);
        let vm = Self {
            form: DeclarationFormState::default(),
            lookup: create_rw_signal(saved.clone().unwrap_or_default()),
            status: create_rw_signal(DeclarationStatus::NotLoaded),
            loading: create_rw_signal(false),
            submitting: create_rw_signal(false),
            error: create_rw_signal(None),
            seq: store_value(0),
            toasts: use_toasts(),
            repository: store_value(DeclarationRepository::new(api)),
        };
        if saved.is_some() {
            vm.load();
        }
        vm
    }

    pub fn load(&self) {
        let employee_id = self.lookup.get_untracked().trim().to_string();
        if employee_id.is_empty() {
            self.fail(ApiError::validation("Enter an employee ID to load."));
            return;
        }
        let seq = self.seq.get_value() + 1;
        self.seq.set_value(seq);
        let vm = *self;
        let repo = self.repository.get_value();
        self.error.set(None);
        self.loading.set(true);
        spawn_local(async move {
            let result = repo.load(&employee_id).await;
            if vm.seq.get_value() != seq {
                log::debug!("dropping stale declaration for {}", employee_id);
                return;
            }
            vm.loading.set(false);
            match result {
                Ok(Some(declaration)) => {
                    vm.form.fill(&declaration);
                    if vm.form.personal.employee_id.get_untracked().trim().is_empty() {
                        vm.form.personal.employee_id.set(employee_id.clone());
                    }
                    vm.status.set(DeclarationStatus::Existing);
                    save_preference(EMPLOYEE_ID_KEY, &employee_id);
                }
                Ok(None) => {
                    vm.form.start_blank(&employee_id);
                    vm.status.set(DeclarationStatus::New);
                    vm.toasts.info("No declaration on file yet");
                    save_preference(EMPLOYEE_ID_KEY, &employee_id);
                }
                Err(err) => {
                    log::error!("declaration load failed: {}", err.error);
                    vm.fail(err);
                }
            }
        });
    }

    pub fn submit(&self) {
        if self.submitting.get_untracked() {
            return;
        }
        let declaration = match self.form.to_declaration() {
            Ok(declaration) => declaration,
            Err(err) => {
                log::warn!("declaration rejected: {}", err.error);
                self.fail(err);
                return;
            }
        };
        let vm = *self;
        let repo = self.repository.get_value();
        self.error.set(None);
        self.submitting.set(true);
        spawn_local(async move {
            let result = repo.submit(declaration).await;
            vm.submitting.set(false);
            match result {
                Ok(_) => {
                    vm.toasts.success("Declaration saved");
                    vm.status.set(DeclarationStatus::Existing);
                }
                Err(err) => {
                    log::error!("declaration submit failed: {}", err.error);
                    vm.fail(err);
                }
            }
        });
    }

    fn fail(&self, err: ApiError) {
        self.toasts.error(&err.error);
        self.error.set(Some(err));
    }
}

pub fn use_declaration_view_model() -> DeclarationViewModel {
    match use_context::<DeclarationViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = DeclarationViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
