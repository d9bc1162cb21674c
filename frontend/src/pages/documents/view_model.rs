use super::{repository::DocumentsRepository, utils::UploadFormState};
use crate::api::{ApiClient, ApiError, Document};
use crate::config;
use crate::listing::PageSize;
use crate::state::{
    list::ListState,
    list_view::ListViewModel,
    toast::{use_toasts, Notifier, ToastContext},
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct DocumentsViewModel {
    pub list: ListViewModel<Document>,
    pub upload_form: UploadFormState,
    pub upload_error: RwSignal<Option<ApiError>>,
    pub uploading: RwSignal<bool>,
    toasts: ToastContext,
    repository: StoredValue<DocumentsRepository>,
}

impl DocumentsViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let toasts = use_toasts();
        let page_size = PageSize::from_raw(config::current().page_size).unwrap_or(PageSize::All);
        let vm = Self {
            list: ListViewModel::new("documents", ListState::client_paged(page_size), toasts),
            upload_form: UploadFormState::default(),
            upload_error: create_rw_signal(None),
            uploading: create_rw_signal(false),
            toasts,
            repository: store_value(DocumentsRepository::new(api)),
        };
        vm.reload();
        vm
    }

    pub fn reload(&self) {
        let repo = self.repository.get_value();
        self.list.load(async move { repo.list().await });
    }

    pub fn upload(&self) {
        if self.uploading.get_untracked() {
            return;
        }
        let upload = match self.upload_form.to_upload() {
            Ok(upload) => upload,
            Err(err) => {
                log::warn!("upload rejected: {}", err.error);
                self.toasts.error(&err.error);
                self.upload_error.set(Some(err));
                return;
            }
        };
        let vm = *self;
        let repo = self.repository.get_value();
        self.upload_error.set(None);
        self.uploading.set(true);
        spawn_local(async move {
            let result = repo.upload(upload).await;
            vm.uploading.set(false);
            match result {
                Ok(_) => {
                    vm.toasts.success("Document uploaded");
                    vm.upload_form.reset();
                    vm.reload();
                }
                Err(err) => {
                    log::error!("document upload failed: {}", err.error);
                    vm.toasts.error(&err.error);
                    vm.upload_error.set(Some(err));
                }
            }
        });
    }
}

pub fn use_documents_view_model() -> DocumentsViewModel {
    match use_context::<DocumentsViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = DocumentsViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
