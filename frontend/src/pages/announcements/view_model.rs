use super::{repository::AnnouncementsRepository, utils::AnnouncementFormState};
use crate::api::{Announcement, ApiClient, ApiError};
use crate::config;
use crate::listing::{PageSize, SortOrder};
use crate::state::{
    list::ListState,
    list_view::ListViewModel,
    toast::{use_toasts, Notifier, ToastContext},
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct AnnouncementsViewModel {
    pub list: ListViewModel<Announcement>,
    pub form: AnnouncementFormState,
    pub form_open: RwSignal<bool>,
    pub form_error: RwSignal<Option<ApiError>>,
    pub posting: RwSignal<bool>,
    toasts: ToastContext,
    repository: StoredValue<AnnouncementsRepository>,
}

impl AnnouncementsViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let toasts = use_toasts();
        let page_size = PageSize::from_raw(config::current().page_size).unwrap_or(PageSize::All);
        let list = ListViewModel::new("announcements", ListState::client_paged(page_size), toasts);
        list.set_sort(Some(SortOrder::Descending));
        let vm = Self {
            list,
            form: AnnouncementFormState::default(),
            form_open: create_rw_signal(false),
            form_error: create_rw_signal(None),
            posting: create_rw_signal(false),
            toasts,
            repository: store_value(AnnouncementsRepository::new(api)),
        };
        vm.reload();
        vm
    }

    pub fn reload(&self) {
        let repo = self.repository.get_value();
        self.list.load(async move { repo.list().await });
    }

    pub fn toggle_form(&self) {
        self.form_open.update(|open| *open = !*open);
        self.form_error.set(None);
    }

    pub fn post(&self) {
        if self.posting.get_untracked() {
            return;
        }
        let payload = match self.form.to_payload() {
            Ok(payload) => payload,
            Err(err) => {
                self.toasts.error(&err.error);
                self.form_error.set(Some(err));
                return;
            }
        };
        let vm = *self;
        let repo = self.repository.get_value();
        self.form_error.set(None);
        self.posting.set(true);
        spawn_local(async move {
            let result = repo.create(payload).await;
            vm.posting.set(false);
            match result {
                Ok(_) => {
                    vm.toasts.success("Announcement posted");
                    vm.form.reset();
                    vm.form_open.set(false);
                    vm.reload();
                }
                Err(err) => {
                    log::error!("announcement post failed: {}", err.error);
                    vm.toasts.error(&err.error);
                    vm.form_error.set(Some(err));
                }
            }
        });
    }
}

pub fn use_announcements_view_model() -> AnnouncementsViewModel {
    match use_context::<AnnouncementsViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = AnnouncementsViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
