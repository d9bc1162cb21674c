use super::{repository::HolidaysRepository, utils::holiday_types};
use crate::api::{ApiClient, Holiday};
use crate::listing::{PageSize, SortOrder};
use crate::state::{list::ListState, list_view::ListViewModel, toast::use_toasts};
use leptos::*;

#[derive(Clone, Copy)]
pub struct HolidaysViewModel {
    pub list: ListViewModel<Holiday>,
    repository: StoredValue<HolidaysRepository>,
}

impl HolidaysViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let list = ListViewModel::new("holidays", ListState::client_paged(PageSize::All), use_toasts());
        // calendar order until the user flips it
        list.set_sort(Some(SortOrder::Ascending));
        let vm = Self {
            list,
            repository: store_value(HolidaysRepository::new(api)),
        };
        vm.reload();
        vm
    }

    pub fn reload(&self) {
        let repo = self.repository.get_value();
        self.list.load(async move { repo.holidays().await });
    }

    pub fn type_options(&self) -> Signal<Vec<String>> {
        let records = self.list.records();
        Signal::derive(move || records.with(|rows| holiday_types(rows)))
    }
}

pub fn use_holidays_view_model() -> HolidaysViewModel {
    match use_context::<HolidaysViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = HolidaysViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
