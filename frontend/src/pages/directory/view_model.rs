use super::repository::DirectoryRepository;
use crate::api::{ApiClient, Employee};
use crate::config;
use crate::listing::PageSize;
use crate::state::{list::ListState, list_view::ListViewModel, toast::use_toasts};
use leptos::*;

#[derive(Clone, Copy)]
pub struct DirectoryViewModel {
    pub list: ListViewModel<Employee>,
    repository: StoredValue<DirectoryRepository>,
}

impl DirectoryViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let page_size = PageSize::from_raw(config::current().page_size).unwrap_or(PageSize::All);
        let vm = Self {
            list: ListViewModel::new(
                "employees",
                ListState::client_paged(page_size),
                use_toasts(),
            ),
            repository: store_value(DirectoryRepository::new(api)),
        };
        vm.reload();
        vm
    }

    pub fn reload(&self) {
        let repo = self.repository.get_value();
        self.list.load(async move { repo.employees().await });
    }
}

pub fn use_directory_view_model() -> DirectoryViewModel {
    match use_context::<DirectoryViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = DirectoryViewModel::new();
            provide_context(vm);
            vm
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::test_support::helpers::provide_app;
    use crate::test_support::ssr::{wait_until, with_local_runtime_async};
    use serde_json::json;
    use std::num::NonZeroUsize;

    #[test]
    fn pages_filtered_employees_on_the_client() {
        with_local_runtime_async(|| async {
            let server = MockServer::start();
            let employees: Vec<_> = (1..=12)
                .map(|n| json!({
                    "employeeName": format!("Employee {}", n),
                    "department": if n % 2 == 0 { "Sales" } else { "Ops" },
                    "status": "Active"
                }))
                .collect();
            server.mock(|when, then| {
                when.method(GET).path("/api/employees");
                then.status(200).json_body(json!({ "data": employees }));
            });
            provide_app(&server);
            let vm = DirectoryViewModel::new();
            assert!(wait_until(|| vm.list.cache().get_untracked().is_loaded()).await);

            vm.list.set_page_size(PageSize::Fixed(NonZeroUsize::new(5).unwrap()));
            assert_eq!(vm.list.visible().get_untracked().len(), 5);
            vm.list.next_page();
            vm.list.next_page();
            assert_eq!(vm.list.visible().get_untracked().len(), 2);

            vm.list.set_search("sales".into());
            assert_eq!(vm.list.current_page(), 1);
            assert_eq!(vm.list.paginator().get_untracked().total_items(), 6);
            // fetch happens once; filtering and paging stay local
            assert_eq!(server.hits(GET, "/api/employees"), 1);
        });
    }
}
