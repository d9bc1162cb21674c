use super::cache::RemoteCache;
use super::list::ListState;
use super::toast::{Notifier, ToastContext};
use crate::api::{ApiError, ListResponse};
use crate::listing::{Filterable, PageSize, Paginator, SortOrder};
use leptos::*;
use std::collections::HashSet;
use std::future::Future;

/// Signal-backed handle over a `ListState` for pages with a single list.
/// Fetches are sequenced so only the latest response is applied.
pub struct ListViewModel<T: 'static> {
    pub state: RwSignal<ListState<T>>,
    toasts: ToastContext,
    resource: &'static str,
    seq: StoredValue<u64>,
    reported: StoredValue<HashSet<String>>,
}

impl<T: 'static> Clone for ListViewModel<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for ListViewModel<T> {}

impl<T> ListViewModel<T>
where
    T: Filterable + Clone + PartialEq + 'static,
{
    pub fn new(resource: &'static str, initial: ListState<T>, toasts: ToastContext) -> Self {
        Self {
            state: create_rw_signal(initial),
            toasts,
            resource,
            seq: store_value(0),
            reported: store_value(HashSet::new()),
        }
    }

    /// Runs `fetch` and applies its result unless a newer load was started
    /// in the meantime.
    pub fn load<Fut>(&self, fetch: Fut)
    where
        Fut: Future<Output = Result<ListResponse<T>, ApiError>> + 'static,
    {
        self.start(fetch, None);
    }

    /// Loads a page the paginator has already moved to; a failed fetch puts
    /// it back on `previous` so the pager matches the rows still shown.
    pub fn load_page<Fut>(&self, previous: usize, fetch: Fut)
    where
        Fut: Future<Output = Result<ListResponse<T>, ApiError>> + 'static,
    {
        self.start(fetch, Some(previous));
    }

    fn start<Fut>(&self, fetch: Fut, restore: Option<usize>)
    where
        Fut: Future<Output = Result<ListResponse<T>, ApiError>> + 'static,
    {
        self.seq.update_value(|seq| *seq += 1);
        let ticket = self.seq.get_value();
        self.state.update(|s| s.begin());
        let vm = *self;
        spawn_local(async move {
            let result = fetch.await;
            if vm.seq.get_value() != ticket {
                log::debug!("discarded stale {} response", vm.resource);
                return;
            }
            match result {
                Ok(response) => vm.state.update(|s| s.replace(response)),
                Err(err) => {
                    log::error!("{} list failed: {}", vm.resource, err.error);
                    let mut fresh = false;
                    vm.reported
                        .update_value(|seen| fresh = seen.insert(err.error.clone()));
                    if fresh {
                        vm.toasts.error(&err.error);
                    }
                    vm.state.update(|s| {
                        s.fail(err);
                        if let Some(page) = restore {
                            if let Err(err) = s.go_to(page) {
                                log::warn!("{} page not restored: {}", vm.resource, err);
                            }
                        }
                    });
                }
            }
        });
    }

    pub fn cache(&self) -> Signal<RemoteCache<T>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.cache().clone()))
    }

    pub fn error(&self) -> Signal<Option<ApiError>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.cache().error().cloned()))
    }

    pub fn is_loading(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.cache().is_loading()))
    }

    pub fn shows_skeleton(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.cache().shows_skeleton()))
    }

    /// Loaded, and nothing survives the current filters.
    pub fn is_empty(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.cache().is_loaded() && s.filtered().is_empty()))
    }

    pub fn records(&self) -> Signal<Vec<T>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.cache().records().to_vec()))
    }

    pub fn visible(&self) -> Signal<Vec<T>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.visible()))
    }

    pub fn paginator(&self) -> Signal<Paginator> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.paginator().clone()))
    }

    pub fn search(&self) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.filters().search.clone()))
    }

    pub fn status(&self) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.filters().status.clone()))
    }

    pub fn kind(&self) -> Signal<String> {
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

    pub fn set_kind(&self, value: String) {
        self.state.update(|s| s.set_kind(value));
    }

    pub fn set_sort(&self, sort: Option<SortOrder>) {
        self.state.update(|s| s.set_sort(sort));
    }

    pub fn toggle_sort(&self) {
        self.state.update(|s| s.toggle_sort());
    }

    pub fn set_page_size(&self, size: PageSize) {
        self.state.update(|s| s.set_page_size(size));
    }

    pub fn next_page(&self) {
        self.state.update(|s| s.next_page());
    }

    pub fn prev_page(&self) {
        self.state.update(|s| s.prev_page());
    }

    /// Jumps to `page`. An out-of-range page is reported as an error toast
    /// and the current page is kept.
    pub fn go_to(&self, page: usize) {
        let mut outcome = Ok(());
        self.state.update(|s| outcome = s.go_to(page));
        if let Err(err) = outcome {
            log::warn!("{} {}", self.resource, err);
            self.toasts.error(&err.to_string());
        }
    }

    pub fn reset_page(&self) {
        self.state.update(|s| s.reset_page());
    }

    pub fn current_page(&self) -> usize {
        self.state.with_untracked(|s| s.paginator().page())
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::toast::{provide_toasts, ToastKind};
    use crate::test_support::helpers::toast_messages;
    use crate::test_support::ssr::{wait_until, with_local_runtime_async};

    #[derive(Debug, Clone, PartialEq)]
    struct Row(&'static str);

    impl Filterable for Row {
        fn search_fields(&self) -> Vec<Option<&str>> {
            vec![Some(self.0)]
        }
    }

    fn rows(names: &[&'static str]) -> ListResponse<Row> {
        ListResponse {
            data: names.iter().map(|n| Row(*n)).collect(),
            total_records: None,
        }
    }

    #[test]
    fn later_load_wins_over_slow_earlier_one() {
        with_local_runtime_async(|| async {
            let toasts = provide_toasts();
            let vm = ListViewModel::new(
                "rows",
                ListState::client_paged(PageSize::fixed(10).unwrap()),
                toasts,
            );
            vm.load(async {
                tokio::time::sleep(std::time::Duration::from_millis(50)).await;
                Ok(rows(&["old"]))
            });
            vm.load(async { Ok(rows(&["new", "newer"])) });
            assert!(wait_until(|| !vm.is_loading().get_untracked()).await);
            tokio::time::sleep(std::time::Duration::from_millis(80)).await;
            assert_eq!(vm.records().get_untracked(), vec![Row("new"), Row("newer")]);
        });
    }

    #[test]
    fn repeated_failure_toasts_once_and_keeps_rows() {
        with_local_runtime_async(|| async {
            let toasts = provide_toasts();
            let vm = ListViewModel::new("rows", ListState::client_paged(PageSize::All), toasts);
            vm.load(async { Ok(rows(&["a"])) });
            assert!(wait_until(|| !vm.is_loading().get_untracked()).await);
            for _ in 0..2 {
                vm.load(async { Err(ApiError::network("Network error")) });
                assert!(wait_until(|| !vm.is_loading().get_untracked()).await);
            }
            assert_eq!(toast_messages(toasts, ToastKind::Error).len(), 1);
            assert_eq!(vm.visible().get_untracked(), vec![Row("a")]);
            assert!(vm.error().get_untracked().is_some());
        });
    }

    #[test]
    fn go_to_rejects_page_past_the_end() {
        with_local_runtime_async(|| async {
            let toasts = provide_toasts();
            let vm = ListViewModel::new(
                "rows",
                ListState::client_paged(PageSize::fixed(10).unwrap()),
                toasts,
            );
            let names: Vec<&'static str> = vec!["row"; 23];
            vm.load(async move { Ok(rows(&names)) });
            assert!(wait_until(|| !vm.is_loading().get_untracked()).await);

            vm.go_to(4);
            assert_eq!(vm.current_page(), 1);
            assert_eq!(
                toast_messages(toasts, ToastKind::Error),
                vec!["Page 4 is out of range (1-3).".to_string()]
            );
            vm.go_to(3);
            assert_eq!(vm.current_page(), 3);
            assert_eq!(vm.visible().get_untracked().len(), 3);
            vm.reset_page();
            assert_eq!(vm.current_page(), 1);
        });
    }

    #[test]
    fn failed_page_load_restores_previous_page() {
        with_local_runtime_async(|| async {
            let toasts = provide_toasts();
            let vm = ListViewModel::new(
                "rows",
                ListState::client_paged(PageSize::fixed(1).unwrap()),
                toasts,
            );
            vm.load(async { Ok(rows(&["a", "b", "c"])) });
            assert!(wait_until(|| !vm.is_loading().get_untracked()).await);

            vm.next_page();
            assert_eq!(vm.current_page(), 2);
            vm.load_page(1, async { Err(ApiError::network("Network error")) });
            assert!(wait_until(|| !vm.is_loading().get_untracked()).await);
            assert_eq!(vm.current_page(), 1);
            assert_eq!(vm.visible().get_untracked(), vec![Row("a")]);
            assert_eq!(toast_messages(toasts, ToastKind::Error).len(), 1);
        });
    }

    #[test]
    fn search_resets_to_first_page() {
        with_local_runtime_async(|| async {
            let toasts = provide_toasts();
            let vm = ListViewModel::new(
                "rows",
                ListState::client_paged(PageSize::fixed(1).unwrap()),
                toasts,
            );
            vm.load(async { Ok(rows(&["John Doe", "Jane", "Johnny"])) });
            assert!(wait_until(|| !vm.is_loading().get_untracked()).await);
            vm.next_page();
            assert_eq!(vm.current_page(), 2);
            vm.set_search("john".into());
            assert_eq!(vm.current_page(), 1);
            assert_eq!(vm.paginator().get_untracked().total_pages(), 2);
        });
    }
}
