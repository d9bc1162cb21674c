use super::cache::RemoteCache;
use crate::api::{ApiError, ListResponse};
use crate::listing::{
    process, Filterable, ListFilters, PageError, PageSize, PaginationMode, Paginator, SortOrder,
};

/// One list page: the fetched rows, the user's filters and the current page.
/// Every filter change goes back to page 1.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    cache: RemoteCache<T>,
    filters: ListFilters,
    paginator: Paginator,
}

impl<T: Filterable + Clone> ListState<T> {
    pub fn new(paginator: Paginator) -> Self {
        Self {
            cache: RemoteCache::default(),
            filters: ListFilters::default(),
            paginator,
        }
    }

    pub fn client_paged(page_size: PageSize) -> Self {
        Self::new(Paginator::client(page_size))
    }

    pub fn cache(&self) -> &RemoteCache<T> {
        &self.cache
    }

    pub fn filters(&self) -> &ListFilters {
        &self.filters
    }

    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    pub fn begin(&mut self) {
        self.cache.begin();
    }

    pub fn replace(&mut self, response: ListResponse<T>) {
        self.cache.replace(response);
        self.sync_total();
    }

    pub fn fail(&mut self, error: ApiError) {
        self.cache.fail(error);
    }

    pub fn abandon(&mut self) {
        self.cache.abandon();
    }

    /// Records after filtering and sorting, before pagination.
    pub fn filtered(&self) -> Vec<T> {
        process(self.cache.records(), &self.filters)
    }

    /// Rows for the current page.
    pub fn visible(&self) -> Vec<T> {
        let filtered = self.filtered();
        self.paginator.slice(&filtered).to_vec()
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filters.search = search.into();
        self.after_filter_change();
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.filters.status = status.into();
        self.after_filter_change();
    }

    pub fn set_kind(&mut self, kind: impl Into<String>) {
        self.filters.kind = kind.into();
        self.after_filter_change();
    }

    pub fn set_sort(&mut self, sort: Option<SortOrder>) {
        self.filters.sort = sort;
        self.after_filter_change();
    }

    pub fn toggle_sort(&mut self) {
        let next = match self.filters.sort {
            Some(order) => order.toggled(),
            None => SortOrder::Descending,
        };
        self.set_sort(Some(next));
    }

    pub fn clear_filters(&mut self) {
        self.filters = ListFilters::default();
        self.after_filter_change();
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.paginator.set_page_size(page_size);
        self.sync_total();
    }

    pub fn next_page(&mut self) {
        self.paginator.next();
    }

    pub fn prev_page(&mut self) {
        self.paginator.prev();
    }

    pub fn go_to(&mut self, page: usize) -> Result<(), PageError> {
        self.paginator.go_to(page)
    }

    pub fn reset_page(&mut self) {
        self.paginator.reset();
    }

    /// Server-paged lists take the reported total; client-paged lists count
    /// the filtered rows.
    fn sync_total(&mut self) {
        let total = match self.paginator.mode() {
            PaginationMode::Server => self.cache.total_records() as usize,
            PaginationMode::Client => self.filtered().len(),
        };
        self.paginator.set_total(total);
    }

    fn after_filter_change(&mut self) {
        self.paginator.reset();
        self.sync_total();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        status: &'static str,
    }

    impl Filterable for Row {
        fn search_fields(&self) -> Vec<Option<&str>> {
            vec![Some(self.name)]
        }

        fn status_value(&self) -> Option<&str> {
            Some(self.status)
        }

        fn sort_key(&self) -> Option<NaiveDateTime> {
            None
        }
    }

    fn rows(count: usize) -> Vec<Row> {
        (0..count)
            .map(|i| Row {
                name: if i % 2 == 0 { "John" } else { "Jane" },
                status: if i % 3 == 0 { "Pending" } else { "Approved" },
            })
            .collect()
    }

    fn loaded(count: usize) -> ListState<Row> {
        let mut state = ListState::client_paged(PageSize::fixed(10).unwrap());
        state.replace(ListResponse {
            data: rows(count),
            total_records: None,
        });
        state
    }

    #[test]
    fn visible_returns_current_page_of_filtered_rows() {
        let mut state = loaded(23);
        assert_eq!(state.paginator().total_pages(), 3);
        state.go_to(3).unwrap();
        assert_eq!(state.visible().len(), 3);
    }

    #[test]
    fn filter_change_resets_page_and_recounts() {
        let mut state = loaded(23);
        state.go_to(2).unwrap();
        state.set_search("john");
        assert_eq!(state.paginator().page(), 1);
        assert_eq!(state.paginator().total_items(), 12);
        assert!(state.visible().iter().all(|row| row.name == "John"));

        state.set_status("Pending");
        assert_eq!(state.paginator().page(), 1);
        assert!(state
            .visible()
            .iter()
            .all(|row| row.name == "John" && row.status == "Pending"));
    }

    #[test]
    fn refetch_with_fewer_rows_clamps_page() {
        let mut state = loaded(30);
        state.go_to(3).unwrap();
        state.replace(ListResponse {
            data: rows(11),
            total_records: None,
        });
        assert_eq!(state.paginator().page(), 2);
        assert_eq!(state.visible().len(), 1);
    }

    #[test]
    fn server_paged_list_keeps_page_rows() {
        let mut state: ListState<Row> =
            ListState::new(Paginator::server(std::num::NonZeroUsize::new(10).unwrap()));
        state.replace(ListResponse {
            data: rows(10),
            total_records: Some(41),
        });
        assert_eq!(state.paginator().total_pages(), 5);
        state.go_to(5).unwrap();
        assert_eq!(state.visible().len(), 10);
    }

    #[test]
    fn out_of_range_page_is_rejected_in_place() {
        let mut state = loaded(23);
        state.go_to(2).unwrap();
        assert_eq!(
            state.go_to(4),
            Err(PageError::OutOfRange {
                requested: 4,
                total_pages: 3
            })
        );
        assert_eq!(state.paginator().page(), 2);
        state.reset_page();
        assert_eq!(state.paginator().page(), 1);
        assert_eq!(state.visible().len(), 10);
    }

    #[test]
    fn toggle_sort_starts_descending() {
        let mut state = loaded(3);
        state.toggle_sort();
        assert_eq!(state.filters().sort, Some(SortOrder::Descending));
        state.toggle_sort();
        assert_eq!(state.filters().sort, Some(SortOrder::Ascending));
        state.clear_filters();
        assert!(state.filters().is_empty());
    }
}
