use super::cache::RemoteCache;
use super::tabs::{FetchCompletion, FetchTicket, LoadState, TabController};
use crate::api::{ApiError, ApprovalKind, ApprovalRequest, ListResponse};
use crate::listing::{process, Filterable, ListFilters, PageError, PageSize, Paginator, SortOrder};
use chrono::NaiveDateTime;
use std::collections::HashMap;

impl Filterable for ApprovalRequest {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            self.employee_name(),
            self.designation(),
            self.leave_type.as_deref(),
            self.reason.as_deref(),
            self.location.as_deref(),
        ]
    }

    fn status_value(&self) -> Option<&str> {
        self.status.as_deref()
    }

    fn type_value(&self) -> Option<&str> {
        self.leave_type.as_deref()
    }

    fn sort_key(&self) -> Option<NaiveDateTime> {
        self.leave_start_date
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .or_else(|| self.date_time.map(|at| at.naive_utc()))
    }
}

/// Tabs, per-tab caches, filters and pagination of the approvals screen.
/// Filters and the page belong to the active tab and reset on every switch.
#[derive(Debug, Clone)]
pub struct ApprovalsState {
    tabs: TabController<ApprovalKind>,
    caches: HashMap<ApprovalKind, RemoteCache<ApprovalRequest>>,
    filters: ListFilters,
    paginator: Paginator,
}

impl ApprovalsState {
    pub fn new(default: ApprovalKind, page_size: PageSize) -> (Self, FetchTicket<ApprovalKind>) {
        let (tabs, ticket) = TabController::new(&ApprovalKind::ALL, default);
        let mut caches: HashMap<_, RemoteCache<ApprovalRequest>> = ApprovalKind::ALL
            .iter()
            .map(|kind| (*kind, RemoteCache::default()))
            .collect();
        caches.entry(default).or_default().begin();
        let state = Self {
            tabs,
            caches,
            filters: ListFilters::default(),
            paginator: Paginator::client(page_size),
        };
        (state, ticket)
    }

    pub fn active(&self) -> ApprovalKind {
        self.tabs.active()
    }

    pub fn load_state(&self, kind: ApprovalKind) -> LoadState {
        self.tabs.state(kind)
    }

    pub fn cache(&self, kind: ApprovalKind) -> Option<&RemoteCache<ApprovalRequest>> {
        self.caches.get(&kind)
    }

    pub fn active_cache(&self) -> Option<&RemoteCache<ApprovalRequest>> {
        self.cache(self.active())
    }

    pub fn filters(&self) -> &ListFilters {
        &self.filters
    }

    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    /// Rows of the active tab as last fetched; what actions are validated
    /// against.
    pub fn records(&self) -> &[ApprovalRequest] {
        self.active_cache()
            .map(|cache| cache.records())
            .unwrap_or(&[])
    }

    pub fn filtered(&self) -> Vec<ApprovalRequest> {
        process(self.records(), &self.filters)
    }

    pub fn visible(&self) -> Vec<ApprovalRequest> {
        let filtered = self.filtered();
        self.paginator.slice(&filtered).to_vec()
    }

    /// Returns the fetch to start, if the tab needs one.
    pub fn select(&mut self, kind: ApprovalKind) -> Option<FetchTicket<ApprovalKind>> {
        let switch = self.tabs.select(kind);
        if switch.changed {
            self.filters = ListFilters::default();
            self.paginator.reset();
            self.sync_total();
        }
        if let Some(ticket) = switch.fetch {
            self.caches.entry(ticket.tab).or_default().begin();
        }
        switch.fetch
    }

    pub fn refresh(&mut self) -> FetchTicket<ApprovalKind> {
        self.refresh_kind(self.active())
    }

    /// Refetch of `kind` after a successful mutation. When `kind` is no
    /// longer active the response is discarded and the tab drops back to
    /// NotLoaded, so selecting it again fetches fresh rows.
    pub fn refresh_kind(&mut self, kind: ApprovalKind) -> FetchTicket<ApprovalKind> {
        let ticket = self.tabs.refresh(kind);
        self.caches.entry(ticket.tab).or_default().begin();
        ticket
    }

    pub fn complete(
        &mut self,
        ticket: FetchTicket<ApprovalKind>,
        outcome: Result<ListResponse<ApprovalRequest>, ApiError>,
    ) -> FetchCompletion {
        let (summary, payload) = match outcome {
            Ok(response) => (Ok(()), Ok(response)),
            Err(err) => (Err(err.error.clone()), Err(err)),
        };
        let completion = self.tabs.complete(ticket, summary);
        let cache = self.caches.entry(ticket.tab).or_default();
        match (&completion, payload) {
            (FetchCompletion::Applied, Ok(response)) => {
                cache.replace(response);
                self.sync_total();
            }
            (FetchCompletion::Failed { .. }, Err(err)) => cache.fail(err),
            (FetchCompletion::Stale, _) => {
                if self.tabs.state(ticket.tab) != LoadState::Loading {
                    cache.abandon();
                }
            }
            _ => {}
        }
        completion
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

    pub fn toggle_sort(&mut self) {
        self.filters.sort = Some(match self.filters.sort {
            Some(order) => order.toggled(),
            None => SortOrder::Descending,
        });
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

    fn sync_total(&mut self) {
        let total = self.filtered().len();
        self.paginator.set_total(total);
    }

    fn after_filter_change(&mut self) {
        self.paginator.reset();
        self.sync_total();
    }
}
