use std::num::NonZeroUsize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("Page {requested} is out of range (1-{total_pages}).")]
    OutOfRange { requested: usize, total_pages: usize },
    #[error("Page size must be a positive number or -1 to show all rows.")]
    InvalidPageSize(i64),
}

/// `-1` in configuration and UI means "show everything on one page".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSize {
    All,
    Fixed(NonZeroUsize),
}

impl PageSize {
    pub fn from_raw(raw: i64) -> Result<Self, PageError> {
        if raw == -1 {
            return Ok(PageSize::All);
        }
        usize::try_from(raw)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(PageSize::Fixed)
            .ok_or(PageError::InvalidPageSize(raw))
    }

    pub fn as_raw(&self) -> i64 {
        match self {
            PageSize::All => -1,
            PageSize::Fixed(size) => size.get() as i64,
        }
    }

    pub fn fixed(size: usize) -> Option<Self> {
        NonZeroUsize::new(size).map(PageSize::Fixed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationMode {
    /// Slices an already fetched collection.
    Client,
    /// Sends `{page, limit}` and trusts the server's `totalRecords`.
    Server,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    mode: PaginationMode,
    page: usize,
    page_size: PageSize,
    total_items: usize,
}

impl Paginator {
    pub fn client(page_size: PageSize) -> Self {
        Self {
            mode: PaginationMode::Client,
            page: 1,
            page_size,
            total_items: 0,
        }
    }

    pub fn server(limit: NonZeroUsize) -> Self {
        Self {
            mode: PaginationMode::Server,
            page: 1,
            page_size: PageSize::Fixed(limit),
            total_items: 0,
        }
    }

    pub fn mode(&self) -> PaginationMode {
        self.mode
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn total_pages(&self) -> usize {
        match self.page_size {
            PageSize::All => 1,
            PageSize::Fixed(size) => self.total_items.div_ceil(size.get()).max(1),
        }
    }

    /// Record the size of the (filtered) collection or the server's total.
    /// The current page is clamped when the collection shrinks.
    pub fn set_total(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.page = self.page.clamp(1, self.total_pages());
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
        self.page = 1;
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    pub fn next(&mut self) {
        self.page = (self.page + 1).min(self.total_pages());
    }

    pub fn prev(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    pub fn go_to(&mut self, page: usize) -> Result<(), PageError> {
        let total_pages = self.total_pages();
        if page == 0 || page > total_pages {
            return Err(PageError::OutOfRange {
                requested: page,
                total_pages,
            });
        }
        self.page = page;
        Ok(())
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Client mode: the current window of `items`. Server mode: `items` is
    /// already the requested page and is returned whole.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        match (self.mode, self.page_size) {
            (PaginationMode::Server, _) | (_, PageSize::All) => items,
            (PaginationMode::Client, PageSize::Fixed(size)) => {
                let size = size.get();
                let start = ((self.page - 1) * size).min(items.len());
                let end = (self.page * size).min(items.len());
                &items[start..end]
            }
        }
    }

    /// `(page, limit)` to send in server mode.
    pub fn query(&self) -> (u32, u32) {
        let limit = match self.page_size {
            PageSize::All => 0,
            PageSize::Fixed(size) => size.get() as u32,
        };
        (self.page as u32, limit)
    }

    /// 1-based index range of the visible rows, for "Showing 11-20 of 23".
    pub fn visible_range(&self) -> Option<(usize, usize)> {
        if self.total_items == 0 {
            return None;
        }
        match self.page_size {
            PageSize::All => Some((1, self.total_items)),
            PageSize::Fixed(size) => {
                let size = size.get();
                let start = (self.page - 1) * size + 1;
                let end = (self.page * size).min(self.total_items);
                Some((start, end))
            }
        }
    }
}
