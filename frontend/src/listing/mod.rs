pub mod paginator;
pub mod processor;

pub use paginator::{PageError, PageSize, PaginationMode, Paginator};
pub use processor::{process, Filterable, ListFilters, SortOrder};
