use chrono::NaiveDateTime;
use std::cmp::Ordering;

/// Field access the list processor needs from a record.
pub trait Filterable {
    /// Display fields searched by the free-text term.
    fn search_fields(&self) -> Vec<Option<&str>>;

    fn status_value(&self) -> Option<&str> {
        None
    }

    fn type_value(&self) -> Option<&str> {
        None
    }

    fn sort_key(&self) -> Option<NaiveDateTime> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilters {
    pub search: String,
    pub status: String,
    pub kind: String,
    pub sort: Option<SortOrder>,
}

impl ListFilters {
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty()
            && self.status.is_empty()
            && self.kind.is_empty()
            && self.sort.is_none()
    }

    pub fn matches<T: Filterable>(&self, record: &T) -> bool {
        self.matches_search(record)
            && exact_match(&self.status, record.status_value())
            && exact_match(&self.kind, record.type_value())
    }

    fn matches_search<T: Filterable>(&self, record: &T) -> bool {
        let term = self.search.trim();
        if term.is_empty() {
            return true;
        }
        let needle = term.to_lowercase();
        record
            .search_fields()
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

fn exact_match(filter: &str, value: Option<&str>) -> bool {
    filter.is_empty() || value == Some(filter)
}

/// Undated records go last in both directions.
fn compare_keys(a: Option<NaiveDateTime>, b: Option<NaiveDateTime>, order: SortOrder) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => match order {
            SortOrder::Ascending => a.cmp(&b),
            SortOrder::Descending => b.cmp(&a),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Filters (AND) and optionally sorts a fetched collection into a new vector.
/// Without a sort the server's insertion order is kept.
pub fn process<T: Filterable + Clone>(records: &[T], filters: &ListFilters) -> Vec<T> {
    let mut result: Vec<T> = records
        .iter()
        .filter(|record| filters.matches(*record))
        .cloned()
        .collect();
    if let Some(order) = filters.sort {
        result.sort_by(|a, b| compare_keys(a.sort_key(), b.sort_key(), order));
    }
    result
}
