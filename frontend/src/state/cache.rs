use crate::api::{ApiError, ListResponse};

/// Last server response for one resource. A successful fetch replaces the
/// whole collection; a failed one keeps the previous rows visible.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteCache<T> {
    records: Vec<T>,
    total_records: u64,
    loaded: bool,
    loading: bool,
    error: Option<ApiError>,
}

impl<T> Default for RemoteCache<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            total_records: 0,
            loaded: false,
            loading: false,
            error: None,
        }
    }
}

impl<T> RemoteCache<T> {
    pub fn begin(&mut self) {
        self.loading = true;
    }

    pub fn replace(&mut self, response: ListResponse<T>) {
        self.total_records = response.total();
        self.records = response.data;
        self.loaded = true;
        self.loading = false;
        self.error = None;
    }

    pub fn fail(&mut self, error: ApiError) {
        self.loading = false;
        self.error = Some(error);
    }

    /// Drops the loading flag of an abandoned fetch without touching data.
    pub fn abandon(&mut self) {
        self.loading = false;
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn total_records(&self) -> u64 {
        self.total_records
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    /// Loaded successfully and nothing came back; rendered as "No data
    /// available", never as an error.
    pub fn is_empty_result(&self) -> bool {
        self.loaded && self.records.is_empty() && self.error.is_none()
    }

    /// First load still running: render skeleton rows.
    pub fn shows_skeleton(&self) -> bool {
        self.loading && !self.loaded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(rows: &[&'static str], total: Option<u64>) -> ListResponse<&'static str> {
        ListResponse {
            data: rows.to_vec(),
            total_records: total,
        }
    }

    #[test]
    fn replace_swaps_whole_collection() {
        let mut cache = RemoteCache::default();
        cache.begin();
        assert!(cache.shows_skeleton());
        cache.replace(response(&["a", "b"], Some(9)));
        assert_eq!(cache.records(), &["a", "b"]);
        assert_eq!(cache.total_records(), 9);
        cache.replace(response(&["c"], None));
        assert_eq!(cache.records(), &["c"]);
        assert_eq!(cache.total_records(), 1);
        assert!(!cache.is_loading());
    }

    #[test]
    fn failure_keeps_previous_rows() {
        let mut cache = RemoteCache::default();
        cache.replace(response(&["a"], None));
        cache.begin();
        assert!(!cache.shows_skeleton());
        cache.fail(ApiError::network("offline"));
        assert_eq!(cache.records(), &["a"]);
        assert_eq!(cache.error().map(|e| e.error.as_str()), Some("offline"));
        assert!(!cache.is_empty_result());
    }

    #[test]
    fn empty_result_is_not_an_error() {
        let mut cache: RemoteCache<&'static str> = RemoteCache::default();
        assert!(!cache.is_empty_result());
        cache.replace(response(&[], Some(0)));
        assert!(cache.is_empty_result());
        assert!(cache.error().is_none());
    }

    #[test]
    fn success_clears_previous_error() {
        let mut cache = RemoteCache::default();
        cache.fail(ApiError::network("offline"));
        cache.replace(response(&["a"], None));
        assert!(cache.error().is_none());
    }
}
