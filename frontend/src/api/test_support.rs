#[cfg(test)]
pub mod mock {
    use crate::api::client::{register_mock, MockResponse, TestResponder};
    use crate::api::ApiError;
    use reqwest::Method;
    use serde_json::Value;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    pub const GET: Method = Method::GET;
    pub const POST: Method = Method::POST;
    pub const PUT: Method = Method::PUT;
    pub const DELETE: Method = Method::DELETE;

    #[derive(Clone)]
    pub struct MockServer {
        inner: Arc<Mutex<Inner>>,
        base: String,
    }

    struct Inner {
        routes: Vec<Route>,
        calls: Vec<RecordedCall>,
    }

    #[derive(Clone)]
    struct Route {
        method: Method,
        path: String,
        query: Option<String>,
        response: MockResponse,
    }

    impl Route {
        /// A route without a query matches any query string on its path.
        fn matches(&self, method: &Method, path: &str, query: Option<&str>) -> bool {
            self.method == *method
                && self.path == path
                && self.query.as_deref().map_or(true, |q| Some(q) == query)
        }
    }

    #[derive(Clone, Debug)]
    pub struct RecordedCall {
        pub method: Method,
        pub path: String,
        pub query: Option<String>,
        pub body: Option<Vec<u8>>,
        pub content_type: Option<String>,
    }

    impl RecordedCall {
        pub fn json_body(&self) -> Option<Value> {
            self.body
                .as_ref()
                .and_then(|bytes| serde_json::from_slice(bytes).ok())
        }
    }

    impl MockServer {
        pub async fn start_async() -> Self {
            Self::start()
        }

        pub fn start() -> Self {
            static NEXT_ID: AtomicUsize = AtomicUsize::new(1);
            let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
            Self {
                inner: Arc::new(Mutex::new(Inner {
                    routes: Vec::new(),
                    calls: Vec::new(),
                })),
                base: format!("http://mock-{}", id),
            }
        }

        pub fn url(&self, path: &str) -> String {
            let base_url = format!("{}{}", self.base, path);
            register_mock(base_url.clone(), Arc::new(self.clone()));
            base_url
        }

        pub fn mock<F>(&self, f: F)
        where
            F: FnOnce(&mut When, &mut Then),
        {
            let mut when = When::default();
            let mut then = Then::default();
            f(&mut when, &mut then);

            let method = when.method.clone().expect("mock requires method");
            let path = when.path.clone().expect("mock requires path");
            let query = when.query.clone();
            let response = MockResponse::json(
                then.status.unwrap_or(200),
                then.body.unwrap_or_else(|| serde_json::json!({})),
            );

            let mut inner = self.inner.lock().expect("mock lock");
            inner.routes.push(Route {
                method,
                path,
                query,
                response,
            });
        }

        pub fn calls(&self) -> Vec<RecordedCall> {
            self.inner.lock().expect("mock lock").calls.clone()
        }

        pub fn hits(&self, method: Method, path: &str) -> usize {
            self.calls()
                .iter()
                .filter(|call| call.method == method && call.path == path)
                .count()
        }

        pub fn last_call(&self, method: Method, path: &str) -> Option<RecordedCall> {
            self.calls()
                .into_iter()
                .rev()
                .find(|call| call.method == method && call.path == path)
        }
    }

    impl TestResponder for MockServer {
        fn respond(&self, request: &reqwest::Request) -> Result<MockResponse, ApiError> {
            let method = request.method();
            let path = request.url().path();
            let query = request.url().query();
            let mut inner = self.inner.lock().map_err(|_| ApiError::unknown("mock lock"))?;

            inner.calls.push(RecordedCall {
                method: method.clone(),
                path: path.to_string(),
                query: query.map(str::to_string),
                body: request
                    .body()
                    .and_then(|body| body.as_bytes())
                    .map(|bytes| bytes.to_vec()),
                content_type: request
                    .headers()
                    .get(reqwest::header::CONTENT_TYPE)
                    .and_then(|value| value.to_str().ok())
                    .map(str::to_string),
            });

            let route = inner
                .routes
                .iter()
                .rev()
                .find(|route| route.matches(method, path, query))
                .cloned();

            route
                .map(|route| route.response)
                .ok_or_else(|| ApiError::unknown(format!("No mock for {} {}", method, path)))
        }
    }

    #[derive(Default)]
    pub struct When {
        method: Option<Method>,
        path: Option<String>,
        query: Option<String>,
    }

    impl When {
        pub fn method(&mut self, method: Method) -> &mut Self {
            self.method = Some(method);
            self
        }

        pub fn path(&mut self, path: &str) -> &mut Self {
            self.path = Some(path.to_string());
            self
        }

        /// Restricts the route to one exact query string, e.g. `page=2&limit=10`.
        pub fn query(&mut self, query: &str) -> &mut Self {
            self.query = Some(query.to_string());
            self
        }
    }

    #[derive(Default)]
    pub struct Then {
        status: Option<u16>,
        body: Option<Value>,
    }

    impl Then {
        pub fn status(&mut self, status: u16) -> &mut Self {
            self.status = Some(status);
            self
        }

        pub fn json_body(&mut self, body: Value) -> &mut Self {
            self.body = Some(body);
            self
        }
    }
}
