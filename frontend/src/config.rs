use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";
pub const DEFAULT_PAGE_SIZE: i64 = 10;
pub const DEFAULT_TOAST_TIMEOUT_MS: u32 = 4000;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    pub time_zone: Option<String>,
    pub page_size: Option<i64>,
    pub toast_timeout_ms: Option<u32>,
}

impl RuntimeConfig {
    /// Later sources only fill what earlier ones left empty.
    fn merge(self, fallback: RuntimeConfig) -> RuntimeConfig {
        RuntimeConfig {
            api_base_url: self.api_base_url.or(fallback.api_base_url),
            time_zone: self.time_zone.or(fallback.time_zone),
            page_size: self.page_size.or(fallback.page_size),
            toast_timeout_ms: self.toast_timeout_ms.or(fallback.toast_timeout_ms),
        }
    }

    fn is_complete(&self) -> bool {
        self.api_base_url.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub api_base_url: String,
    pub time_zone: Tz,
    pub page_size: i64,
    pub toast_timeout_ms: u32,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve(RuntimeConfig::default())
    }
}

static CONFIG: OnceLock<ResolvedConfig> = OnceLock::new();

pub fn resolve(raw: RuntimeConfig) -> ResolvedConfig {
    let time_zone = raw
        .time_zone
        .as_deref()
        .and_then(|name| match name.parse::<Tz>() {
            Ok(tz) => Some(tz),
            Err(_) => {
                log::warn!("unknown time zone {:?}, falling back to UTC", name);
                None
            }
        })
        .unwrap_or(Tz::UTC);
    let page_size = match raw.page_size {
        Some(size) if size == -1 || size > 0 => size,
        Some(size) => {
            log::warn!("invalid page_size {}, using {}", size, DEFAULT_PAGE_SIZE);
            DEFAULT_PAGE_SIZE
        }
        None => DEFAULT_PAGE_SIZE,
    };
    ResolvedConfig {
        api_base_url: raw
            .api_base_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
        time_zone,
        page_size,
        toast_timeout_ms: raw.toast_timeout_ms.unwrap_or(DEFAULT_TOAST_TIMEOUT_MS),
    }
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::RuntimeConfig;

    fn read_global(name: &str) -> Option<RuntimeConfig> {
        // Expect optional global object: window.__HRMS_ENV = { API_BASE_URL: "..." }
        let w = web_sys::window()?;
        let any = js_sys::Reflect::get(&w, &name.into()).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        let obj = js_sys::Object::from(any);
        let read = |lower: &str, upper: &str| {
            js_sys::Reflect::get(&obj, &lower.into())
                .ok()
                .filter(|v| !v.is_undefined() && !v.is_null())
                .or_else(|| js_sys::Reflect::get(&obj, &upper.into()).ok())
                .filter(|v| !v.is_undefined() && !v.is_null())
        };
        Some(RuntimeConfig {
            api_base_url: read("api_base_url", "API_BASE_URL").and_then(|v| v.as_string()),
            time_zone: read("time_zone", "TIME_ZONE").and_then(|v| v.as_string()),
            page_size: read("page_size", "PAGE_SIZE")
                .and_then(|v| v.as_f64())
                .map(|v| v as i64),
            toast_timeout_ms: read("toast_timeout_ms", "TOAST_TIMEOUT_MS")
                .and_then(|v| v.as_f64())
                .map(|v| v as u32),
        })
    }

    pub fn snapshot_from_globals() -> RuntimeConfig {
        let env = read_global("__HRMS_ENV").unwrap_or_default();
        let config = read_global("__HRMS_CONFIG").unwrap_or_default();
        env.merge(config)
    }

    pub async fn fetch_runtime_config() -> Option<RuntimeConfig> {
        let resp = reqwest::get("./config.json").await.ok()?;
        if !resp.status().is_success() {
            log::warn!("config.json unavailable ({})", resp.status());
            return None;
        }
        resp.json::<RuntimeConfig>().await.ok()
    }
}

#[cfg(target_arch = "wasm32")]
async fn load() -> ResolvedConfig {
    let globals = browser::snapshot_from_globals();
    let raw = if globals.is_complete() {
        globals
    } else {
        match browser::fetch_runtime_config().await {
            Some(file) => globals.merge(file),
            None => globals,
        }
    };
    resolve(raw)
}

#[cfg(not(target_arch = "wasm32"))]
async fn load() -> ResolvedConfig {
    resolve(RuntimeConfig::default())
}

pub async fn init() -> ResolvedConfig {
    if let Some(cached) = CONFIG.get() {
        return cached.clone();
    }
    let resolved = load().await;
    CONFIG.get_or_init(|| resolved).clone()
}

pub async fn await_api_base_url() -> String {
    init().await.api_base_url
}

/// Synchronous view for render code; defaults until `init` has finished.
pub fn current() -> ResolvedConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

pub fn current_time_zone() -> Tz {
    current().time_zone
}
