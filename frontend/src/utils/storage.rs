#[cfg(target_arch = "wasm32")]
use web_sys::{Storage, Window};

pub const AUTH_TOKEN_KEY: &str = "auth_token";
pub const APPROVALS_TAB_KEY: &str = "hrms.approvals.tab";
pub const EMPLOYEE_ID_KEY: &str = "hrms.employee_id";

#[cfg(target_arch = "wasm32")]
pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

#[cfg(target_arch = "wasm32")]
pub fn local_storage() -> Result<Storage, String> {
    window()?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}

/// Reads a stored preference; missing storage reads as unset.
#[cfg(target_arch = "wasm32")]
pub fn load_preference(key: &str) -> Option<String> {
    local_storage()
        .ok()
        .and_then(|storage| storage.get_item(key).ok().flatten())
        .filter(|value| !value.trim().is_empty())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_preference(_key: &str) -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
pub fn save_preference(key: &str, value: &str) {
    match local_storage() {
        Ok(storage) => {
            if storage.set_item(key, value).is_err() {
                log::warn!("could not persist preference {}", key);
            }
        }
        Err(err) => log::warn!("{}", err),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_preference(_key: &str, _value: &str) {}
