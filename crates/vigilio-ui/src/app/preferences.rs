//! Persistence and environment helpers for the app shell.

use crate::core::prefs::{self, PrefError, PreferenceStore};
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;
use serde::Serialize;
use serde::de::DeserializeOwned;
use web_sys::{Url, UrlSearchParams};

/// Browser local storage as a preference backend.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct BrowserPrefs;

impl PreferenceStore for BrowserPrefs {
    fn read(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, raw: &str) -> Result<(), PrefError> {
        LocalStorage::raw()
            .set_item(key, raw)
            .map_err(|err| PrefError::Storage(format!("{err:?}")))
    }
}

pub(crate) fn load_pref<T: DeserializeOwned>(key: &'static str) -> Option<T> {
    prefs::load(&BrowserPrefs, key)
}

pub(crate) fn persist_pref<T: Serialize>(key: &'static str, value: &T) {
    if let Err(err) = prefs::persist(&BrowserPrefs, key, value) {
        log_storage_error("set", key, &err.to_string());
    }
}

/// Origin the panel API is served from; the UI is same-origin with it.
pub(crate) fn api_base_url() -> String {
    window().location().origin().unwrap_or_default()
}

/// Read one query parameter of the current page URL.
pub(crate) fn query_param(name: &str) -> Option<String> {
    let search = window().location().search().ok()?;
    UrlSearchParams::new_with_str(&search).ok()?.get(name)
}

/// Absolute URL for a path on the current origin, used for full-page redirects.
pub(crate) fn same_origin_url(path: &str) -> String {
    let origin = api_base_url();
    Url::new_with_base(path, &origin).map_or_else(|_| path.to_string(), |url| url.href())
}

/// Leave the single-page app, e.g. to reach a server-rendered page.
pub(crate) fn redirect(path: &str) {
    if let Err(err) = window().location().set_href(&same_origin_url(path)) {
        console::error!("redirect failed", path.to_string(), format!("{err:?}"));
    }
}

fn log_storage_error(operation: &'static str, key: &'static str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
