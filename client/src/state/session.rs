//! Browser session storage and per-page gateway construction.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one [`ClientSession`] and one [`ApiConfig`] through context.
//! Pages call [`use_gateway`] during setup and clone the result into their
//! event handlers.
//!
//! TRADE-OFFS
//! ==========
//! `localStorage` has no batch write, so a credential pair is written key by
//! key and already-written keys are restored if a later write fails. Outside
//! the `csr` build there is no browser: reads are empty and writes fail.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use projectflow::{ApiConfig, Gateway, HttpApi, SessionStore, StorageError, TokenStorage};

/// Session store backed by `window.localStorage`.
pub type ClientSession = SessionStore<BrowserStorage>;

/// Gateway used by every page.
pub type ClientGateway = Gateway<HttpApi, BrowserStorage>;

/// API base baked in at compile time from `PROJECTFLOW_API_URL`.
pub fn api_config() -> ApiConfig {
    ApiConfig::parse(option_env!("PROJECTFLOW_API_URL")).unwrap_or_else(|e| {
        leptos::logging::warn!("{e}; falling back to {}", projectflow::config::DEFAULT_API_BASE_URL);
        ApiConfig::default()
    })
}

/// Build a gateway from the context-provided config and session.
///
/// Must be called inside a component while its owner is live.
pub fn use_gateway() -> ClientGateway {
    let config = expect_context::<ApiConfig>();
    let session = expect_context::<ClientSession>();
    Gateway::new(HttpApi::new(&config), session)
}

/// Handle to `window.localStorage`. Looked up on every operation.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .ok_or_else(|| StorageError::Unavailable("no window".to_owned()))?
        .local_storage()
        .map_err(|e| StorageError::Unavailable(format!("{e:?}")))?
        .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_owned()))
}

impl TokenStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage().ok()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set_all(&self, entries: &[(&str, &str)]) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            let storage = local_storage()?;
            let previous: Vec<Option<String>> =
                entries.iter().map(|(key, _)| storage.get_item(key).ok().flatten()).collect();
            write_all(
                entries,
                &previous,
                |key, value| storage.set_item(key, value).map_err(|e| format!("{e:?}")),
                |key| {
                    let _ = storage.remove_item(key);
                },
            )
            .map_err(StorageError::Unavailable)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = entries;
            Err(StorageError::Unavailable("browser storage requires the csr build".to_owned()))
        }
    }

    fn remove_all(&self, keys: &[&str]) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            let storage = local_storage()?;
            for key in keys {
                storage.remove_item(key).map_err(|e| StorageError::Unavailable(format!("{e:?}")))?;
            }
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = keys;
            Ok(())
        }
    }
}

/// Write `entries` in order. If a write fails, every earlier key is put back
/// to its `previous` value (removed when it had none) and the error returned.
pub(crate) fn write_all<E>(
    entries: &[(&str, &str)],
    previous: &[Option<String>],
    mut set: impl FnMut(&str, &str) -> Result<(), E>,
    mut remove: impl FnMut(&str),
) -> Result<(), E> {
    for (written, (key, value)) in entries.iter().enumerate() {
        if let Err(e) = set(key, value) {
            for ((key, _), old) in entries[..written].iter().zip(previous) {
                match old {
                    Some(old) => {
                        let _ = set(key, old.as_str());
                    }
                    None => remove(key),
                }
            }
            return Err(e);
        }
    }
    Ok(())
}
