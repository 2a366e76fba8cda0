//! Cookie jar persisted through a [`KeyValueStore`].

use chrono::Utc;
use std::sync::Arc;
use tracing::warn;

use crate::domain::Cookie;
use crate::error::StorageError;
use crate::traits::{CookieJar, KeyValueStore};

const KEY_PREFIX: &str = "cookie:";

/// Stores each cookie as JSON under `cookie:<name>`.
///
/// Used outside a browser, where the carriers still need to survive between
/// runs. Expired cookies read as absent.
#[derive(Clone)]
pub struct StoredCookieJar {
    store: Arc<dyn KeyValueStore>,
}

impl StoredCookieJar {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Full cookie including attributes, expired or not.
    pub fn cookie(&self, name: &str) -> Option<Cookie> {
        let raw = match self.store.get(&format!("{}{}", KEY_PREFIX, name)) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!(cookie = name, error = %e, "Failed to read cookie");
                return None;
            }
        };
        serde_json::from_str(&raw).ok()
    }
}

impl CookieJar for StoredCookieJar {
    fn set(&self, cookie: Cookie) {
        let key = format!("{}{}", KEY_PREFIX, cookie.name);
        let result = serde_json::to_string(&cookie)
            .map_err(StorageError::from)
            .and_then(|json| self.store.set(&key, &json));
        if let Err(e) = result {
            warn!(cookie = %cookie.name, error = %e, "Failed to write cookie");
        }
    }

    fn get(&self, name: &str) -> Option<String> {
        self.cookie(name)
            .filter(|cookie| !cookie.is_expired(Utc::now()))
            .map(|cookie| cookie.value)
    }
}
