//! Persistent key-value area and credential carrier abstractions.

use crate::domain::Cookie;
use crate::error::StorageError;

/// Durable, origin-scoped string key-value storage.
///
/// Mirrors the shape of browser local storage: string keys, string values,
/// synchronous access. Implementations include a JSON file on disk and an
/// in-memory fake for tests.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// # Returns
    /// - `Ok(Some(value))` if present
    /// - `Ok(None)` if no value is stored
    /// - `Err(error)` if the backing storage could not be read
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Cookie storage holding the credential carriers.
///
/// Writes are visible to every page of the application family immediately.
/// Expired cookies read as absent.
pub trait CookieJar: Send + Sync {
    /// Write (or overwrite) a cookie.
    fn set(&self, cookie: Cookie);

    /// Current value of the cookie named `name`.
    fn get(&self, name: &str) -> Option<String>;
}
