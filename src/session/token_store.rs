//! Durable region → token map.
//!
//! The map lives under a single key in the key-value area as a JSON object.
//! Every read goes back to storage and every write is read-modify-write, so
//! there is no in-memory copy to go stale.

use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

use super::carriers::Carriers;
use crate::domain::{RegionCode, Token};
use crate::error::StorageError;
use crate::traits::KeyValueStore;

/// Region → token mapping as loaded from storage.
pub type RegionTokens = HashMap<RegionCode, Token>;

/// Persistent per-region token store.
#[derive(Clone)]
pub struct TokenStore {
    storage: Arc<dyn KeyValueStore>,
    carriers: Carriers,
    key: String,
}

impl TokenStore {
    pub fn new(
        storage: Arc<dyn KeyValueStore>,
        carriers: Carriers,
        key: impl Into<String>,
    ) -> Self {
        Self {
            storage,
            carriers,
            key: key.into(),
        }
    }

    /// Read the persisted mapping.
    ///
    /// Missing, unreadable and malformed data all read as an empty map.
    /// Entries whose key is not a region code or whose value is not a
    /// string are skipped.
    pub fn load(&self) -> RegionTokens {
        self.load_raw()
            .into_iter()
            .filter_map(|(key, value)| {
                let region = RegionCode::parse(&key)?;
                let token = value.as_str()?;
                Some((region, Token::new(token)))
            })
            .collect()
    }

    /// Stored token for `region`. Empty tokens count as absent.
    pub fn get(&self, region: &RegionCode) -> Option<Token> {
        self.load()
            .remove(region)
            .filter(|token| !token.is_empty())
    }

    /// Store `token` for `region`, keeping every other entry as it was, and
    /// refresh the hand-off carrier with the same token.
    ///
    /// Persistence is best-effort: write failures are logged, not returned.
    pub fn put(&self, region: &RegionCode, token: &Token) {
        if let Err(e) = self.try_put(region, token) {
            warn!(%region, error = %e, "Failed to persist region token");
        }
    }

    /// Like [`put`](Self::put) but reports a failed map write. The hand-off
    /// carrier is refreshed either way.
    pub fn try_put(&self, region: &RegionCode, token: &Token) -> Result<(), StorageError> {
        let mut map = self.load_raw();
        map.insert(region.to_string(), Value::String(token.as_str().to_string()));

        let result = serde_json::to_string(&map)
            .map_err(StorageError::from)
            .and_then(|json| self.storage.set(&self.key, &json));
        if result.is_ok() {
            debug!(%region, token = %token.masked(), "Stored region token");
        }

        self.carriers.write_safe(token);
        result
    }

    fn load_raw(&self) -> Map<String, Value> {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Map::new(),
            Err(e) => {
                warn!(error = %e, "Failed to read region tokens, treating as empty");
                return Map::new();
            }
        };

        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(map)) => map,
            Ok(_) => {
                debug!("Region tokens entry is not an object, treating as empty");
                Map::new()
            }
            Err(e) => {
                warn!(error = %e, "Malformed region tokens entry, treating as empty");
                Map::new()
            }
        }
    }
}
