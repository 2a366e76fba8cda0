//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`FileKeyValueStore`] - JSON file key-value store
//! - [`StoredCookieJar`] - cookies persisted through a key-value store
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`IntervalFrameClock`] - tokio timer frame ticks
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles for every trait, including
//! the host application collaborators.

pub mod cookie_jar;
pub mod file_store;
pub mod frame_clock;
pub mod mock;
pub mod reqwest_http;

pub use cookie_jar::StoredCookieJar;
pub use file_store::FileKeyValueStore;
pub use frame_clock::IntervalFrameClock;
pub use mock::{InMemoryStore, MemoryCookieJar, MockHttpClient};
pub use reqwest_http::ReqwestHttpClient;
