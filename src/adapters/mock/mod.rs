//! Mock implementations for testing.
//!
//! This module provides mock implementations of all trait abstractions,
//! enabling unit testing without network, file system, or a live host page.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`InMemoryStore`] - Key-value store with injectable failures
//! - [`MemoryCookieJar`] - Cookie jar recording assignments
//! - [`MockHost`] / [`StaticLocator`] - Scriptable host session
//! - [`MockNavigator`] - Records stop, reload, and navigate requests
//! - [`MockPage`] - Selector set, rendered affordances, route events
//! - [`RecordingNotifier`] - Collects alerts

pub mod cookies;
pub mod host;
pub mod http;
pub mod navigator;
pub mod notifier;
pub mod page;
pub mod storage;

pub use cookies::MemoryCookieJar;
pub use host::{HostCall, MockHost, StaticLocator};
pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use navigator::{MockNavigator, NavAction};
pub use notifier::RecordingNotifier;
pub use page::MockPage;
pub use storage::InMemoryStore;
