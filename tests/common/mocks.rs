//! Mock implementations for test fixtures.
//!
//! Re-exports the mocks from `regionswitch::adapters::mock` so test files
//! only need `common::*`.

pub use regionswitch::adapters::mock::{
    InMemoryStore, MemoryCookieJar, MockHost, MockHttpClient, MockNavigator, MockPage,
    MockResponse, NavAction, RecordingNotifier, StaticLocator,
};

use regionswitch::traits::Response;

use bytes::Bytes;

/// Response with `status` and an empty body.
pub fn status(status: u16) -> MockResponse {
    MockResponse::Success(Response::new(status, Bytes::new()))
}
