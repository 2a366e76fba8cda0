//! Trait abstractions for dependency injection and testability.
//!
//! Every piece of global state the switcher touches (storage, cookies, the
//! network, the host application, the page) is reached through one of these
//! traits and handed in explicitly.
//!
//! # Traits
//!
//! - [`KeyValueStore`] - persistent key-value area
//! - [`CookieJar`] - credential carriers
//! - [`HttpClient`] - identity endpoint requests
//! - [`HostSession`] / [`SessionLocator`] - host session service
//! - [`Navigator`] - page load control
//! - [`Page`] - element presence, affordance mounting, route events
//! - [`FrameClock`] - frame ticks for bounded waits
//! - [`Notifier`] - blocking user notification

pub mod host;
pub mod http;
pub mod storage;

pub use host::{
    FrameClock, HostSession, NavigationEvent, Navigator, Notifier, Page, SessionLocator,
};
pub use http::{Headers, HttpClient, HttpError, Response};
pub use storage::{CookieJar, KeyValueStore};
