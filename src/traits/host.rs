//! Host application collaborators.
//!
//! The switcher runs alongside an application it does not control. Everything
//! it needs from that application is reached through these traits, so a test
//! double can stand in for the real page.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::broadcast;

use crate::domain::{HostUser, Token};
use crate::session::SwitchAffordance;

/// The host application's live session service.
pub trait HostSession: Send + Sync {
    /// Token the live session is currently presenting, if any.
    fn session_token(&self) -> Option<Token>;

    /// Authenticated user. `None` until the host finishes loading it.
    fn user(&self) -> Option<HostUser>;

    /// Drop any cached session state so the next read goes to storage.
    fn destroy(&self);

    /// Send the browser to the host's login page.
    fn redirect_to_login(&self);
}

/// Finds the host session service on the current page.
pub trait SessionLocator: Send + Sync {
    /// `None` means the host's integration points changed.
    fn locate_session(&self) -> Option<Arc<dyn HostSession>>;
}

/// Top-level browsing context control.
pub trait Navigator: Send + Sync {
    /// Full URL of the current navigation target.
    fn current_url(&self) -> String;

    /// Halt any in-flight page load.
    fn stop(&self);

    /// Reload the current page.
    fn reload(&self);

    /// Navigate to `url`.
    fn navigate(&self, url: &str);
}

/// Fired by the host after an in-app route transition completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationEvent {
    /// Name of the route that was entered
    pub route: String,
}

impl NavigationEvent {
    pub fn new(route: impl Into<String>) -> Self {
        Self {
            route: route.into(),
        }
    }
}

/// Rendered page: element lookup, affordance mounting, route events.
pub trait Page: Send + Sync {
    /// Whether an element matching `selector` currently exists.
    fn element_present(&self, selector: &str) -> bool;

    /// Mount the switch affordance under `mount_selector`.
    ///
    /// Returns `false` if the mount point is missing.
    fn render_affordance(&self, mount_selector: &str, affordance: &SwitchAffordance) -> bool;

    /// Subscribe to route transition events.
    fn navigation_events(&self) -> broadcast::Receiver<NavigationEvent>;
}

/// Source of rendering-frame ticks for bounded waits.
#[async_trait]
pub trait FrameClock: Send + Sync {
    /// Resolve at the next rendering frame.
    async fn next_frame(&self);
}

/// Blocking end-user notification.
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}
