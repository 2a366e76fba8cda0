//! Common test utilities for integration tests.
//!
//! [`Browser`] bundles the shared, origin-wide state a real browser keeps
//! between page loads (key-value area, cookies) together with the per-page
//! collaborators, so a test can drive several loads in a row.
//!
//! # Example
//!
//! ```ignore
//! let browser = Browser::on("https://app.easyship.com/?ESGB").logged_in("US", "us-tok");
//! let outcome = on_page_load(fast_config(), browser.env()).await;
//! ```

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use std::sync::Arc;
use std::time::Duration;

use regionswitch::adapters::IntervalFrameClock;
use regionswitch::config::SwitcherConfig;
use regionswitch::domain::{HostUser, RegionCode};
use regionswitch::session::{PageEnvironment, RemoteTokenValidator, TokenValidator};
use regionswitch::traits::{HostSession, Navigator};

pub const VALIDATE_URL: &str = "https://api.easyship.com/api/v1/users/get_current_user";
pub const MOUNT: &str = "es-sidebar-profile div";

/// Config with short waits so paused-clock tests stay quick.
pub fn fast_config() -> SwitcherConfig {
    SwitcherConfig::default()
        .with_user_wait(Duration::from_millis(500))
        .with_element_wait(Duration::from_millis(100))
}

pub fn region(code: &str) -> RegionCode {
    RegionCode::parse(code).unwrap()
}

/// One browser profile: shared storage plus the page currently loaded.
pub struct Browser {
    pub storage: InMemoryStore,
    pub jar: MemoryCookieJar,
    pub page: Arc<MockPage>,
    pub navigator: MockNavigator,
    pub host: Option<MockHost>,
    pub notifier: RecordingNotifier,
    pub http: MockHttpClient,
}

impl Browser {
    /// Fresh profile on `url`, with the affordance mount point present.
    pub fn on(url: &str) -> Self {
        let page = Arc::new(MockPage::new());
        page.add_element(MOUNT);
        let jar = MemoryCookieJar::new();
        Self {
            storage: InMemoryStore::new(),
            navigator: MockNavigator::new(url).with_cookie_observer(jar.clone()),
            jar,
            page,
            host: None,
            notifier: RecordingNotifier::new(),
            http: MockHttpClient::new(),
        }
    }

    /// Host session with a user in `country` presenting `token`.
    pub fn logged_in(mut self, country: &str, token: &str) -> Self {
        self.host = Some(
            MockHost::new()
                .with_user(HostUser::in_country(country))
                .with_token(token)
                .with_cookie_observer(self.jar.clone()),
        );
        self
    }

    /// Host session service exists but the user has not loaded.
    pub fn session_without_user(mut self) -> Self {
        self.host = Some(MockHost::new());
        self
    }

    /// Same profile after a reload: shared storage survives, the page and
    /// host session start over. The new host presents whatever the active
    /// carrier now holds.
    pub fn reloaded_as(&self, country: &str) -> Self {
        let token = self.jar.value("credentials").unwrap_or_default();
        let page = Arc::new(MockPage::new());
        page.add_element(MOUNT);
        Self {
            storage: self.storage.clone(),
            jar: self.jar.clone(),
            page,
            navigator: MockNavigator::new(self.navigator.current_url())
                .with_cookie_observer(self.jar.clone()),
            host: None,
            notifier: RecordingNotifier::new(),
            http: self.http.clone(),
        }
        .logged_in(country, &token)
    }

    pub fn env(&self) -> PageEnvironment {
        let locator = match &self.host {
            Some(host) => StaticLocator::new(Some(Arc::new(host.clone()) as Arc<dyn HostSession>)),
            None => StaticLocator::missing(),
        };
        let validator: Arc<dyn TokenValidator> =
            Arc::new(RemoteTokenValidator::new(self.http.clone(), VALIDATE_URL));

        PageEnvironment {
            locator: Arc::new(locator),
            navigator: Arc::new(self.navigator.clone()),
            page: self.page.clone(),
            storage: Arc::new(self.storage.clone()),
            cookies: Arc::new(self.jar.clone()),
            clock: Arc::new(IntervalFrameClock::default()),
            validator,
            notifier: Arc::new(self.notifier.clone()),
        }
    }

    pub fn host(&self) -> &MockHost {
        self.host.as_ref().expect("browser has no host session")
    }
}
