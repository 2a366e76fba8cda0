//! Mock top-level navigation.

use std::sync::{Arc, Mutex};

use super::MemoryCookieJar;
use crate::traits::Navigator;

/// Navigation requests the switcher issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavAction {
    Stop,
    Reload,
    Navigate(String),
}

/// Records navigation requests instead of performing them.
///
/// With a cookie observer attached, `stop` also captures the credential
/// cookie as it stood when the load was halted.
#[derive(Debug, Clone)]
pub struct MockNavigator {
    url: Arc<Mutex<String>>,
    actions: Arc<Mutex<Vec<NavAction>>>,
    observer: Option<MemoryCookieJar>,
    credentials_at_stop: Arc<Mutex<Vec<Option<String>>>>,
}

impl MockNavigator {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Arc::new(Mutex::new(url.into())),
            actions: Arc::new(Mutex::new(Vec::new())),
            observer: None,
            credentials_at_stop: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_cookie_observer(mut self, jar: MemoryCookieJar) -> Self {
        self.observer = Some(jar);
        self
    }

    /// Credential cookie value seen by each `stop` call.
    pub fn credentials_at_stop(&self) -> Vec<Option<String>> {
        self.credentials_at_stop.lock().unwrap().clone()
    }

    pub fn set_url(&self, url: impl Into<String>) {
        *self.url.lock().unwrap() = url.into();
    }

    pub fn actions(&self) -> Vec<NavAction> {
        self.actions.lock().unwrap().clone()
    }

    fn record(&self, action: NavAction) {
        self.actions.lock().unwrap().push(action);
    }
}

impl Navigator for MockNavigator {
    fn current_url(&self) -> String {
        self.url.lock().unwrap().clone()
    }

    fn stop(&self) {
        if let Some(jar) = &self.observer {
            self.credentials_at_stop
                .lock()
                .unwrap()
                .push(jar.value("credentials"));
        }
        self.record(NavAction::Stop);
    }

    fn reload(&self) {
        self.record(NavAction::Reload);
    }

    fn navigate(&self, url: &str) {
        self.set_url(url);
        self.record(NavAction::Navigate(url.to_string()));
    }
}
