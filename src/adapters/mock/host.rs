//! Mock host session and session locator.

use std::sync::{Arc, Mutex};

use super::cookies::MemoryCookieJar;
use crate::domain::{HostUser, Token};
use crate::traits::{HostSession, SessionLocator};

/// Calls the switcher made into the host session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    /// `destroy`, with the active carrier value seen at call time
    Destroy(Option<String>),
    RedirectToLogin,
}

#[derive(Debug, Default)]
struct HostState {
    user: Option<HostUser>,
    token: Option<Token>,
    calls: Vec<HostCall>,
}

/// Scriptable [`HostSession`].
///
/// With a cookie observer attached, each `destroy` records the value of the
/// `credentials` cookie at that moment, which lets tests check ordering
/// against carrier writes.
#[derive(Debug, Clone, Default)]
pub struct MockHost {
    state: Arc<Mutex<HostState>>,
    observer: Option<MemoryCookieJar>,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(self, user: HostUser) -> Self {
        self.set_user(Some(user));
        self
    }

    pub fn with_token(self, token: &str) -> Self {
        self.set_token(Some(Token::new(token)));
        self
    }

    pub fn with_cookie_observer(mut self, jar: MemoryCookieJar) -> Self {
        self.observer = Some(jar);
        self
    }

    /// Change the user; visible to every clone.
    pub fn set_user(&self, user: Option<HostUser>) {
        self.state.lock().unwrap().user = user;
    }

    pub fn set_token(&self, token: Option<Token>) {
        self.state.lock().unwrap().token = token;
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn destroy_count(&self) -> usize {
        self.count(|call| matches!(call, HostCall::Destroy(_)))
    }

    pub fn redirect_count(&self) -> usize {
        self.count(|call| matches!(call, HostCall::RedirectToLogin))
    }

    fn count(&self, pred: impl Fn(&HostCall) -> bool) -> usize {
        self.state.lock().unwrap().calls.iter().filter(|&c| pred(c)).count()
    }
}

impl HostSession for MockHost {
    fn session_token(&self) -> Option<Token> {
        self.state.lock().unwrap().token.clone()
    }

    fn user(&self) -> Option<HostUser> {
        self.state.lock().unwrap().user.clone()
    }

    fn destroy(&self) {
        let seen = self.observer.as_ref().and_then(|jar| jar.value("credentials"));
        self.state.lock().unwrap().calls.push(HostCall::Destroy(seen));
    }

    fn redirect_to_login(&self) {
        self.state.lock().unwrap().calls.push(HostCall::RedirectToLogin);
    }
}

/// Locator returning a fixed session, or none.
#[derive(Clone, Default)]
pub struct StaticLocator(Option<Arc<dyn HostSession>>);

impl StaticLocator {
    pub fn new(session: Option<Arc<dyn HostSession>>) -> Self {
        Self(session)
    }

    /// Locator for a page without the host's session service.
    pub fn missing() -> Self {
        Self(None)
    }
}

impl SessionLocator for StaticLocator {
    fn locate_session(&self) -> Option<Arc<dyn HostSession>> {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let host = MockHost::new();
        let other = host.clone();
        other.set_user(Some(HostUser::in_country("NL")));
        other.redirect_to_login();

        assert_eq!(host.user(), Some(HostUser::in_country("NL")));
        assert_eq!(host.redirect_count(), 1);
    }

    #[test]
    fn test_destroy_observes_cookie() {
        let jar = MemoryCookieJar::new();
        jar.set_value("credentials", "seen");
        let host = MockHost::new().with_cookie_observer(jar);

        host.destroy();
        assert_eq!(host.calls(), vec![HostCall::Destroy(Some("seen".to_string()))]);
    }

    #[test]
    fn test_static_locator() {
        assert!(StaticLocator::missing().locate_session().is_none());
        let located = StaticLocator::new(Some(Arc::new(MockHost::new()))).locate_session();
        assert!(located.is_some());
    }
}
