//! The two credential carriers: the active-session cookie the host reads and
//! the long-lived hand-off cookie used across login redirects.

use chrono::Utc;
use std::sync::Arc;

use crate::config::SwitcherConfig;
use crate::domain::{Cookie, SameSite, Token};
use crate::traits::CookieJar;

/// Writes and reads the credential cookies with their fixed attributes.
#[derive(Clone)]
pub struct Carriers {
    jar: Arc<dyn CookieJar>,
    active_name: String,
    safe_name: String,
    domain: String,
    safe_ttl: chrono::Duration,
}

impl Carriers {
    pub fn new(jar: Arc<dyn CookieJar>, config: &SwitcherConfig) -> Self {
        Self {
            jar,
            active_name: config.active_cookie.clone(),
            safe_name: config.safe_cookie.clone(),
            domain: config.cookie_domain.clone(),
            safe_ttl: config.safe_cookie_ttl,
        }
    }

    /// Session-style cookie consumed by the host and its network layer.
    /// Partitioned and cross-site capable.
    pub fn write_active(&self, token: &Token) {
        self.jar.set(
            Cookie::new(&self.active_name, token.as_str())
                .with_secure(true)
                .with_same_site(SameSite::None)
                .with_partitioned(true)
                .with_domain(&self.domain),
        );
    }

    /// Long-lived hand-off cookie, refreshed to a full TTL on every write.
    pub fn write_safe(&self, token: &Token) {
        self.jar.set(
            Cookie::new(&self.safe_name, token.as_str())
                .with_secure(true)
                .with_expires(Utc::now() + self.safe_ttl)
                .with_domain(&self.domain),
        );
    }

    /// Hand-off token, if one is present and non-empty.
    pub fn read_safe(&self) -> Option<Token> {
        self.jar
            .get(&self.safe_name)
            .filter(|value| !value.is_empty())
            .map(Token::new)
    }

    pub fn read_active(&self) -> Option<Token> {
        self.jar.get(&self.active_name).map(Token::new)
    }
}
