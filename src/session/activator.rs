//! Applies and clears the single active credential.

use std::sync::Arc;
use tracing::{debug, info};

use super::carriers::Carriers;
use crate::domain::Token;
use crate::traits::HostSession;

/// Sole writer of the active credential.
///
/// `activate` destroys the host's cached session before touching the
/// carriers, so the host's next read of "current session" sees the new token.
#[derive(Clone)]
pub struct CredentialActivator {
    host: Option<Arc<dyn HostSession>>,
    carriers: Carriers,
}

impl CredentialActivator {
    /// `host` is `None` on pages where the host session service does not run,
    /// such as the login page.
    pub fn new(host: Option<Arc<dyn HostSession>>, carriers: Carriers) -> Self {
        Self { host, carriers }
    }

    pub fn activate(&self, token: &Token) {
        if let Some(host) = &self.host {
            host.destroy();
        }
        self.carriers.write_active(token);
        self.carriers.write_safe(token);

        if token.is_empty() {
            info!("Cleared active credential");
        } else {
            info!(token = %token.masked(), "Activated credential");
        }
    }

    /// Force a logged-out state.
    pub fn clear(&self) {
        self.activate(&Token::empty());
    }

    /// Token the host's live session is using, read from the session object
    /// rather than from the carriers.
    pub fn current_token(&self) -> Option<Token> {
        let token = self.host.as_ref()?.session_token();
        if token.is_none() {
            debug!("Host session has no current token");
        }
        token.filter(|t| !t.is_empty())
    }
}
