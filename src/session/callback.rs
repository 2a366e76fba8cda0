//! Return from an external login redirect.
//!
//! On the login page the hand-off carrier may still hold a token from an
//! earlier session. If the identity endpoint accepts it, it becomes the active
//! credential and the browser goes straight back to the application.
//!
//! The hand-off carrier is client-writable, so validation is the only thing
//! standing between a forged value and activation.

use std::sync::Arc;
use tracing::info;

use super::activator::CredentialActivator;
use super::carriers::Carriers;
use super::validator::TokenValidator;
use crate::config::SwitcherConfig;
use crate::traits::{CookieJar, Navigator};

/// Result of the login-callback flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackOutcome {
    /// No hand-off token; the login page is left alone
    NoHandoffToken,
    /// Token accepted, activated, and the browser sent home
    Restored,
    /// Token rejected or unverifiable; credential cleared
    Rejected,
}

/// Login-callback flow.
pub struct LoginCallback {
    carriers: Carriers,
    activator: CredentialActivator,
    validator: Arc<dyn TokenValidator>,
    navigator: Arc<dyn Navigator>,
    home_url: String,
}

impl LoginCallback {
    pub fn new(
        config: &SwitcherConfig,
        cookies: Arc<dyn CookieJar>,
        validator: Arc<dyn TokenValidator>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let carriers = Carriers::new(cookies, config);
        Self {
            activator: CredentialActivator::new(None, carriers.clone()),
            carriers,
            validator,
            navigator,
            home_url: config.home_url.clone(),
        }
    }

    pub async fn run(&self) -> CallbackOutcome {
        let Some(token) = self.carriers.read_safe() else {
            return CallbackOutcome::NoHandoffToken;
        };

        if self.validator.is_valid(&token).await {
            self.activator.activate(&token);
            self.navigator.navigate(&self.home_url);
            info!(token = %token.masked(), "Restored session from hand-off token");
            CallbackOutcome::Restored
        } else {
            self.activator.clear();
            info!("Hand-off token rejected, staying on login page");
            CallbackOutcome::Rejected
        }
    }
}
