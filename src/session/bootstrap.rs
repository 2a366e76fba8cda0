//! Page-load entry point: decide which flow the current page needs.

use std::sync::Arc;
use tracing::{debug, error, info};
use url::Url;

use super::callback::{CallbackOutcome, LoginCallback};
use super::coordinator::{Collaborators, Coordinator, LoadOutcome};
use super::validator::TokenValidator;
use crate::config::SwitcherConfig;
use crate::error::{SwitchError, SwitchResult};
use crate::traits::{
    CookieJar, FrameClock, KeyValueStore, Navigator, Notifier, Page, SessionLocator,
};

/// What kind of page the browser is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// Login page reached after a redirect
    LoginCallback,
    /// Application page carrying a host session
    App,
    /// Anything else
    Other,
}

impl PageKind {
    pub fn classify(url: &str, config: &SwitcherConfig) -> Self {
        let Ok(parsed) = Url::parse(url) else {
            return PageKind::Other;
        };
        let host = parsed.host_str().unwrap_or_default();

        if host.starts_with(&config.auth_host_prefix)
            && parsed.path().ends_with(&config.login_path_suffix)
        {
            PageKind::LoginCallback
        } else if host.starts_with(&config.app_host_prefix) {
            PageKind::App
        } else {
            PageKind::Other
        }
    }
}

/// Result of handling one page load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    Callback(CallbackOutcome),
    App(LoadOutcome),
    Skipped,
}

/// Everything a page load may need. The host session is located lazily
/// because it only exists on application pages.
#[derive(Clone)]
pub struct PageEnvironment {
    pub locator: Arc<dyn SessionLocator>,
    pub navigator: Arc<dyn Navigator>,
    pub page: Arc<dyn Page>,
    pub storage: Arc<dyn KeyValueStore>,
    pub cookies: Arc<dyn CookieJar>,
    pub clock: Arc<dyn FrameClock>,
    pub validator: Arc<dyn TokenValidator>,
    pub notifier: Arc<dyn Notifier>,
}

/// Handle a page load.
///
/// On application pages that end up in `NoSwitchNeeded` this keeps running,
/// re-mounting the switch control after route changes, until the page's
/// event source closes.
///
/// The only error is a missing host session service, which is also shown to
/// the user through the notifier.
pub async fn on_page_load(
    config: SwitcherConfig,
    env: PageEnvironment,
) -> SwitchResult<PageOutcome> {
    let url = env.navigator.current_url();

    match PageKind::classify(&url, &config) {
        PageKind::LoginCallback => {
            let callback = LoginCallback::new(&config, env.cookies, env.validator, env.navigator);
            Ok(PageOutcome::Callback(callback.run().await))
        }
        PageKind::App => {
            info!(url = %url, "Application page, starting switcher");
            let Some(host) = env.locator.locate_session() else {
                let err =
                    SwitchError::IntegrationUnavailable("session service not found".to_string());
                error!(error = %err, "Cannot locate host session service");
                if err.category().is_user_visible() {
                    env.notifier.alert(&err.user_message());
                }
                return Err(err);
            };
            debug!("Got host session service");

            let coordinator = Coordinator::new(
                config,
                Collaborators {
                    host,
                    navigator: env.navigator,
                    page: env.page,
                    storage: env.storage,
                    cookies: env.cookies,
                    clock: env.clock,
                },
            );

            let outcome = coordinator.run().await;
            if matches!(outcome, LoadOutcome::NoSwitchNeeded(_)) {
                coordinator.watch_navigation().await;
            }
            Ok(PageOutcome::App(outcome))
        }
        PageKind::Other => Ok(PageOutcome::Skipped),
    }
}
