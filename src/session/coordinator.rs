//! Per-page-load switch state machine.
//!
//! ```text
//! Idle -> ResolvingRegion -> NoSwitchNeeded
//!                         -> SwitchingRegion (stored token: stop, activate, reload)
//!                         -> AwaitingLogin   (no token: clear, redirect to login)
//! ```
//!
//! Each page load gets a fresh coordinator; a reload re-enters at `Idle`.
//! After switching to a region whose token is valid, the reloaded page
//! resolves to that region and lands in `NoSwitchNeeded`, so repeating the
//! flow converges instead of looping.

use std::sync::Arc;
use tokio::sync::{broadcast, Mutex, RwLock};
use tracing::{debug, info, warn};

use super::activator::CredentialActivator;
use super::affordance::SwitchAffordance;
use super::carriers::Carriers;
use super::poller::Poller;
use super::resolver::{AbortReason, RegionResolver};
use super::token_store::TokenStore;
use crate::config::SwitcherConfig;
use crate::domain::RegionCode;
use crate::traits::{
    CookieJar, FrameClock, HostSession, KeyValueStore, NavigationEvent, Navigator, Page,
};

/// Everything the coordinator talks to.
#[derive(Clone)]
pub struct Collaborators {
    pub host: Arc<dyn HostSession>,
    pub navigator: Arc<dyn Navigator>,
    pub page: Arc<dyn Page>,
    pub storage: Arc<dyn KeyValueStore>,
    pub cookies: Arc<dyn CookieJar>,
    pub clock: Arc<dyn FrameClock>,
}

/// Observable state of the machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwitchState {
    Idle,
    ResolvingRegion,
    NoSwitchNeeded { region: RegionCode },
    SwitchingRegion { from: Option<RegionCode>, to: RegionCode },
    AwaitingLogin { region: RegionCode },
}

/// Result of a page-load evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Not logged in yet or not applicable; nothing was changed
    Aborted(AbortReason),
    /// Already in the desired region
    NoSwitchNeeded(RegionCode),
    /// Stored token activated and a reload issued
    Switched(RegionCode),
    /// No stored token; credential cleared and login requested
    AwaitingLogin(RegionCode),
}

/// Result of a switch request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchOutcome {
    Reloaded,
    LoginRequired,
}

/// Orchestrates region resolution, token persistence and switching.
pub struct Coordinator {
    config: SwitcherConfig,
    host: Arc<dyn HostSession>,
    navigator: Arc<dyn Navigator>,
    page: Arc<dyn Page>,
    store: TokenStore,
    activator: CredentialActivator,
    resolver: RegionResolver,
    poller: Poller,
    state: RwLock<SwitchState>,
    current_region: RwLock<Option<RegionCode>>,
    nav_events: Mutex<Option<broadcast::Receiver<NavigationEvent>>>,
}

impl Coordinator {
    pub fn new(config: SwitcherConfig, parts: Collaborators) -> Self {
        let carriers = Carriers::new(parts.cookies, &config);
        let store = TokenStore::new(parts.storage, carriers.clone(), config.storage_key.clone());
        let activator = CredentialActivator::new(Some(parts.host.clone()), carriers);
        let resolver = RegionResolver::new(
            config.supported_regions.clone(),
            config.region_marker_prefix.clone(),
        );

        Self {
            host: parts.host,
            navigator: parts.navigator,
            page: parts.page,
            store,
            activator,
            resolver,
            poller: Poller::new(parts.clock),
            state: RwLock::new(SwitchState::Idle),
            current_region: RwLock::new(None),
            nav_events: Mutex::new(None),
            config,
        }
    }

    pub async fn state(&self) -> SwitchState {
        self.state.read().await.clone()
    }

    /// Region of the live session, once resolved.
    pub async fn current_region(&self) -> Option<RegionCode> {
        self.current_region.read().await.clone()
    }

    pub fn token_store(&self) -> &TokenStore {
        &self.store
    }

    async fn transition(&self, next: SwitchState) {
        let mut state = self.state.write().await;
        debug!(from = ?*state, to = ?next, "Switch state transition");
        *state = next;
    }

    /// Evaluate the current page load.
    pub async fn run(&self) -> LoadOutcome {
        self.transition(SwitchState::ResolvingRegion).await;

        let current = match self
            .resolver
            .resolve_current_region(self.host.as_ref(), &self.poller, self.config.user_wait)
            .await
        {
            Ok(region) => region,
            Err(reason) => {
                debug!(%reason, "Region unresolved, leaving page alone");
                self.transition(SwitchState::Idle).await;
                return LoadOutcome::Aborted(reason);
            }
        };
        info!(region = %current, "Resolved current region");
        *self.current_region.write().await = Some(current.clone());

        // Persist before resolving the target so the token for the region we
        // are about to leave is never lost.
        match self.activator.current_token() {
            Some(token) => self.store.put(&current, &token),
            None => debug!(region = %current, "No live token to store"),
        }

        let target = self.navigator.current_url();
        let desired = self.resolver.resolve_desired_region(&target, &current);

        if desired == current {
            self.transition(SwitchState::NoSwitchNeeded {
                region: current.clone(),
            })
            .await;
            *self.nav_events.lock().await = Some(self.page.navigation_events());
            self.mount_affordance().await;
            return LoadOutcome::NoSwitchNeeded(current);
        }

        info!(current = %current, desired = %desired, "Region change needed");
        match self.switch_region(&desired).await {
            SwitchOutcome::Reloaded => LoadOutcome::Switched(desired),
            SwitchOutcome::LoginRequired => LoadOutcome::AwaitingLogin(desired),
        }
    }

    /// Switch to `region`, from page load or from a user selection.
    ///
    /// With a stored token: halt the in-flight load, activate, reload.
    /// Without one: clear the credential and ask the host to log in. No
    /// token is ever guessed.
    pub async fn switch_region(&self, region: &RegionCode) -> SwitchOutcome {
        let from = self.current_region().await;
        self.transition(SwitchState::SwitchingRegion {
            from,
            to: region.clone(),
        })
        .await;

        match self.store.get(region) {
            Some(token) => {
                self.navigator.stop();
                self.activator.activate(&token);
                self.navigator.reload();
                info!(%region, "Switched region, reloading");
                SwitchOutcome::Reloaded
            }
            None => {
                warn!(%region, "No session token stored, login required");
                self.transition(SwitchState::AwaitingLogin {
                    region: region.clone(),
                })
                .await;
                self.activator.clear();
                self.host.redirect_to_login();
                SwitchOutcome::LoginRequired
            }
        }
    }

    /// Build the switch control for the current region.
    pub async fn affordance(&self) -> Option<SwitchAffordance> {
        let current = self.current_region().await?;
        Some(SwitchAffordance::build(self.resolver.supported_regions(), &current))
    }

    /// Mount the switch control once its mount point exists.
    ///
    /// Returns `false` if the mount point never appeared, the control is
    /// already mounted, or the current region is unknown.
    pub async fn mount_affordance(&self) -> bool {
        let Some(affordance) = self.affordance().await else {
            return false;
        };

        let mount = &self.config.affordance_mount_selector;
        if !self
            .poller
            .wait_for_element(self.page.as_ref(), mount, self.config.element_wait)
            .await
        {
            debug!(selector = %mount, "Affordance mount point never appeared");
            return false;
        }
        if self.page.element_present(&self.config.affordance_selector) {
            return false;
        }

        let rendered = self.page.render_affordance(mount, &affordance);
        if rendered {
            debug!("Mounted switch affordance");
        }
        rendered
    }

    /// Re-mount the switch control after every in-app route transition.
    ///
    /// Runs until the page's event source closes. Each event first waits for
    /// the old control to be torn down, then for the new mount point.
    pub async fn watch_navigation(&self) {
        let taken = self.nav_events.lock().await.take();
        let mut events = taken.unwrap_or_else(|| self.page.navigation_events());

        loop {
            match events.recv().await {
                Ok(event) => {
                    debug!(route = %event.route, "Route changed");
                    self.poller
                        .wait_until_gone(
                            self.page.as_ref(),
                            &self.config.affordance_selector,
                            self.config.element_wait,
                        )
                        .await;
                    self.mount_affordance().await;
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    debug!(skipped, "Missed route events");
                }
                Err(broadcast::error::RecvError::Closed) => return,
            }
        }
    }
}
