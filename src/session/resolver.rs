//! Current region from host state, desired region from the navigation target.

use std::time::Duration;
use tracing::debug;

use super::poller::Poller;
use crate::domain::{HostUser, RegionCode, SupportedRegions};
use crate::traits::HostSession;

/// Why the current region could not be determined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbortReason {
    /// The host never populated its user within the wait
    UserUnavailable,
    /// The user has no shipping country code
    RegionMissing,
    /// The country code is not a two-character code
    RegionMalformed(String),
}

impl std::fmt::Display for AbortReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AbortReason::UserUnavailable => write!(f, "host user not available"),
            AbortReason::RegionMissing => write!(f, "user has no region"),
            AbortReason::RegionMalformed(raw) => write!(f, "malformed region code {:?}", raw),
        }
    }
}

/// Derives current and desired regions.
#[derive(Debug, Clone)]
pub struct RegionResolver {
    regions: SupportedRegions,
    marker_prefix: String,
}

impl RegionResolver {
    pub fn new(regions: SupportedRegions, marker_prefix: impl Into<String>) -> Self {
        Self {
            regions,
            marker_prefix: marker_prefix.into(),
        }
    }

    pub fn supported_regions(&self) -> &SupportedRegions {
        &self.regions
    }

    /// Region of an already-loaded user.
    pub fn region_of(user: &HostUser) -> Result<RegionCode, AbortReason> {
        let raw = user.country_code().ok_or(AbortReason::RegionMissing)?;
        if raw.is_empty() {
            return Err(AbortReason::RegionMissing);
        }
        RegionCode::parse(raw).ok_or_else(|| AbortReason::RegionMalformed(raw.to_string()))
    }

    /// Wait up to `wait` for the host user, then read its region.
    pub async fn resolve_current_region(
        &self,
        host: &dyn HostSession,
        poller: &Poller,
        wait: Duration,
    ) -> Result<RegionCode, AbortReason> {
        let user = poller
            .wait_for(|| host.user(), wait)
            .await
            .ok_or(AbortReason::UserUnavailable)?;
        debug!("Got host user");
        Self::region_of(&user)
    }

    /// First supported region whose marker (prefix + code) occurs in
    /// `target`, or `fallback` when none does.
    pub fn resolve_desired_region(&self, target: &str, fallback: &RegionCode) -> RegionCode {
        self.matching_region(target)
            .unwrap_or_else(|| fallback.clone())
    }

    /// First supported region whose marker occurs in `target`.
    pub fn matching_region(&self, target: &str) -> Option<RegionCode> {
        self.regions
            .iter()
            .find(|region| target.contains(&self.marker(region)))
            .cloned()
    }

    /// Marker string for `region`, e.g. `ESGB`.
    pub fn marker(&self, region: &RegionCode) -> String {
        format!("{}{}", self.marker_prefix, region)
    }
}
