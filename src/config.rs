//! Switcher configuration.
//!
//! Defaults target the EasyShip deployment; every value can be overridden
//! through the builder, and a few through environment variables.

use std::path::PathBuf;
use std::time::Duration;

use crate::domain::SupportedRegions;

/// Storage key holding the region → token map.
pub const STORAGE_KEY: &str = "region_sessions";

/// Cookie consumed by the host application and its network layer.
pub const ACTIVE_COOKIE: &str = "credentials";

/// Long-lived cookie used to hand a token across a login redirect.
pub const SAFE_COOKIE: &str = "safeCredentials";

/// Directory under the home directory for the file-backed store.
const STORE_DIR: &str = ".regionswitch";

/// File name of the file-backed store.
const STORE_FILE: &str = "storage.json";

/// Configuration for the switcher.
///
/// # Example
///
/// ```ignore
/// use regionswitch::config::SwitcherConfig;
///
/// let config = SwitcherConfig::default()
///     .with_cookie_domain(".example.com")
///     .with_user_wait(std::time::Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct SwitcherConfig {
    /// Regions offered, in matching and display order
    pub supported_regions: SupportedRegions,
    /// Literal prefix of a region marker in a URL (`ES` + `GB` → `ESGB`)
    pub region_marker_prefix: String,
    /// Key of the region → token map in the key-value area
    pub storage_key: String,
    /// Active-session cookie name
    pub active_cookie: String,
    /// Hand-off cookie name
    pub safe_cookie: String,
    /// Domain both cookies are scoped to
    pub cookie_domain: String,
    /// Lifetime of the hand-off cookie
    pub safe_cookie_ttl: chrono::Duration,
    /// Identity endpoint used to validate tokens
    pub validation_url: String,
    /// Where to land after a successful login hand-off
    pub home_url: String,
    /// Host prefix of the application pages
    pub app_host_prefix: String,
    /// Host prefix of the login pages
    pub auth_host_prefix: String,
    /// Path suffix identifying the login callback page
    pub login_path_suffix: String,
    /// How long to wait for the host to populate its user
    pub user_wait: Duration,
    /// How long to wait for page elements to appear or disappear
    pub element_wait: Duration,
    /// Element the switch affordance is mounted under
    pub affordance_mount_selector: String,
    /// Selector matching a mounted affordance
    pub affordance_selector: String,
    /// Location of the file-backed store used by the binary
    pub store_path: Option<PathBuf>,
}

impl Default for SwitcherConfig {
    fn default() -> Self {
        Self {
            supported_regions: SupportedRegions::default(),
            region_marker_prefix: "ES".to_string(),
            storage_key: STORAGE_KEY.to_string(),
            active_cookie: ACTIVE_COOKIE.to_string(),
            safe_cookie: SAFE_COOKIE.to_string(),
            cookie_domain: ".easyship.com".to_string(),
            safe_cookie_ttl: chrono::Duration::days(365),
            validation_url: "https://api.easyship.com/api/v1/users/get_current_user".to_string(),
            home_url: "https://app.easyship.com/dashboard".to_string(),
            app_host_prefix: "app".to_string(),
            auth_host_prefix: "auth".to_string(),
            login_path_suffix: "login".to_string(),
            user_wait: Duration::from_secs(60),
            element_wait: Duration::from_secs(5),
            affordance_mount_selector: "es-sidebar-profile div".to_string(),
            affordance_selector: ".switch-region".to_string(),
            store_path: default_store_path(),
        }
    }
}

impl SwitcherConfig {
    /// Create a new SwitcherConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the supported regions.
    pub fn with_supported_regions(mut self, regions: SupportedRegions) -> Self {
        self.supported_regions = regions;
        self
    }

    /// Set the region marker prefix.
    pub fn with_region_marker_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.region_marker_prefix = prefix.into();
        self
    }

    /// Set the cookie domain.
    pub fn with_cookie_domain(mut self, domain: impl Into<String>) -> Self {
        self.cookie_domain = domain.into();
        self
    }

    /// Set the identity validation endpoint.
    pub fn with_validation_url(mut self, url: impl Into<String>) -> Self {
        self.validation_url = url.into();
        self
    }

    /// Set the post-login landing page.
    pub fn with_home_url(mut self, url: impl Into<String>) -> Self {
        self.home_url = url.into();
        self
    }

    /// Set the user wait timeout.
    pub fn with_user_wait(mut self, wait: Duration) -> Self {
        self.user_wait = wait;
        self
    }

    /// Set the element wait timeout.
    pub fn with_element_wait(mut self, wait: Duration) -> Self {
        self.element_wait = wait;
        self
    }

    /// Set the file-backed store location.
    pub fn with_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_path = Some(path.into());
        self
    }

    /// Default config with overrides from `REGIONSWITCH_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("REGIONSWITCH_REGIONS") {
            let regions = SupportedRegions::parse_list(&raw);
            if regions.is_empty() {
                tracing::warn!(
                    value = %raw,
                    "REGIONSWITCH_REGIONS has no valid regions, using defaults"
                );
            } else {
                config.supported_regions = regions;
            }
        }
        if let Some(prefix) = lookup("REGIONSWITCH_MARKER_PREFIX") {
            config.region_marker_prefix = prefix;
        }
        if let Some(domain) = lookup("REGIONSWITCH_COOKIE_DOMAIN") {
            config.cookie_domain = domain;
        }
        if let Some(url) = lookup("REGIONSWITCH_VALIDATE_URL") {
            config.validation_url = url;
        }
        if let Some(url) = lookup("REGIONSWITCH_HOME_URL") {
            config.home_url = url;
        }
        if let Some(path) = lookup("REGIONSWITCH_STORE") {
            config.store_path = Some(PathBuf::from(path));
        }

        config
    }
}

/// `~/.regionswitch/storage.json`, if a home directory exists.
pub fn default_store_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(STORE_DIR).join(STORE_FILE))
}
