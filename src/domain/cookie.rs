//! Cookie values used as credential carriers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// `SameSite` attribute values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SameSite {
    Strict,
    Lax,
    None,
}

impl fmt::Display for SameSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SameSite::Strict => f.write_str("Strict"),
            SameSite::Lax => f.write_str("Lax"),
            SameSite::None => f.write_str("None"),
        }
    }
}

/// A single cookie with the attributes the carriers care about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cookie {
    pub name: String,
    pub value: String,
    pub domain: Option<String>,
    pub path: String,
    pub secure: bool,
    pub same_site: Option<SameSite>,
    pub partitioned: bool,
    /// `None` means a session cookie.
    pub expires: Option<DateTime<Utc>>,
}

impl Cookie {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            domain: None,
            path: "/".to_string(),
            secure: false,
            same_site: None,
            partitioned: false,
            expires: None,
        }
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    pub fn with_same_site(mut self, same_site: SameSite) -> Self {
        self.same_site = Some(same_site);
        self
    }

    pub fn with_partitioned(mut self, partitioned: bool) -> Self {
        self.partitioned = partitioned;
        self
    }

    pub fn with_expires(mut self, expires: DateTime<Utc>) -> Self {
        self.expires = Some(expires);
        self
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires.is_some_and(|at| at <= now)
    }

    /// Render in `document.cookie` assignment form.
    pub fn to_assignment(&self) -> String {
        let mut parts = vec![format!("{}={}", self.name, self.value)];
        if self.secure {
            parts.push("Secure".to_string());
        }
        if let Some(same_site) = self.same_site {
            parts.push(format!("SameSite={}", same_site));
        }
        if self.partitioned {
            parts.push("Partitioned".to_string());
        }
        if let Some(expires) = self.expires {
            parts.push(format!(
                "expires={}",
                expires.format("%a, %d %b %Y %H:%M:%S GMT")
            ));
        }
        if let Some(domain) = &self.domain {
            parts.push(format!("domain={}", domain));
        }
        parts.push(format!("path={}", self.path));
        parts.join("; ")
    }
}

/// Read one value out of a `name=value; name2=value2` cookie header.
///
/// Returns `None` unless `name` occurs exactly once.
pub fn parse_cookie_value(header: &str, name: &str) -> Option<String> {
    let mut found = header
        .split(';')
        .map(str::trim)
        .filter_map(|pair| pair.split_once('='))
        .filter(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string());

    let first = found.next()?;
    if found.next().is_some() {
        return None;
    }
    Some(first)
}
