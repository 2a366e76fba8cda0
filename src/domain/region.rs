//! Region codes and the configured set of supported regions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SwitchError;

/// Regions switchable out of the box, in display and matching order.
pub const DEFAULT_REGIONS: [&str; 4] = ["US", "NL", "GB", "HK"];

/// A two-character region identifier such as `US` or `GB`.
///
/// Always stored upper case. Construction rejects anything that is not
/// exactly two ASCII alphanumeric characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RegionCode(String);

impl RegionCode {
    /// Parse a region code, normalising to upper case.
    ///
    /// Surrounding whitespace is not stripped: `" US"` is not a region code.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.len() != 2 || !raw.chars().all(|c| c.is_ascii_alphanumeric()) {
            return None;
        }
        Some(Self(raw.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Typed input such as a command-line argument. Surrounding whitespace is
/// ignored here, unlike [`RegionCode::parse`].
impl FromStr for RegionCode {
    type Err = SwitchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s.trim()).ok_or_else(|| SwitchError::InvalidRegion(s.to_string()))
    }
}

impl TryFrom<String> for RegionCode {
    type Error = SwitchError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or(SwitchError::InvalidRegion(value))
    }
}

impl From<RegionCode> for String {
    fn from(code: RegionCode) -> Self {
        code.0
    }
}

/// Ordered, duplicate-free list of regions the switcher offers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportedRegions(Vec<RegionCode>);

impl SupportedRegions {
    /// Build from an iterator, dropping duplicates while keeping first-seen order.
    pub fn new(regions: impl IntoIterator<Item = RegionCode>) -> Self {
        let mut out: Vec<RegionCode> = Vec::new();
        for region in regions {
            if !out.contains(&region) {
                out.push(region);
            }
        }
        Self(out)
    }

    /// Parse a comma separated list such as `"US,NL,GB"`.
    ///
    /// Unparseable entries are skipped and logged.
    pub fn parse_list(raw: &str) -> Self {
        Self::new(raw.split(',').map(str::trim).filter(|s| !s.is_empty()).filter_map(|s| {
            let parsed = RegionCode::parse(s);
            if parsed.is_none() {
                tracing::warn!(entry = s, "Ignoring invalid region code");
            }
            parsed
        }))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RegionCode> {
        self.0.iter()
    }

    pub fn contains(&self, region: &RegionCode) -> bool {
        self.0.contains(region)
    }

    /// 1-based position of `region`, as used for the affordance's active column.
    pub fn position(&self, region: &RegionCode) -> Option<usize> {
        self.0.iter().position(|r| r == region).map(|i| i + 1)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for SupportedRegions {
    fn default() -> Self {
        Self::new(DEFAULT_REGIONS.iter().filter_map(|r| RegionCode::parse(r)))
    }
}

impl<'a> IntoIterator for &'a SupportedRegions {
    type Item = &'a RegionCode;
    type IntoIter = std::slice::Iter<'a, RegionCode>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalises_case() {
        assert_eq!(RegionCode::parse("gb").unwrap().as_str(), "GB");
        assert_eq!(" us ".parse::<RegionCode>().unwrap().as_str(), "US");
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert!(RegionCode::parse("").is_none());
        assert!(RegionCode::parse("U").is_none());
        assert!(RegionCode::parse("USA").is_none());
        assert!(RegionCode::parse("U-").is_none());
        assert!(RegionCode::parse(" US").is_none());
        assert!(RegionCode::parse("US\n").is_none());
    }

    #[test]
    fn test_from_str_error() {
        let err = "XYZ".parse::<RegionCode>().unwrap_err();
        assert!(matches!(err, SwitchError::InvalidRegion(ref s) if s == "XYZ"));
    }

    #[test]
    fn test_serde_round_trip_rejects_bad_codes() {
        let code: RegionCode = serde_json::from_str("\"nl\"").unwrap();
        assert_eq!(code.as_str(), "NL");
        assert!(serde_json::from_str::<RegionCode>("\"NLD\"").is_err());
    }

    #[test]
    fn test_default_regions_order() {
        let regions = SupportedRegions::default();
        let codes: Vec<&str> = regions.iter().map(|r| r.as_str()).collect();
        assert_eq!(codes, vec!["US", "NL", "GB", "HK"]);
    }

    #[test]
    fn test_parse_list_skips_invalid_and_duplicates() {
        let regions = SupportedRegions::parse_list("us, GB,,XYZ,gb,HK");
        let codes: Vec<&str> = regions.iter().map(|r| r.as_str()).collect();
        assert_eq!(codes, vec!["US", "GB", "HK"]);
    }

    #[test]
    fn test_position_is_one_based() {
        let regions = SupportedRegions::default();
        assert_eq!(regions.position(&RegionCode::parse("US").unwrap()), Some(1));
        assert_eq!(regions.position(&RegionCode::parse("HK").unwrap()), Some(4));
        assert_eq!(regions.position(&RegionCode::parse("DE").unwrap()), None);
    }
}
