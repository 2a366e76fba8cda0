//! Domain types shared by the session switching core.
//!
//! - [`RegionCode`] / [`SupportedRegions`] - region identifiers
//! - [`Token`] - opaque session credential
//! - [`HostUser`] - the host's authenticated user
//! - [`Cookie`] - credential carrier values

pub mod cookie;
pub mod region;
pub mod token;
pub mod user;

pub use cookie::{parse_cookie_value, Cookie, SameSite};
pub use region::{RegionCode, SupportedRegions, DEFAULT_REGIONS};
pub use token::Token;
pub use user::{HostUser, ShippingCountry};
