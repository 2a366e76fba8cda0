//! The host application's authenticated user, as far as region resolution needs it.

use serde::{Deserialize, Serialize};

/// Country attribute attached to a host user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingCountry {
    pub alpha2: Option<String>,
}

/// Authenticated user exposed by the host session service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostUser {
    pub shipping_country: Option<ShippingCountry>,
}

impl HostUser {
    /// User whose shipping country is `alpha2`.
    pub fn in_country(alpha2: impl Into<String>) -> Self {
        Self {
            shipping_country: Some(ShippingCountry {
                alpha2: Some(alpha2.into()),
            }),
        }
    }

    /// Raw country code, if the host populated one.
    pub fn country_code(&self) -> Option<&str> {
        self.shipping_country.as_ref()?.alpha2.as_deref()
    }
}
