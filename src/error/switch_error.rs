//! Unified error type for region switching.

use thiserror::Error;

use super::category::ErrorCategory;
use super::storage::StorageError;
use crate::traits::HttpError;

/// Errors surfaced by the switcher library and binary.
///
/// Flow-level aborts inside the coordinator are reported as outcomes, not
/// errors; this type covers failures a caller has to act on.
#[derive(Debug, Error)]
pub enum SwitchError {
    /// The host session service could not be located
    #[error("Host integration unavailable: {0}")]
    IntegrationUnavailable(String),

    /// Key-value storage failed
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Value is not a two-character region code
    #[error("Invalid region code: {0:?}")]
    InvalidRegion(String),

    /// No token stored for the region
    #[error("No session token stored for {0}")]
    NoStoredToken(String),

    /// Identity endpoint rejected the token
    #[error("Token rejected by identity endpoint")]
    TokenRejected,

    /// Transport failure talking to the identity endpoint
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    /// Invalid settings or arguments
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SwitchError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SwitchError::IntegrationUnavailable(_) => ErrorCategory::Integration,
            SwitchError::Storage(_) => ErrorCategory::Storage,
            SwitchError::InvalidRegion(_) | SwitchError::NoStoredToken(_) => {
                ErrorCategory::MissingData
            }
            SwitchError::TokenRejected | SwitchError::Http(_) => ErrorCategory::RemoteValidation,
            SwitchError::Config(_) => ErrorCategory::Configuration,
        }
    }

    /// Message suitable for showing to the end user.
    pub fn user_message(&self) -> String {
        match self {
            SwitchError::IntegrationUnavailable(_) => {
                "Unexpected error: the session service is unavailable. Please report this issue."
                    .to_string()
            }
            SwitchError::NoStoredToken(region) => {
                format!("No session token found for {}. Please login...", region)
            }
            SwitchError::TokenRejected | SwitchError::Http(_) => {
                "This session can no longer be used. Please login again.".to_string()
            }
            other => other.to_string(),
        }
    }
}
