//! Error category classification.
//!
//! Categories decide how a failure is surfaced: most are logged and the
//! current flow step is abandoned, only integration failures reach the user.

use std::fmt;

/// High-level categorization of switcher errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Host objects or page elements not ready yet.
    Transient,

    /// Expected data absent: no user, no region, no stored token.
    MissingData,

    /// A token could not be confirmed against the identity endpoint.
    RemoteValidation,

    /// The host application's integration points could not be found.
    Integration,

    /// The persistent key-value area failed to read or write.
    Storage,

    /// Invalid settings or command-line input.
    Configuration,
}

impl ErrorCategory {
    /// Whether the failure is shown to the end user instead of only logged.
    pub fn is_user_visible(&self) -> bool {
        matches!(self, ErrorCategory::Integration | ErrorCategory::Configuration)
    }

    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Transient => "transient",
            ErrorCategory::MissingData => "missing_data",
            ErrorCategory::RemoteValidation => "remote_validation",
            ErrorCategory::Integration => "integration",
            ErrorCategory::Storage => "storage",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// Returns suggested recovery actions for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Transient => "Reload the page",
            ErrorCategory::MissingData | ErrorCategory::RemoteValidation => {
                "Log in again for this region"
            }
            ErrorCategory::Integration => {
                "The host application changed; report this issue"
            }
            ErrorCategory::Storage => "Check file permissions and available disk space",
            ErrorCategory::Configuration => "Check your configuration settings",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_visible() {
        assert!(ErrorCategory::Integration.is_user_visible());
        assert!(!ErrorCategory::Transient.is_user_visible());
        assert!(!ErrorCategory::RemoteValidation.is_user_visible());
    }

    #[test]
    fn test_category_display() {
        assert_eq!(format!("{}", ErrorCategory::MissingData), "missing_data");
        assert_eq!(ErrorCategory::Integration.as_str(), "integration");
    }

    #[test]
    fn test_recovery_hint() {
        assert!(ErrorCategory::RemoteValidation.recovery_hint().contains("Log in"));
        assert!(ErrorCategory::Storage.recovery_hint().contains("permissions"));
    }
}
