//! Error handling for the region switcher.
//!
//! - [`SwitchError`] - errors a caller has to act on
//! - [`StorageError`] - key-value area failures
//! - [`ErrorCategory`] - classification deciding how errors are surfaced
//!
//! | Category | Surfaced to user |
//! |----------|------------------|
//! | Transient | No, flow aborts |
//! | MissingData | No, flow step aborts |
//! | RemoteValidation | No, credential cleared |
//! | Integration | Yes, blocking notification |
//! | Storage | No, best-effort |
//! | Configuration | Yes (CLI) |

mod category;
mod storage;
mod switch_error;

pub use category::ErrorCategory;
pub use storage::StorageError;
pub use switch_error::SwitchError;

/// Type alias for Results using SwitchError.
pub type SwitchResult<T> = Result<T, SwitchError>;
