//! Session multiplexing core.
//!
//! Holds one token per region and swaps the active credential when the
//! navigation target asks for a different region than the live session.
//!
//! - [`TokenStore`] - durable region → token map
//! - [`CredentialActivator`] - single writer of the active credential
//! - [`RegionResolver`] - current and desired region
//! - [`TokenValidator`] - remote token check
//! - [`Poller`] - bounded waits for host readiness
//! - [`Coordinator`] - page-load state machine
//! - [`LoginCallback`] - hand-off after a login redirect
//! - [`on_page_load`] - dispatch between the two flows

pub mod activator;
pub mod affordance;
pub mod bootstrap;
pub mod callback;
pub mod carriers;
pub mod coordinator;
pub mod poller;
pub mod resolver;
pub mod token_store;
pub mod validator;

pub use activator::CredentialActivator;
pub use affordance::{RegionOption, SwitchAffordance};
pub use bootstrap::{on_page_load, PageEnvironment, PageKind, PageOutcome};
pub use callback::{CallbackOutcome, LoginCallback};
pub use carriers::Carriers;
pub use coordinator::{Collaborators, Coordinator, LoadOutcome, SwitchOutcome, SwitchState};
pub use poller::Poller;
pub use resolver::{AbortReason, RegionResolver};
pub use token_store::{RegionTokens, TokenStore};
pub use validator::{RemoteTokenValidator, TokenValidator};
