//! Command handlers for the regionswitch CLI.
//!
//! Handlers return the text to print so they can be tested without
//! capturing stdout.

use std::sync::Arc;
use tracing::debug;

use super::args::{CliCommand, USAGE};
use super::version::version_line;
use crate::adapters::{FileKeyValueStore, ReqwestHttpClient, StoredCookieJar};
use crate::config::SwitcherConfig;
use crate::domain::RegionCode;
use crate::error::{SwitchError, SwitchResult};
use crate::session::{Carriers, RegionResolver, RemoteTokenValidator, TokenStore, TokenValidator};
use crate::traits::KeyValueStore;

/// Collaborators the CLI commands run against.
#[derive(Clone)]
pub struct CliContext {
    config: SwitcherConfig,
    storage: Arc<dyn KeyValueStore>,
    validator: Arc<dyn TokenValidator>,
}

impl CliContext {
    pub fn new(
        config: SwitcherConfig,
        storage: Arc<dyn KeyValueStore>,
        validator: Arc<dyn TokenValidator>,
    ) -> Self {
        Self {
            config,
            storage,
            validator,
        }
    }

    /// File store at the configured path (or `~/.regionswitch/storage.json`)
    /// and a reqwest-backed validator.
    pub fn from_config(config: SwitcherConfig) -> SwitchResult<Self> {
        let store = match &config.store_path {
            Some(path) => FileKeyValueStore::new(path),
            None => FileKeyValueStore::at_default_location().ok_or_else(|| {
                SwitchError::Config(
                    "no home directory found, set REGIONSWITCH_STORE".to_string(),
                )
            })?,
        };
        debug!(path = %store.path().display(), "Using token store file");

        let validator =
            RemoteTokenValidator::new(ReqwestHttpClient::new(), config.validation_url.clone());
        Ok(Self::new(config, Arc::new(store), Arc::new(validator)))
    }

    fn token_store(&self) -> TokenStore {
        let cookies = Arc::new(StoredCookieJar::new(self.storage.clone()));
        let carriers = Carriers::new(cookies, &self.config);
        TokenStore::new(
            self.storage.clone(),
            carriers,
            self.config.storage_key.clone(),
        )
    }

    fn resolver(&self) -> RegionResolver {
        RegionResolver::new(
            self.config.supported_regions.clone(),
            self.config.region_marker_prefix.clone(),
        )
    }
}

/// Run `command` and return its output.
pub async fn execute(command: CliCommand, ctx: &CliContext) -> SwitchResult<String> {
    match command {
        CliCommand::Version => Ok(version_line()),
        CliCommand::Help => Ok(USAGE.to_string()),
        CliCommand::Tokens => Ok(list_tokens(ctx)),
        CliCommand::Store { region, token } => {
            ctx.token_store().try_put(&region, &token)?;
            Ok(format!("Stored token {} for {}", token.masked(), region))
        }
        CliCommand::Validate { region } => validate(ctx, &region).await,
        CliCommand::Resolve { url, current } => Ok(resolve(ctx, &url, current.as_ref())),
    }
}

fn list_tokens(ctx: &CliContext) -> String {
    let mut tokens: Vec<_> = ctx.token_store().load().into_iter().collect();
    if tokens.is_empty() {
        return "No stored tokens".to_string();
    }
    tokens.sort_by(|a, b| a.0.cmp(&b.0));

    tokens
        .iter()
        .map(|(region, token)| {
            let note = if ctx.config.supported_regions.contains(region) {
                ""
            } else {
                "  (unsupported)"
            };
            format!("{}  {}{}", region, token.masked(), note)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

async fn validate(ctx: &CliContext, region: &RegionCode) -> SwitchResult<String> {
    let token = ctx
        .token_store()
        .get(region)
        .ok_or_else(|| SwitchError::NoStoredToken(region.to_string()))?;

    if ctx.validator.is_valid(&token).await {
        Ok(format!("{}: token {} is valid", region, token.masked()))
    } else {
        Err(SwitchError::TokenRejected)
    }
}

fn resolve(ctx: &CliContext, url: &str, current: Option<&RegionCode>) -> String {
    let resolver = ctx.resolver();
    match current {
        Some(current) => {
            let desired = resolver.resolve_desired_region(url, current);
            if &desired == current {
                format!("{} (no switch)", desired)
            } else {
                format!("{} (switch from {})", desired, current)
            }
        }
        None => match resolver.matching_region(url) {
            Some(region) => region.to_string(),
            None => "No region marker in URL".to_string(),
        },
    }
}
