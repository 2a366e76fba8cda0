//! Remote token validation against the identity endpoint.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::Token;
use crate::traits::{Headers, HttpClient};

/// Confirms whether a token still authenticates.
#[async_trait]
pub trait TokenValidator: Send + Sync {
    /// `false` covers both "rejected" and "could not be checked".
    async fn is_valid(&self, token: &Token) -> bool;
}

/// Validates by presenting the token as a bearer credential in a GET.
///
/// Only HTTP 200 counts as valid. No retries.
#[derive(Debug, Clone)]
pub struct RemoteTokenValidator<C> {
    client: C,
    url: String,
}

impl<C: HttpClient> RemoteTokenValidator<C> {
    pub fn new(client: C, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl<C: HttpClient> TokenValidator for RemoteTokenValidator<C> {
    async fn is_valid(&self, token: &Token) -> bool {
        if token.is_empty() {
            return false;
        }

        let mut headers = Headers::new();
        headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", token.as_str()),
        );

        match self.client.get(&self.url, &headers).await {
            Ok(response) if response.status == 200 => {
                debug!(token = %token.masked(), "Token validated");
                true
            }
            Ok(response) => {
                debug!(status = response.status, token = %token.masked(), "Token rejected");
                false
            }
            Err(e) => {
                warn!(error = %e, "Token validation request failed");
                false
            }
        }
    }
}
