//! Login client for the Aviary API.

use serde_json::json;
use tracing::{debug, warn};

use super::classify;
use super::types::{Credentials, LoginOutcome, Outcome};

/// Default base URL for the Aviary API.
pub const DEFAULT_BASE_URL: &str = "https://api.aviary.app";

/// Login endpoint path, relative to the base URL.
const LOGIN_PATH: &str = "/api/v1/auth/login";

/// Client for the authentication endpoint.
///
/// Holds no call-specific state: concurrent `login` calls are independent,
/// and a single instance can be shared across tasks without locking.
#[derive(Debug, Clone)]
pub struct LoginClient {
    base_url: String,
    http: reqwest::Client,
}

impl LoginClient {
    /// Creates a new login client against the given base URL.
    ///
    /// # Panics
    /// - In test builds (`#[cfg(test)]`), panics if `base_url` is the production API.
    /// - At runtime, panics if `AVIARY_BLOCK_REAL_API=1` and `base_url` is the production API.
    ///
    /// This prevents tests from accidentally making real network requests.
    /// Use `AVIARY_BASE_URL` or config to point to a mock server.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();

        // Compile-time guard for unit tests
        #[cfg(test)]
        if base_url == DEFAULT_BASE_URL {
            panic!(
                "Tests must not use the production Aviary API!\n\
                 Set AVIARY_BASE_URL to a mock server (e.g., wiremock).\n\
                 Found base_url: {base_url}"
            );
        }

        // Runtime guard for integration tests (set AVIARY_BLOCK_REAL_API=1 in test harness)
        #[cfg(not(test))]
        if std::env::var("AVIARY_BLOCK_REAL_API").is_ok_and(|v| v == "1")
            && base_url == DEFAULT_BASE_URL
        {
            panic!(
                "AVIARY_BLOCK_REAL_API=1 but trying to use the production Aviary API!\n\
                 Set AVIARY_BASE_URL to a mock server.\n\
                 Found base_url: {base_url}"
            );
        }

        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    /// Performs one login request and resolves to exactly one outcome.
    ///
    /// Issues a single `POST {base_url}/api/v1/auth/login` with a JSON body
    /// carrying the credentials. Every failure mode is folded into the
    /// returned [`LoginOutcome`]; this future never returns an error and
    /// never panics on empty credential fields (the server decides).
    ///
    /// No retries, no configured timeout: the transport's own defaults
    /// apply, and a call runs to completion or failure once started.
    pub async fn login(&self, credentials: &Credentials) -> LoginOutcome {
        let url = format!("{}{LOGIN_PATH}", self.base_url);

        let response = self
            .http
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&json!({
                "username": credentials.username,
                "password": credentials.password,
            }))
            .send()
            .await;

        let response = match response {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, "login request failed without a response");
                return Outcome::NetworkFailure;
            }
        };

        let status = response.status().as_u16();
        let body = match response.bytes().await {
            Ok(body) => body,
            Err(err) => {
                // The connection dropped mid-body: no complete response obtained.
                warn!(error = %err, "login response body could not be read");
                return Outcome::NetworkFailure;
            }
        };

        debug!(status, body_len = body.len(), "login response received");
        classify(status, &body)
    }
}
