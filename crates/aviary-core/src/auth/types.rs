//! Request and response types for the login flow.

use std::fmt;

use serde::Deserialize;

/// Credentials for one login attempt.
///
/// Fields may be empty; the server decides whether they are acceptable.
/// The `Debug` impl redacts the password so credentials never end up in
/// logs or error chains.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Token bundle inside a successful login response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    /// Short-lived access token.
    pub access_token: String,
    /// Long-lived refresh token; the backend may omit it or send `null`.
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// Decoded success payload of the login endpoint.
///
/// Wire shape:
/// `{"data": {"accessToken": "...", "refreshToken": "..."|null}, "message": "...", "result": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub data: TokenPair,
    pub message: String,
    pub result: String,
}

/// Classified outcome of one authentication request.
///
/// Closed set: callers match exhaustively, and each request resolves to
/// exactly one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// 2xx response whose body decoded into the expected shape.
    Success(T),
    /// Request reached the server but was rejected for caller-side reasons.
    ///
    /// Reserved in the taxonomy; the classifier currently folds all 4xx
    /// into [`Outcome::PathError`].
    RequestError(T),
    /// 4xx, or a 2xx body that violated the response contract.
    PathError,
    /// 5xx: the server reported an internal failure.
    ServerError,
    /// No response obtained (timeout, connectivity loss, TLS failure),
    /// or a status outside the ranges the classifier understands.
    NetworkFailure,
}

impl<T> Outcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }
}

/// Outcome of a login request.
pub type LoginOutcome = Outcome<LoginResponse>;
