//! Authentication against the Aviary API.
//!
//! One login request per call: the client POSTs credentials, the classifier
//! maps the HTTP outcome into a closed set of [`Outcome`] variants, and the
//! caller receives exactly one resolved value. No retries, no shared state.

mod classify;
mod client;
mod types;

pub use classify::classify;
pub use client::{DEFAULT_BASE_URL, LoginClient};
pub use types::{Credentials, LoginOutcome, LoginResponse, Outcome, TokenPair};
