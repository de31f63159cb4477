//! Login command handler.

use anyhow::{Context, Result};
use aviary_core::auth::{Credentials, LoginClient, Outcome};
use aviary_core::config;

pub async fn run(username: String, password: String) -> Result<()> {
    let config = config::Config::load().context("load config")?;
    let base_url = config::resolve_api_base_url(&config)?;

    let client = LoginClient::new(base_url);
    let credentials = Credentials::new(username, password);

    match client.login(&credentials).await {
        Outcome::Success(response) => {
            println!("Logged in: {}", response.message);
            println!("Access token: {}", mask_token(&response.data.access_token));
            if let Some(refresh) = response.data.refresh_token.as_deref() {
                println!("Refresh token: {}", mask_token(refresh));
            }
            Ok(())
        }
        Outcome::RequestError(response) => {
            anyhow::bail!("Login rejected: {}", response.message)
        }
        Outcome::PathError => {
            anyhow::bail!("Login rejected: check the credentials and the endpoint")
        }
        Outcome::ServerError => anyhow::bail!("The Aviary service reported an internal error"),
        Outcome::NetworkFailure => {
            anyhow::bail!("Could not reach the Aviary service (network failure)")
        }
    }
}

/// Returns a masked version of a token for display (first 12 chars + ...).
fn mask_token(token: &str) -> String {
    if token.len() <= 16 {
        return "***".to_string();
    }
    format!("{}...", &token[..12])
}
