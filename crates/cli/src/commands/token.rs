//! Development token minting.
//!
//! Mints an HS256 bearer token signed with `BREWBOX_JWT_SECRET`, for use
//! against a locally running API. Production tokens come from the auth
//! service, not this command.

use std::str::FromStr;

use brewbox_api::middleware::JwtKeys;
use brewbox_core::UserId;

use super::CliError;

/// Mint a bearer token for a user, printing it to stdout.
///
/// # Errors
///
/// Returns an error if the user ID is malformed, the secret is missing, or
/// signing fails.
pub fn mint(user: &str, ttl_secs: i64) -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let user_id = UserId::from_str(user)
        .map_err(|e| CliError::InvalidArgument(format!("user: {e}")))?;

    let secret = std::env::var("BREWBOX_JWT_SECRET")
        .map_err(|_| CliError::MissingEnvVar("BREWBOX_JWT_SECRET"))?;

    let token = JwtKeys::new(secret.as_bytes()).mint(user_id, ttl_secs)?;

    // The token goes to stdout so it can be piped into curl or a test script.
    #[allow(clippy::print_stdout)]
    {
        println!("{token}");
    }

    Ok(())
}
