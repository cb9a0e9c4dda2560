//! Authentication middleware and extractors.
//!
//! Bearer tokens are HS256 JWTs minted by the out-of-scope auth service (or
//! the CLI's `token` command for development). The [`CurrentUser`] extractor
//! is the only place a token is verified.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use brewbox_core::UserId;

use crate::error::AppError;
use crate::state::AppState;

const REJECTION_MESSAGE: &str = "user not authorized";

/// JWT claims carried by a bearer token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the authenticated user's ID.
    pub sub: UserId,
    /// Expiry as a Unix timestamp.
    pub exp: i64,
    /// Issued-at as a Unix timestamp.
    pub iat: i64,
}

/// HS256 signing and verification keys derived from the configured secret.
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl JwtKeys {
    /// Derive keys from the raw secret bytes.
    #[must_use]
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }

    /// Mint a token for a user, valid for `ttl_secs` seconds.
    ///
    /// # Errors
    ///
    /// Returns `jsonwebtoken::errors::Error` if signing fails.
    pub fn mint(
        &self,
        user_id: UserId,
        ttl_secs: i64,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: user_id,
            exp: now + ttl_secs,
            iat: now,
        };
        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
    }

    /// Verify a token and return its claims.
    ///
    /// # Errors
    ///
    /// Returns `jsonwebtoken::errors::Error` if the token is invalid or
    /// expired.
    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let mut validation = Validation::new(Algorithm::HS256);
        // No expiry leeway: a token past `exp` is invalid immediately.
        validation.leeway = 0;
        jsonwebtoken::decode::<Claims>(token, &self.decoding, &validation).map(|data| data.claims)
    }
}

/// Extractor that requires an authenticated user.
///
/// Rejects with 401 if the `Authorization: Bearer` header is missing or the
/// token fails verification.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     CurrentUser(user_id): CurrentUser,
/// ) -> impl IntoResponse {
///     format!("Hello, {user_id}!")
/// }
/// ```
pub struct CurrentUser(pub UserId);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header_value = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::Unauthorized(REJECTION_MESSAGE.to_owned()))?;

        let token = header_value
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::Unauthorized(REJECTION_MESSAGE.to_owned()))?;

        let claims = state
            .jwt_keys()
            .verify(token)
            .map_err(|_| AppError::Unauthorized(REJECTION_MESSAGE.to_owned()))?;

        Ok(Self(claims.sub))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn test_keys() -> JwtKeys {
        JwtKeys::new(b"k9v2Rm7pXq4Zw8Tn3Jd6Fh1Bc5Ys0Lg!")
    }

    #[test]
    fn test_mint_then_verify_round_trip() {
        let keys = test_keys();
        let user_id = UserId::generate();

        let token = keys.mint(user_id, 3600).unwrap();
        let claims = keys.verify(&token).unwrap();

        assert_eq!(claims.sub, user_id);
    }

    #[test]
    fn test_expired_token_rejected() {
        let keys = test_keys();
        let token = keys.mint(UserId::generate(), -3600).unwrap();

        assert!(keys.verify(&token).is_err());
    }

    #[test]
    fn test_recently_expired_token_rejected() {
        // Inside the 60s leeway jsonwebtoken would otherwise grant.
        let keys = test_keys();
        let token = keys.mint(UserId::generate(), -30).unwrap();

        assert!(keys.verify(&token).is_err());
    }

    #[test]
    fn test_wrong_key_rejected() {
        let keys = test_keys();
        let other = JwtKeys::new(b"Qw3Er5Ty7Ui9Op1As2Df4Gh6Jk8Lz0Xc");

        let token = keys.mint(UserId::generate(), 3600).unwrap();
        assert!(other.verify(&token).is_err());
    }

    #[test]
    fn test_garbage_token_rejected() {
        let keys = test_keys();
        assert!(keys.verify("not-a-jwt").is_err());
    }
}
