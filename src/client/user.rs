use std::sync::{Arc, Mutex};

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::{DateTime, Duration, Utc};
use log::info;
use serde::Deserialize;

use crate::client::rest;
use crate::constant::TOKEN_REFRESH_SKEW_SECONDS;
use crate::AuthError;

/// The result of a completed sign-in.
#[derive(Debug, Clone)]
pub struct UserCredential {
    /// The signed-in user.
    pub user: User,

    /// The identity provider the sign-in went through. Always `"password"`
    /// for the email/password flow.
    pub provider_id: &'static str,
}

/// A handle to a signed-in user.
///
/// The handle owns the token set returned at sign-in and refreshes it
/// against the secure-token endpoint on demand. Clones share the same token
/// cache, so a refresh through one handle is visible to all of them.
#[derive(Debug, Clone)]
pub struct User {
    http: reqwest::Client,
    api_key: String,
    secure_token_url: String,
    uid: String,
    email: Option<String>,
    tokens: Arc<Mutex<TokenSet>>,
}

#[derive(Debug)]
struct TokenSet {
    id_token: String,
    refresh_token: String,
    expires_at: DateTime<Utc>,
}

impl User {
    pub(crate) fn new(
        http: reqwest::Client,
        api_key: String,
        secure_token_url: String,
        response: rest::SignInResponse,
        expires_in: i64,
    ) -> Self {
        Self {
            http,
            api_key,
            secure_token_url,
            uid: response.local_id,
            email: response.email,
            tokens: Arc::new(Mutex::new(TokenSet {
                id_token: response.id_token,
                refresh_token: response.refresh_token,
                expires_at: Utc::now() + Duration::seconds(expires_in),
            })),
        }
    }

    /// The local ID of the user within the project.
    #[must_use]
    pub fn uid(&self) -> &str {
        &self.uid
    }

    /// The email address the user signed in with, as echoed by the server.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Get an ID token for the user.
    ///
    /// With `force_refresh` unset the cached token is returned as long as it
    /// is still fresh; a stale token triggers a refresh. With `force_refresh`
    /// set, the refresh token is always exchanged for a newly minted ID
    /// token.
    ///
    /// ## Errors
    ///
    /// Returns an error if the refresh-token exchange is rejected (for
    /// example after the token has been revoked), or if the request fails
    /// outright.
    pub async fn get_id_token(&self, force_refresh: bool) -> Result<String, AuthError> {
        if !force_refresh {
            let tokens = self.tokens.lock().expect("token cache poisoned");

            if is_fresh(tokens.expires_at, Utc::now()) {
                return Ok(tokens.id_token.clone());
            }
        }

        self.refresh().await
    }

    /// Exchange the refresh token for a fresh ID token and update the cache.
    async fn refresh(&self) -> Result<String, AuthError> {
        let refresh_token = self
            .tokens
            .lock()
            .expect("token cache poisoned")
            .refresh_token
            .clone();

        info!(uid = self.uid.as_str(); "Exchanging refresh token for a fresh ID token");

        let response = self
            .http
            .post(format!("{}/token", self.secure_token_url))
            .query(&[("key", self.api_key.as_str())])
            .form(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", refresh_token.as_str()),
            ])
            .send()
            .await?;

        let body: rest::RefreshResponse = rest::decode(response).await?;
        let expires_in = rest::parse_expires_in(&body.expires_in)?;

        let mut tokens = self.tokens.lock().expect("token cache poisoned");
        tokens.id_token = body.id_token.clone();
        // The endpoint may rotate the refresh token.
        tokens.refresh_token = body.refresh_token;
        tokens.expires_at = Utc::now() + Duration::seconds(expires_in);

        Ok(body.id_token)
    }
}

/// Whether a token expiring at `expires_at` still counts as fresh at `now`,
/// leaving the skew allowance before expiry.
fn is_fresh(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    expires_at - Duration::seconds(TOKEN_REFRESH_SKEW_SECONDS) > now
}

/// The claims of an ID token, decoded without signature verification.
///
/// Useful for reporting when a token expires or which account it belongs to.
/// Nothing here is trustworthy until the token has been verified server-side
/// against the project's public keys.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IdTokenClaims {
    /// The audience, which for Firebase ID tokens is the project ID.
    #[serde(default)]
    pub aud: Option<String>,

    /// Expiry, as seconds since the Unix epoch.
    pub exp: i64,

    /// Issued-at, as seconds since the Unix epoch.
    pub iat: i64,

    /// The local ID of the user.
    #[serde(default)]
    pub user_id: Option<String>,

    /// The email address on the account.
    #[serde(default)]
    pub email: Option<String>,

    /// Whether the email address has been verified.
    #[serde(default)]
    pub email_verified: Option<bool>,
}

impl IdTokenClaims {
    /// Decode the payload segment of an ID token **without verifying the
    /// signature**.
    ///
    /// ## Errors
    ///
    /// Returns an error if the token is not a three-segment JWT, or if the
    /// payload is not valid base64url-encoded JSON.
    pub fn decode_unverified(token: &str) -> Result<Self, AuthError> {
        let mut segments = token.split('.');

        let payload = match (segments.next(), segments.next(), segments.next()) {
            (Some(_), Some(payload), Some(_)) => payload,
            _ => {
                return Err(AuthError::InvalidArgument(
                    "ID token is not a three-segment JWT".into(),
                ))
            }
        };

        let bytes = URL_SAFE_NO_PAD.decode(payload).map_err(|err| {
            AuthError::InvalidArgument(format!("Invalid token payload. Received '{err}'"))
        })?;

        serde_json::from_slice(&bytes).map_err(|err| {
            AuthError::InvalidArgument(format!("Invalid token claims. Received '{err}'"))
        })
    }

    /// The expiry instant of the token, if `exp` is in range.
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}
