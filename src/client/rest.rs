use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::AuthError;

/// Request body for `accounts:signInWithPassword`.
///
/// `returnSecureToken` must be `true` for the response to carry the ID and
/// refresh tokens.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SignInRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub return_secure_token: bool,
}

/// Response body for `accounts:signInWithPassword`.
///
/// `expiresIn` is a string of decimal seconds, not a number.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SignInResponse {
    pub local_id: String,
    #[serde(default)]
    pub email: Option<String>,
    pub id_token: String,
    pub refresh_token: String,
    pub expires_in: String,
}

/// Response body for the secure-token `token` exchange.
///
/// The endpoint speaks snake_case, unlike the identity-toolkit endpoint, and
/// may rotate the refresh token.
#[derive(Debug, Deserialize)]
pub(crate) struct RefreshResponse {
    pub id_token: String,
    pub refresh_token: String,
    pub expires_in: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    code: u16,
    message: String,
}

/// Decode a response from either endpoint, mapping non-2xx statuses through
/// the `{ "error": { "code", "message" } }` body when one is present.
pub(crate) async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, AuthError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    match response.json::<ApiErrorBody>().await {
        Ok(body) => {
            let code = if body.error.code == 0 {
                status.as_u16()
            } else {
                body.error.code
            };

            Err(AuthError::from_api(code, &body.error.message))
        }
        // The body was not the structured error shape; all that is left to
        // report is the status line.
        Err(_) => Err(AuthError::Api {
            code: status.as_u16(),
            message: status.to_string(),
        }),
    }
}

/// Parse the string-typed `expiresIn` / `expires_in` field into seconds.
pub(crate) fn parse_expires_in(raw: &str) -> Result<i64, AuthError> {
    raw.parse::<i64>().map_err(|err| {
        AuthError::InvalidArgument(format!("Invalid expiresIn '{raw}'. Received '{err}'"))
    })
}
