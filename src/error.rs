use thiserror::Error;

/// An error occurred while authenticating against the Firebase Auth REST
/// API.
#[derive(Debug, Error)]
pub enum AuthError {
    /// An argument which was provided to the client was invalid.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The email/password pair was rejected by the server.
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// The user account has been disabled by an administrator.
    #[error("The user account has been disabled")]
    UserDisabled,

    /// Sign-in for this account is temporarily blocked after too many
    /// failed attempts.
    #[error("Too many failed attempts, try again later")]
    TooManyAttempts,

    /// The refresh token was rejected when exchanging it for a fresh ID
    /// token.
    #[error("Invalid refresh token: {0}")]
    InvalidRefreshToken(String),

    /// A server rejection which does not map onto a more specific variant.
    #[error("API error {code}: {message}")]
    Api {
        /// The HTTP status (or the code reported in the error body).
        code: u16,
        /// The raw error message from the server.
        message: String,
    },

    /// The request never produced a usable response (connect, IO, or body
    /// decode failure).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl AuthError {
    /// Classify a rejection from the identity-toolkit or secure-token
    /// endpoint.
    ///
    /// Error messages are upper-snake codes, occasionally followed by
    /// ` : <explanation>` (for example
    /// `TOO_MANY_ATTEMPTS_TRY_LATER : Access to this account has been
    /// temporarily disabled ...`), so only the leading code is matched.
    pub(crate) fn from_api(code: u16, message: &str) -> Self {
        let reason = message.split(':').next().unwrap_or(message).trim();

        match reason {
            "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS"
            | "INVALID_EMAIL" => Self::InvalidCredentials(reason.into()),
            "USER_DISABLED" => Self::UserDisabled,
            "TOO_MANY_ATTEMPTS_TRY_LATER" => Self::TooManyAttempts,
            "INVALID_REFRESH_TOKEN" | "TOKEN_EXPIRED" | "USER_NOT_FOUND" => {
                Self::InvalidRefreshToken(reason.into())
            }
            _ => Self::Api {
                code,
                message: message.into(),
            },
        }
    }
}
