/// Production identity-toolkit endpoint (sign-in and account calls).
pub(crate) const IDENTITY_TOOLKIT_URL: &str = "https://identitytoolkit.googleapis.com/v1";

/// Production secure-token endpoint (refresh-token exchange).
pub(crate) const SECURE_TOKEN_URL: &str = "https://securetoken.googleapis.com/v1";

/// A cached ID token within this many seconds of its expiry is treated as
/// stale and refreshed, matching the hosted SDK's proactive-refresh buffer.
pub(crate) const TOKEN_REFRESH_SKEW_SECONDS: i64 = 30;
