use std::sync::Mutex;

use log::info;

pub use user::{IdTokenClaims, User, UserCredential};

use crate::constant::{IDENTITY_TOOLKIT_URL, SECURE_TOKEN_URL};
use crate::{AuthError, FirebaseConfig, Persistence};

mod rest;
mod user;

/// The client for the email/password flow of the Firebase Auth REST API.
///
/// A client is constructed against a [`FirebaseConfig`] and signs users in
/// with [`sign_in_with_email_and_password`](Self::sign_in_with_email_and_password).
/// With [`Persistence::InMemory`] (the default) the client also keeps the
/// current user until [`sign_out`](Self::sign_out).
#[derive(Debug)]
pub struct AuthClient {
    http: reqwest::Client,
    config: FirebaseConfig,
    persistence: Persistence,
    identity_url: String,
    secure_token_url: String,
    current_user: Mutex<Option<User>>,
}

impl AuthClient {
    #[must_use]
    pub fn new(config: FirebaseConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            persistence: Persistence::default(),
            identity_url: IDENTITY_TOOLKIT_URL.into(),
            secure_token_url: SECURE_TOKEN_URL.into(),
            current_user: Mutex::new(None),
        }
    }

    /// Set how the client retains the signed-in user.
    ///
    /// Applies to subsequent sign-ins; a user already held by the client
    /// stays until [`sign_out`](Self::sign_out).
    pub fn set_persistence(&mut self, persistence: Persistence) {
        self.persistence = persistence;
    }

    /// Point the client at alternative identity-toolkit and secure-token
    /// endpoints, such as the local Auth emulator.
    ///
    /// Each URL replaces everything up to and including the version segment
    /// of the production endpoint (for example
    /// `http://localhost:9099/identitytoolkit.googleapis.com/v1`).
    pub fn set_endpoints(&mut self, identity_url: &str, secure_token_url: &str) {
        self.identity_url = identity_url.trim_end_matches('/').into();
        self.secure_token_url = secure_token_url.trim_end_matches('/').into();
    }

    /// Sign a user in with an email/password pair.
    ///
    /// On success the returned [`UserCredential`] carries the [`User`]
    /// handle, and the client stores the user as its current user when
    /// persistence is [`Persistence::InMemory`].
    ///
    /// ## Errors
    ///
    /// Returns an error if either credential is empty, if the server rejects
    /// the pair (see [`AuthError::InvalidCredentials`]), or if the request
    /// fails outright.
    pub async fn sign_in_with_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<UserCredential, AuthError> {
        if email.is_empty() {
            return Err(AuthError::InvalidArgument("email must not be empty".into()));
        }

        if password.is_empty() {
            return Err(AuthError::InvalidArgument(
                "password must not be empty".into(),
            ));
        }

        info!(email = email; "Signing in with email/password");

        let response = self
            .http
            .post(format!("{}/accounts:signInWithPassword", self.identity_url))
            .query(&[("key", self.config.api_key.as_str())])
            .json(&rest::SignInRequest {
                email,
                password,
                return_secure_token: true,
            })
            .send()
            .await?;

        let body: rest::SignInResponse = rest::decode(response).await?;
        let expires_in = rest::parse_expires_in(&body.expires_in)?;

        let user = User::new(
            self.http.clone(),
            self.config.api_key.clone(),
            self.secure_token_url.clone(),
            body,
            expires_in,
        );

        info!(uid = user.uid(); "Signed in");

        if self.persistence == Persistence::InMemory {
            *self.current_user.lock().expect("current user poisoned") = Some(user.clone());
        }

        Ok(UserCredential {
            user,
            provider_id: "password",
        })
    }

    /// The user currently held by the client, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.current_user
            .lock()
            .expect("current user poisoned")
            .clone()
    }

    /// Sign out, dropping the locally held session.
    ///
    /// The REST surface has no server-side sign-out; like the hosted SDK,
    /// this clears the client's persistence. Safe to call when nothing is
    /// signed in, so it can run unconditionally on cleanup paths.
    pub fn sign_out(&self) {
        if self
            .current_user
            .lock()
            .expect("current user poisoned")
            .take()
            .is_some()
        {
            info!("Signed out");
        }
    }

    /// The configuration record the client was constructed with.
    #[must_use]
    pub fn config(&self) -> &FirebaseConfig {
        &self.config
    }
}
