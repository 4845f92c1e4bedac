#![crate_name = "firebase_auth_rest"]

//! # Firebase Auth REST
//!
//! A Rust client for the email/password flow of the
//! [Firebase Auth REST API](https://firebase.google.com/docs/reference/rest/auth).
//!
//! This covers the `accounts:signInWithPassword` sign-in call on the
//! identity-toolkit endpoint, and the refresh-token exchange on the
//! secure-token endpoint used to force-mint a fresh ID token. The crate also
//! ships a `get-id-token` binary which signs a test user in, prints a freshly
//! minted ID token, and signs out again. It is handy when another client
//! library under manual test needs a real token.
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! firebase-auth-rest = "0.1.0"
//! ```
//!
//! ### Signing in and minting a token
//!
//! ```no_run
//! use firebase_auth_rest::{AuthClient, AuthError, FirebaseConfig, Persistence};
//!
//! # async fn run() -> Result<(), AuthError> {
//! // The web-app configuration record for the Firebase project. Only the
//! // API key is required by the REST endpoints; the remaining fields mirror
//! // the hosted configuration object.
//! let config = FirebaseConfig {
//!     auth_domain: Some("my-project.firebaseapp.com".into()),
//!     project_id: Some("my-project".into()),
//!     ..FirebaseConfig::new("<web api key>")
//! };
//!
//! let mut client = AuthClient::new(config);
//!
//! // Do not retain the signed-in user beyond the calls below.
//! client.set_persistence(Persistence::None);
//!
//! let credential = client
//!     .sign_in_with_email_and_password("user@example.com", "password")
//!     .await?;
//!
//! // `true` forces a refresh-token exchange rather than returning the
//! // cached token from the sign-in response.
//! let token = credential.user.get_id_token(true).await?;
//! println!("{token}");
//!
//! client.sign_out();
//! # Ok(())
//! # }
//! ```
//!
//! ### Inspecting a token
//!
//! The payload of an ID token can be decoded **without verification** to read
//! its expiry or subject. This is for diagnostics only; verifying tokens is
//! the job of the backend that receives them.
//!
//! ```no_run
//! use firebase_auth_rest::IdTokenClaims;
//!
//! # fn inspect(token: &str) {
//! if let Ok(claims) = IdTokenClaims::decode_unverified(token) {
//!     println!("expires at {:?}", claims.expires_at());
//! }
//! # }
//! ```
//!
//! ## Testing
//!
//! The integration tests run against a local mock server and need no
//! credentials. A live round-trip against a real project is `#[ignore]`d by
//! default; to run it, copy `.env.example` to `.env`, fill in the project
//! configuration and test-user credentials, and run:
//!
//! ```sh
//! cargo test -- --ignored
//! ```

pub use crate::client::{AuthClient, IdTokenClaims, User, UserCredential};
pub use crate::config::{FirebaseConfig, Persistence};
pub use crate::error::AuthError;

mod client;
mod config;
mod constant;
mod error;
