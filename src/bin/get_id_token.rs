//! Mint a real ID token for a test user and print it.
//!
//! Signs the configured user in with email/password, forces a token refresh,
//! prints the fresh ID token to stdout, and signs out again. The token is
//! the only line written to stdout, so the output can be captured directly:
//!
//! ```sh
//! TOKEN=$(cargo run --bin get-id-token)
//! ```
//!
//! Configuration and credentials are read from the environment (or a `.env`
//! file; see `.env.example`).

use anyhow::Context;

use firebase_auth_rest::{AuthClient, FirebaseConfig, IdTokenClaims, Persistence};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    dotenvy::dotenv().ok();

    let config = FirebaseConfig {
        api_key: require_env("FIREBASE_API_KEY")?,
        auth_domain: optional_env("FIREBASE_AUTH_DOMAIN"),
        database_url: optional_env("FIREBASE_DATABASE_URL"),
        project_id: optional_env("FIREBASE_PROJECT_ID"),
        storage_bucket: optional_env("FIREBASE_STORAGE_BUCKET"),
        messaging_sender_id: optional_env("FIREBASE_MESSAGING_SENDER_ID"),
        app_id: optional_env("FIREBASE_APP_ID"),
    };

    let email = require_env("USER_EMAIL")?;
    let password = require_env("USER_PASSWORD")?;

    let mut client = AuthClient::new(config);

    // A one-shot tool has no use for a retained session.
    client.set_persistence(Persistence::None);

    // Sign-out must run whether or not the sign-in and token steps succeed,
    // so their result is only inspected afterwards.
    let token = mint_token(&client, &email, &password).await;
    client.sign_out();
    let token = token?;

    if let Ok(claims) = IdTokenClaims::decode_unverified(&token) {
        if let Some(expires_at) = claims.expires_at() {
            log::debug!(expires_at = expires_at.to_rfc3339().as_str(); "Minted ID token");
        }
    }

    println!("{token}");

    Ok(())
}

async fn mint_token(client: &AuthClient, email: &str, password: &str) -> anyhow::Result<String> {
    let credential = client
        .sign_in_with_email_and_password(email, password)
        .await
        .context("Sign-in failed")?;

    // Force a refresh so the printed token is freshly minted rather than the
    // one issued at sign-in.
    let token = credential
        .user
        .get_id_token(true)
        .await
        .context("Token refresh failed")?;

    Ok(token)
}

fn require_env(name: &str) -> anyhow::Result<String> {
    std::env::var(name).with_context(|| format!("{name} must be set (see .env.example)"))
}

fn optional_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}
