use httpmock::MockServer;

use firebase_auth_rest::{AuthClient, FirebaseConfig};

pub const API_KEY: &str = "test-api-key";

pub const USER_EMAIL: &str = "foo@google.com";

pub const USER_PASSWORD: &str = "123456";

/// Build a client whose identity-toolkit and secure-token endpoints both
/// point at the mock server.
pub fn get_client(server: &MockServer) -> AuthClient {
    let mut client = AuthClient::new(FirebaseConfig {
        project_id: Some("test-project".into()),
        ..FirebaseConfig::new(API_KEY)
    });

    client.set_endpoints(&server.base_url(), &server.base_url());

    client
}

/// A canned `accounts:signInWithPassword` response body.
pub fn sign_in_response(id_token: &str, refresh_token: &str, expires_in: &str) -> String {
    format!(
        r#"{{
            "kind": "identitytoolkit#VerifyPasswordResponse",
            "localId": "abc123",
            "email": "{USER_EMAIL}",
            "displayName": "",
            "idToken": "{id_token}",
            "registered": true,
            "refreshToken": "{refresh_token}",
            "expiresIn": "{expires_in}"
        }}"#
    )
}

/// A canned secure-token exchange response body.
pub fn refresh_response(id_token: &str, refresh_token: &str, expires_in: &str) -> String {
    format!(
        r#"{{
            "access_token": "{id_token}",
            "expires_in": "{expires_in}",
            "token_type": "Bearer",
            "refresh_token": "{refresh_token}",
            "id_token": "{id_token}",
            "user_id": "abc123",
            "project_id": "559949546715"
        }}"#
    )
}

/// A canned error body in the shape both endpoints use for rejections.
pub fn error_response(code: u16, message: &str) -> String {
    format!(r#"{{"error":{{"code":{code},"message":"{message}","errors":[]}}}}"#)
}
