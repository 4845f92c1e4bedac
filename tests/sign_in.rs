use httpmock::prelude::*;

use firebase_auth_rest::{AuthError, Persistence};

mod common;

#[tokio::test]
async fn test_sign_in_returns_a_user_handle() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/accounts:signInWithPassword")
            .query_param("key", common::API_KEY)
            .body_includes(r#""returnSecureToken":true"#)
            .body_includes(common::USER_EMAIL);
        then.status(200)
            .header("content-type", "application/json")
            .body(common::sign_in_response("id-token", "refresh-token", "3600"));
    });

    let client = common::get_client(&server);

    let credential = client
        .sign_in_with_email_and_password(common::USER_EMAIL, common::USER_PASSWORD)
        .await
        .unwrap();

    assert_eq!(credential.provider_id, "password");
    assert_eq!(credential.user.uid(), "abc123");
    assert_eq!(credential.user.email(), Some(common::USER_EMAIL));

    // The token from the sign-in response is cached on the handle; no
    // refresh call is needed while it is fresh.
    assert_eq!(
        credential.user.get_id_token(false).await.unwrap(),
        "id-token"
    );

    mock.assert();
}

#[tokio::test]
async fn test_rejected_credentials_are_classified() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/accounts:signInWithPassword");
        then.status(400)
            .header("content-type", "application/json")
            .body(common::error_response(400, "INVALID_PASSWORD"));
    });

    let client = common::get_client(&server);

    let error = client
        .sign_in_with_email_and_password(common::USER_EMAIL, "wrong")
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        AuthError::InvalidCredentials(ref reason) if reason == "INVALID_PASSWORD"
    ));
}

#[tokio::test]
async fn test_lockout_message_with_explanation_suffix() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/accounts:signInWithPassword");
        then.status(400)
            .header("content-type", "application/json")
            .body(common::error_response(
                400,
                "TOO_MANY_ATTEMPTS_TRY_LATER : Access to this account has been temporarily disabled.",
            ));
    });

    let client = common::get_client(&server);

    let error = client
        .sign_in_with_email_and_password(common::USER_EMAIL, common::USER_PASSWORD)
        .await
        .unwrap_err();

    assert!(matches!(error, AuthError::TooManyAttempts));
}

#[tokio::test]
async fn test_unrecognised_rejections_fall_through() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/accounts:signInWithPassword");
        then.status(400)
            .header("content-type", "application/json")
            .body(common::error_response(400, "PASSWORD_LOGIN_DISABLED"));
    });

    let client = common::get_client(&server);

    let error = client
        .sign_in_with_email_and_password(common::USER_EMAIL, common::USER_PASSWORD)
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        AuthError::Api { code: 400, ref message } if message == "PASSWORD_LOGIN_DISABLED"
    ));
}

#[tokio::test]
async fn test_empty_credentials_are_rejected_client_side() {
    let server = MockServer::start();

    // No mocks registered: an empty credential must never reach the server.
    let client = common::get_client(&server);

    assert!(matches!(
        client
            .sign_in_with_email_and_password("", common::USER_PASSWORD)
            .await,
        Err(AuthError::InvalidArgument(_))
    ));
    assert!(matches!(
        client
            .sign_in_with_email_and_password(common::USER_EMAIL, "")
            .await,
        Err(AuthError::InvalidArgument(_))
    ));
}

#[tokio::test]
async fn test_current_user_is_held_and_cleared() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/accounts:signInWithPassword");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::sign_in_response("id-token", "refresh-token", "3600"));
    });

    let client = common::get_client(&server);

    assert!(client.current_user().is_none());

    client
        .sign_in_with_email_and_password(common::USER_EMAIL, common::USER_PASSWORD)
        .await
        .unwrap();

    assert_eq!(
        client.current_user().map(|user| user.uid().to_string()),
        Some("abc123".to_string())
    );

    client.sign_out();

    assert!(client.current_user().is_none());

    // Signing out twice is harmless.
    client.sign_out();
}

#[tokio::test]
async fn test_persistence_none_does_not_retain_the_user() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/accounts:signInWithPassword");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::sign_in_response("id-token", "refresh-token", "3600"));
    });

    let mut client = common::get_client(&server);
    client.set_persistence(Persistence::None);

    let credential = client
        .sign_in_with_email_and_password(common::USER_EMAIL, common::USER_PASSWORD)
        .await
        .unwrap();

    // The credential is the only handle to the session.
    assert_eq!(credential.user.uid(), "abc123");
    assert!(client.current_user().is_none());
}
