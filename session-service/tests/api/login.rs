use serde_json::{json, Value};

use session_service::domain::LoginResponse;
use session_service::services::HashmapUpstreamAuth;

use crate::helpers::{set_cookie_headers, TestApp, PASSWORD, SESSION_TTL_SECONDS};

#[tokio::test]
async fn should_return_200_and_set_session_cookie_for_valid_credentials() {
    let app = TestApp::new().await;

    let response = app.login("alice", PASSWORD).await;
    assert_eq!(response.status().as_u16(), 200);

    let cookies = set_cookie_headers(&response);
    let session = cookies
        .iter()
        .find(|c| c.starts_with("session="))
        .expect("session cookie should be set");
    assert!(session.contains("HttpOnly"));
    assert!(session.contains("SameSite=Lax"));
    assert!(session.contains("Path=/"));
    assert!(session.contains(&format!("Max-Age={}", SESSION_TTL_SECONDS)));

    let body = response
        .json::<LoginResponse>()
        .await
        .expect("Could not deserialize response body to LoginResponse");
    assert_eq!(body.redirect, "/dashboard/director");
    assert_eq!(body.user.subject, "42");
    assert_eq!(body.user.username, "alice");
    assert_eq!(body.user.role.as_deref(), Some("director"));
    assert_eq!(body.user.role_id, Some(4));
    assert_eq!(body.user.organization_id.as_deref(), Some("org-1"));
    assert_eq!(body.user.department_id.as_deref(), Some("12"));
    assert_eq!(body.user.approval_level, 2);
}

#[tokio::test]
async fn issued_cookie_holds_a_verifiable_session_token() {
    let app = TestApp::new().await;

    let response = app.login("alice", PASSWORD).await;
    let cookies = set_cookie_headers(&response);
    let token = cookies
        .iter()
        .find_map(|c| c.strip_prefix("session="))
        .and_then(|rest| rest.split(';').next())
        .expect("session cookie should be set");

    let claims = app
        .token_service
        .verify(token)
        .await
        .expect("cookie should carry a valid session token");
    assert_eq!(claims.user.username, "alice");
    assert_eq!(claims.exp - claims.iat, SESSION_TTL_SECONDS);
}

#[tokio::test]
async fn should_derive_role_from_role_id_when_upstream_token_has_none() {
    let app = TestApp::new().await;

    let response = app.login("bob", PASSWORD).await;
    assert_eq!(response.status().as_u16(), 200);

    let body = response.json::<LoginResponse>().await.unwrap();
    assert_eq!(body.user.subject, "u-7");
    assert_eq!(body.user.role.as_deref(), Some("hr"));
    assert_eq!(body.user.role_id, Some(6));
    assert_eq!(body.redirect, "/dashboard/hr");
}

#[tokio::test]
async fn issuer_role_wins_when_upstream_subject_is_numeric() {
    let app = TestApp::new().await;

    let response = app.login("frank", PASSWORD).await;
    assert_eq!(response.status().as_u16(), 200);

    let body = response.json::<LoginResponse>().await.unwrap();
    assert_eq!(body.user.subject, "51");
    assert_eq!(body.user.role.as_deref(), Some("planning"));
    assert_eq!(body.user.role_id, Some(4));
    assert_eq!(body.redirect, "/dashboard/planning");
}

#[tokio::test]
async fn should_redirect_to_login_for_unknown_role() {
    let app = TestApp::new().await;

    let response = app.login("carol", PASSWORD).await;
    assert_eq!(response.status().as_u16(), 200);

    let body = response.json::<LoginResponse>().await.unwrap();
    assert_eq!(body.user.role, None);
    assert_eq!(body.user.role_id, Some(99));
    assert_eq!(body.redirect, "/login");
}

#[tokio::test]
async fn should_return_401_for_invalid_credentials() {
    let app = TestApp::new().await;

    let cases = [("alice", "wrong-password"), ("mallory", PASSWORD)];
    for (username, password) in cases {
        let response = app.login(username, password).await;
        assert_eq!(response.status().as_u16(), 401, "for {username}");
        assert!(set_cookie_headers(&response).is_empty());
    }
}

#[tokio::test]
async fn should_return_400_for_empty_credentials() {
    let app = TestApp::new().await;

    let cases = [("", PASSWORD), ("   ", PASSWORD), ("alice", "")];
    for (username, password) in cases {
        let response = app.login(username, password).await;
        assert_eq!(response.status().as_u16(), 400);
    }
}

#[tokio::test]
async fn should_return_422_for_malformed_input() {
    let app = TestApp::new().await;

    let test_cases: [Value; 3] = [
        json!({"username": "alice"}),
        json!({"password": PASSWORD}),
        json!({"username": 5, "password": true}),
    ];
    for test_case in test_cases.iter() {
        let response = app.post_login(test_case).await;
        assert_eq!(
            response.status().as_u16(),
            422,
            "Failed for input: {:?}",
            test_case
        );
    }
}

#[tokio::test]
async fn should_return_502_when_upstream_is_unavailable() {
    let app = TestApp::with_upstream(HashmapUpstreamAuth::new().unavailable()).await;

    let response = app.login("alice", PASSWORD).await;
    assert_eq!(response.status().as_u16(), 502);
    assert!(set_cookie_headers(&response).is_empty());
}
