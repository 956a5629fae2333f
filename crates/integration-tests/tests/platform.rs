//! Health checks, security headers, static assets and login rate limiting.

use reqwest::StatusCode;

use blood_donation_integration_tests::{ADMIN_USERNAME, TestApp};
use blood_donation_server::messages;

#[tokio::test]
async fn test_health_endpoints() {
    let app = TestApp::spawn().await;

    let resp = app.get("/health").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "ok");

    let resp = app.get("/health/ready").await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_security_headers_present() {
    let app = TestApp::spawn().await;
    let resp = app.get("/").await;
    let headers = resp.headers();

    assert_eq!(headers["x-frame-options"], "DENY");
    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert!(headers.contains_key("content-security-policy"));
    assert!(headers.contains_key("referrer-policy"));
}

#[tokio::test]
async fn test_session_cookie_is_http_only() {
    let app = TestApp::spawn().await;

    // A successful donation stores a flash, which creates the session
    let resp = app
        .new_visitor()
        .post(app.url("/donate"))
        .form(&[("name", "Bob"), ("phone", "0101"), ("blood_type", "B+")])
        .send()
        .await
        .unwrap();
    let cookie = resp.headers()["set-cookie"].to_str().unwrap();
    assert!(cookie.starts_with("blood_session="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Strict"));
}

#[tokio::test]
async fn test_stylesheet_is_served() {
    let app = TestApp::spawn().await;
    let resp = app.get("/static/style.css").await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_sixth_rapid_login_attempt_is_rate_limited() {
    let app = TestApp::with_admin().await;

    for _ in 0..5 {
        let resp = app.login(ADMIN_USERNAME, "wrong-password").await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    }

    let resp = app.login(ADMIN_USERNAME, "wrong-password").await;
    assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
    assert!(resp.headers().contains_key("retry-after"));
    let body = resp.text().await.unwrap();
    assert_eq!(body, messages::TOO_MANY_ATTEMPTS);

    // Viewing the login page is not limited
    let resp = app.get("/admin/login").await;
    assert_eq!(resp.status(), StatusCode::OK);
}
