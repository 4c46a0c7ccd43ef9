mod common;

use serde_json::json;

#[tokio::test]
async fn register_sets_session_cookie_and_returns_user() {
    let Some(app) = common::spawn_app().await else {
        return;
    };

    let response = app.register("amina@example.com", "Amina", "secret123").await;
    assert_eq!(201, response.status().as_u16());
    assert!(response.cookies().any(|cookie| cookie.name() == "token"));

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["item"]["email"], "amina@example.com");
    assert_eq!(body["item"]["name"], "Amina");
    assert_eq!(body["item"]["role"], "user");
    assert!(body["item"].get("password_hash").is_none());

    // The registering client now holds a working session.
    let response = app
        .api_client
        .get(app.url("/api/auth/me"))
        .send()
        .await
        .unwrap();
    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["item"]["email"], "amina@example.com");
}

#[tokio::test]
async fn register_rejects_short_passwords() {
    let Some(app) = common::spawn_app().await else {
        return;
    };

    let response = app.register("amina@example.com", "Amina", "12345").await;
    assert_eq!(400, response.status().as_u16());
}

#[tokio::test]
async fn register_rejects_duplicate_emails() {
    let Some(app) = common::spawn_app().await else {
        return;
    };

    let response = app.register("amina@example.com", "Amina", "secret123").await;
    assert_eq!(201, response.status().as_u16());

    let client = common::cookie_client();
    let response = client
        .post(app.url("/api/auth/register"))
        .json(&json!({
            "email": "amina@example.com",
            "name": "Impostor",
            "password": "secret456"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(400, response.status().as_u16());
}

#[tokio::test]
async fn login_rejects_bad_credentials() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    app.register_default().await;

    let client = common::cookie_client();
    let response = client
        .post(app.url("/api/auth/login"))
        .json(&json!({ "email": "student@example.com", "password": "wrong-password" }))
        .send()
        .await
        .unwrap();
    assert_eq!(400, response.status().as_u16());

    // An unknown account fails the same way.
    let response = client
        .post(app.url("/api/auth/login"))
        .json(&json!({ "email": "nobody@example.com", "password": "secret123" }))
        .send()
        .await
        .unwrap();
    assert_eq!(400, response.status().as_u16());
}

#[tokio::test]
async fn login_issues_a_working_session() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    app.register_default().await;

    let client = common::cookie_client();
    let response = client
        .post(app.url("/api/auth/login"))
        .json(&json!({ "email": "student@example.com", "password": "secret123" }))
        .send()
        .await
        .unwrap();
    assert_eq!(200, response.status().as_u16());
    assert!(response.cookies().any(|cookie| cookie.name() == "token"));

    let response = client.get(app.url("/api/auth/me")).send().await.unwrap();
    assert_eq!(200, response.status().as_u16());
}

#[tokio::test]
async fn protected_routes_require_a_session() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    let client = reqwest::Client::new();

    for path in ["/api/auth/me", "/api/chats", "/api/pdfs", "/api/exercises"] {
        let response = client.get(app.url(path)).send().await.unwrap();
        assert_eq!(401, response.status().as_u16(), "expected 401 for {path}");
    }
}

#[tokio::test]
async fn logout_clears_the_session() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    app.register_default().await;

    let response = app
        .api_client
        .post(app.url("/api/auth/logout"))
        .send()
        .await
        .unwrap();
    assert_eq!(200, response.status().as_u16());

    let response = app
        .api_client
        .get(app.url("/api/auth/me"))
        .send()
        .await
        .unwrap();
    assert_eq!(401, response.status().as_u16());
}
