mod common;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

async fn mock_storage_upload(app: &common::TestApp, object_id: &str) {
    Mock::given(method("POST"))
        .and(path("/objects"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": object_id })))
        .mount(&app.storage_server)
        .await;
}

async fn upload_pdf(app: &common::TestApp, filename: &str, text: &str) -> reqwest::Response {
    let form = reqwest::multipart::Form::new().part(
        "pdf",
        reqwest::multipart::Part::bytes(common::sample_pdf(text))
            .file_name(filename.to_string())
            .mime_str("application/pdf")
            .unwrap(),
    );

    app.api_client
        .post(app.url("/api/pdfs/upload"))
        .multipart(form)
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn upload_extracts_text_and_counts() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    app.register_default().await;
    mock_storage_upload(&app, "object-1").await;

    let response = upload_pdf(&app, "notes.pdf", "Hello exam revision notes").await;
    assert_eq!(201, response.status().as_u16());

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["item"]["original_name"], "notes.pdf");
    assert_eq!(body["item"]["word_count"], 4);
    assert_eq!(body["item"]["page_count"], 1);
    // The extracted text stays server-side.
    assert!(body["item"].get("text_content").is_none());
}

#[tokio::test]
async fn uploaded_pdf_appears_in_listing() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    app.register_default().await;
    mock_storage_upload(&app, "object-1").await;

    upload_pdf(&app, "notes.pdf", "Hello exam revision notes").await;

    let response = app.api_client.get(app.url("/api/pdfs")).send().await.unwrap();
    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    let list = body["list"].as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["original_name"], "notes.pdf");
    assert!(list[0].get("text_content").is_none());
}

#[tokio::test]
async fn upload_without_file_is_rejected() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    app.register_default().await;

    let form = reqwest::multipart::Form::new().text("note", "not a file");
    let response = app
        .api_client
        .post(app.url("/api/pdfs/upload"))
        .multipart(form)
        .send()
        .await
        .unwrap();
    assert_eq!(400, response.status().as_u16());
}

#[tokio::test]
async fn malformed_pdf_is_rejected() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    app.register_default().await;

    let form = reqwest::multipart::Form::new().part(
        "pdf",
        reqwest::multipart::Part::bytes(b"definitely not a pdf".to_vec())
            .file_name("junk.pdf")
            .mime_str("application/pdf")
            .unwrap(),
    );
    let response = app
        .api_client
        .post(app.url("/api/pdfs/upload"))
        .multipart(form)
        .send()
        .await
        .unwrap();
    assert_eq!(400, response.status().as_u16());

    // Nothing was persisted.
    let response = app.api_client.get(app.url("/api/pdfs")).send().await.unwrap();
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["list"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn delete_removes_record_and_binary() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    app.register_default().await;
    mock_storage_upload(&app, "object-1").await;

    let response = upload_pdf(&app, "notes.pdf", "Hello exam revision notes").await;
    let body: serde_json::Value = response.json().await.unwrap();
    let pdf_id = body["item"]["id"].as_str().unwrap().to_string();

    Mock::given(method("DELETE"))
        .and(path("/objects/object-1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.storage_server)
        .await;

    let response = app
        .api_client
        .delete(app.url(&format!("/api/pdfs/{pdf_id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(200, response.status().as_u16());

    let response = app
        .api_client
        .get(app.url(&format!("/api/pdfs/{pdf_id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(404, response.status().as_u16());

    let response = app.api_client.get(app.url("/api/pdfs")).send().await.unwrap();
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["list"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn students_cannot_see_each_others_pdfs() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    app.register_default().await;
    mock_storage_upload(&app, "object-1").await;

    let response = upload_pdf(&app, "notes.pdf", "Hello exam revision notes").await;
    let body: serde_json::Value = response.json().await.unwrap();
    let pdf_id = body["item"]["id"].as_str().unwrap().to_string();

    let other = app.register_student("other@example.com").await;

    let response = other
        .get(app.url(&format!("/api/pdfs/{pdf_id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(404, response.status().as_u16());

    let response = other
        .delete(app.url(&format!("/api/pdfs/{pdf_id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(404, response.status().as_u16());

    let response = other.get(app.url("/api/pdfs")).send().await.unwrap();
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["list"].as_array().unwrap().len(), 0);
}
