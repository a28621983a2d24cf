mod common;

use axum::http::{Method, StatusCode};
use common::TestApp;
use serde_json::json;

const PNG: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 0, 0, 0, 0];

#[tokio::test]
async fn upload_list_and_delete_file() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let (status, body) = app
        .upload(
            "/api/media/upload",
            &token,
            "thuja.png",
            "image/png",
            PNG,
            &[("folder", "catalog"), ("alt_text", "Thuja")],
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    let file = &body["data"];
    assert_eq!(file["original_name"], "thuja.png");
    assert_eq!(file["title"], "thuja.png");
    assert_eq!(file["file_type"], "image");
    assert_eq!(file["folder"], "catalog");
    assert_eq!(file["file_size"], PNG.len());
    let filename = file["filename"].as_str().unwrap();
    assert!(filename.ends_with(".png"));
    assert_eq!(file["url"], format!("/uploads/{filename}"));
    assert!(app.uploads.path().join(filename).exists());

    let (_, listed) = app.get("/api/media/files?folder=catalog").await;
    assert_eq!(listed["data"].as_array().unwrap().len(), 1);
    let (_, listed) = app.get("/api/media/files?file_type=video").await;
    assert_eq!(listed["data"], serde_json::json!([]));

    let (status, stats) = app
        .request(Method::GET, "/api/media/stats", None, Some(&token))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["data"]["total_files"], 1);
    assert_eq!(stats["data"]["by_type"]["images"], 1);

    // A file already gone from disk does not block removing the record.
    std::fs::remove_file(app.uploads.path().join(filename)).unwrap();
    let uri = format!("/api/media/files/{}", file["id"].as_str().unwrap());
    let (status, _) = app.request(Method::DELETE, &uri, None, Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = app.get(&uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn disallowed_type_is_rejected() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let (status, body) = app
        .upload(
            "/api/media/upload",
            &token,
            "tool.exe",
            "application/x-msdownload",
            b"MZ",
            &[],
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "File type not allowed. Allowed: images, videos, PDFs"
    );
}

#[tokio::test]
async fn admin_image_upload_accepts_images_only() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let (status, body) = app
        .upload(
            "/api/admin/upload-image",
            &token,
            "care.pdf",
            "application/pdf",
            b"%PDF-1.4",
            &[],
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Only image files are allowed");

    let (status, body) = app
        .upload("/api/admin/upload-image", &token, "a.png", "image/png", PNG, &[])
        .await;
    assert_eq!(status, StatusCode::OK);
    let url = body["data"]["url"].as_str().unwrap();
    assert!(url.starts_with("/uploads/"));

    // Uploaded files are served back under the public prefix.
    let (status, _) = app.get(url).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn upload_requires_admin() {
    let app = TestApp::new().await;

    let (status, _) = app
        .upload("/api/media/upload", "bogus", "a.png", "image/png", PNG, &[])
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn media_writes_and_stats_require_admin() {
    let app = TestApp::new().await;
    let uri = format!("/api/media/files/{}", uuid::Uuid::new_v4());

    for (method, uri, body) in [
        (Method::PUT, uri.as_str(), Some(json!({ "title": "Renamed" }))),
        (Method::DELETE, uri.as_str(), None),
        (Method::GET, "/api/media/stats", None),
    ] {
        let (status, _) = app.request(method.clone(), uri, body, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{method} {uri}");
    }
}

#[tokio::test]
async fn offset_beyond_i64_returns_empty_list() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    let (status, _) = app
        .upload("/api/media/upload", &token, "a.png", "image/png", PNG, &[])
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app
        .get("/api/media/files?offset=18446744073709551615")
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"], json!([]));
}
