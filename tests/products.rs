mod common;

use axum::http::{Method, StatusCode};
use common::{TestApp, product};
use serde_json::{Value, json};

fn names(body: &Value) -> Vec<String> {
    body["data"]
        .as_array()
        .expect("product array")
        .iter()
        .map(|p| p["name"].as_str().unwrap_or_default().to_string())
        .collect()
}

async fn seeded_catalog() -> (TestApp, String) {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    app.create_product(&token, product("Thuja Smaragd", "TS-100", 420.0, "Thuja"))
        .await;
    app.create_product(&token, product("Thuja Columna", "TC-200", 350.0, "Thuja"))
        .await;
    let mut boxwood = product("Boxwood Ball", "BX-300", 650.0, "Boxwood");
    boxwood["badges"] = json!(["sale", "hit"]);
    boxwood["oldPrice"] = json!(800.0);
    app.create_product(&token, boxwood).await;

    (app, token)
}

#[tokio::test]
async fn list_sorts_by_name_by_default() {
    let (app, _) = seeded_catalog().await;

    let (status, body) = app.get("/api/products").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        names(&body),
        vec!["Boxwood Ball", "Thuja Columna", "Thuja Smaragd"]
    );
    assert_eq!(body["meta"]["page"], 1);
    assert_eq!(body["meta"]["per_page"], 100);
}

#[tokio::test]
async fn list_filters_and_sorts() {
    let (app, _) = seeded_catalog().await;

    let (_, body) = app.get("/api/products?category=thuja&sortBy=-price").await;
    assert_eq!(names(&body), vec!["Thuja Smaragd", "Thuja Columna"]);

    let (_, body) = app.get("/api/products?minPrice=400&maxPrice=700&sortBy=price").await;
    assert_eq!(names(&body), vec!["Thuja Smaragd", "Boxwood Ball"]);

    let (_, body) = app.get("/api/products?search=tc-2").await;
    assert_eq!(names(&body), vec!["Thuja Columna"]);

    let (_, body) = app.get("/api/products?badge=sale").await;
    assert_eq!(names(&body), vec!["Boxwood Ball"]);
    assert_eq!(body["data"][0]["badges"], json!(["sale", "hit"]));

    let (_, body) = app.get("/api/products?skip=1&limit=1").await;
    assert_eq!(names(&body), vec!["Thuja Columna"]);
}

#[tokio::test]
async fn writes_require_admin_token() {
    let app = TestApp::new().await;

    let (status, _) = app
        .post("/api/products", product("Fern", "F-1", 100.0, "Indoor"))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app
        .request(
            Method::POST,
            "/api/products",
            Some(product("Fern", "F-1", 100.0, "Indoor")),
            Some("not-a-token"),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn duplicate_article_conflicts() {
    let (app, token) = seeded_catalog().await;

    let (status, body) = app
        .request(
            Method::POST,
            "/api/products",
            Some(product("Another Thuja", "TS-100", 10.0, "Thuja")),
            Some(&token),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Product with article TS-100 already exists");
}

#[tokio::test]
async fn update_then_delete_product() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    let created = app
        .create_product(&token, product("Monstera", "M-1", 900.0, "Indoor"))
        .await;
    let uri = format!("/api/products/{}", created["id"].as_str().unwrap());

    let (status, body) = app
        .request(
            Method::PUT,
            &uri,
            Some(json!({ "price": 950.0, "stock": 3 })),
            Some(&token),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["price"], 950.0);
    assert_eq!(body["data"]["stock"], 3);
    assert_eq!(body["data"]["name"], "Monstera");

    let (status, _) = app.request(Method::DELETE, &uri, None, Some(&token)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app.get(&uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Product not found");
}

#[tokio::test]
async fn negative_price_is_rejected() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let (status, _) = app
        .request(
            Method::POST,
            "/api/products",
            Some(product("Bad", "B-1", -5.0, "Indoor")),
            Some(&token),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn category_crud() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    let category = json!({ "name": "Thuja", "icon": "thuja.png", "count": 12 });

    let (status, created) = app
        .request(Method::POST, "/api/admin/categories", Some(category.clone()), Some(&token))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["data"]["count"], 12);

    let (status, _) = app
        .request(Method::POST, "/api/admin/categories", Some(category), Some(&token))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let uri = format!("/api/admin/categories/{}", created["data"]["id"].as_str().unwrap());
    let (status, updated) = app
        .request(Method::PUT, &uri, Some(json!({ "icon": "new.png" })), Some(&token))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["data"]["name"], "Thuja");
    assert_eq!(updated["data"]["icon"], "new.png");

    let (_, listed) = app.get("/api/categories").await;
    assert_eq!(listed["data"].as_array().unwrap().len(), 1);

    let (status, _) = app.request(Method::DELETE, &uri, None, Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    let public_uri = format!("/api/categories/{}", created["data"]["id"].as_str().unwrap());
    let (status, _) = app.get(&public_uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn skip_beyond_i64_returns_empty_list() {
    let (app, _) = seeded_catalog().await;

    let (status, body) = app.get("/api/products?skip=18446744073709551615").await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn search_treats_like_wildcards_literally() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    app.create_product(&token, product("Fern", "F-1", 100.0, "Indoor"))
        .await;
    app.create_product(&token, product("Rose", "R_1", 200.0, "Garden"))
        .await;

    let (status, body) = app.get("/api/products?search=%25").await;
    assert_eq!(status, StatusCode::OK);
    assert!(names(&body).is_empty());

    let (_, body) = app.get("/api/products?search=F_1").await;
    assert!(names(&body).is_empty());

    let (_, body) = app.get("/api/products?search=r_1").await;
    assert_eq!(names(&body), vec!["Rose"]);

    let (_, body) = app.get("/api/products?category=g%25").await;
    assert!(names(&body).is_empty());
}

#[tokio::test]
async fn repeated_badges_are_stored_once() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    let mut fern = product("Fern", "F-1", 100.0, "Indoor");
    fern["badges"] = json!(["hit", "sale", "hit", "sale"]);

    let created = app.create_product(&token, fern).await;
    assert_eq!(created["badges"], json!(["hit", "sale"]));
}

#[tokio::test]
async fn old_price_can_be_cleared() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    let mut fern = product("Fern", "F-1", 100.0, "Indoor");
    fern["oldPrice"] = json!(150.0);
    let created = app.create_product(&token, fern).await;
    let uri = format!("/api/products/{}", created["id"].as_str().unwrap());

    let (_, body) = app
        .request(Method::PUT, &uri, Some(json!({ "price": 90.0 })), Some(&token))
        .await;
    assert_eq!(body["data"]["oldPrice"], 150.0);

    let (status, body) = app
        .request(Method::PUT, &uri, Some(json!({ "oldPrice": null })), Some(&token))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["oldPrice"], Value::Null);
    assert_eq!(body["data"]["price"], 90.0);
}

#[tokio::test]
async fn category_writes_require_admin_token() {
    let app = TestApp::new().await;
    let uri = format!("/api/admin/categories/{}", uuid::Uuid::new_v4());
    let category = json!({ "name": "Thuja", "icon": "thuja.png" });

    for (method, uri, body) in [
        (Method::POST, "/api/admin/categories", Some(category.clone())),
        (Method::PUT, uri.as_str(), Some(category)),
        (Method::DELETE, uri.as_str(), None),
    ] {
        let (status, _) = app.request(method.clone(), uri, body, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{method} {uri}");
    }
}
