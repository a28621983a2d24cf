mod common;

use axum::http::{Method, StatusCode};
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn pages_are_unique_by_key() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    let page = json!({
        "page_key": "delivery",
        "title": "Delivery",
        "content": "<p>Nova Poshta</p>",
    });

    let (status, _) = app
        .request(Method::POST, "/api/cms/pages", Some(page.clone()), Some(&token))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app
        .request(Method::POST, "/api/cms/pages", Some(page), Some(&token))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Page with key delivery already exists");

    let (status, _) = app
        .request(
            Method::PUT,
            "/api/cms/pages/delivery",
            Some(json!({ "title": "Delivery and payment" })),
            Some(&token),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app.get("/api/cms/pages/delivery").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["title"], "Delivery and payment");
    assert_eq!(body["data"]["content"], "<p>Nova Poshta</p>");

    let (status, _) = app
        .request(Method::DELETE, "/api/cms/pages/delivery", None, Some(&token))
        .await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = app.get("/api/cms/pages/delivery").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn hero_is_created_on_first_save() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let (status, body) = app.get("/api/cms/hero").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Hero section not found");

    for title in ["Spring sale", "Summer plants"] {
        let (status, _) = app
            .request(
                Method::PUT,
                "/api/cms/hero",
                Some(json!({ "title": title, "button_link": "/catalog" })),
                Some(&token),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = app.get("/api/cms/hero").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], "main");
    assert_eq!(body["data"]["title"], "Summer plants");
}

#[tokio::test]
async fn footer_links_are_grouped_and_ordered() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    for (section, title, order) in [("help", "Catalog", 2), ("company", "About", 1), ("help", "Delivery", 1)] {
        let (status, _) = app
            .request(
                Method::POST,
                "/api/cms/footer-links",
                Some(json!({ "section": section, "title": title, "url": "/x", "order": order })),
                Some(&token),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, body) = app.get("/api/cms/footer-links").await;
    let titles: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|link| link["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["About", "Delivery", "Catalog"]);
}

#[tokio::test]
async fn blog_slugs_stay_unique_and_views_count() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    let post = json!({ "title": "Як посадити тую", "content": "<p>...</p>" });

    let (status, first) = app
        .request(Method::POST, "/api/blog/posts", Some(post.clone()), Some(&token))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["data"]["slug"], "як-посадити-тую");

    let (_, second) = app
        .request(Method::POST, "/api/blog/posts", Some(post), Some(&token))
        .await;
    let second_slug = second["data"]["slug"].as_str().unwrap();
    assert_ne!(second_slug, "як-посадити-тую");
    assert!(second_slug.starts_with("як-посадити-тую-"));

    let uri = "/api/blog/posts/%D1%8F%D0%BA-%D0%BF%D0%BE%D1%81%D0%B0%D0%B4%D0%B8%D1%82%D0%B8-%D1%82%D1%83%D1%8E";
    let (status, body) = app.get(uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["views"], 1);
    let (_, body) = app.get(uri).await;
    assert_eq!(body["data"]["views"], 2);

    let (_, listed) = app.get("/api/blog/posts").await;
    assert_eq!(listed["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn unpublished_posts_are_hidden_by_default() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let (_, created) = app
        .request(
            Method::POST,
            "/api/blog/posts",
            Some(json!({ "title": "Draft", "content": "wip", "is_published": false })),
            Some(&token),
        )
        .await;

    let (_, listed) = app.get("/api/blog/posts").await;
    assert_eq!(listed["data"], json!([]));
    let (_, listed) = app.get("/api/blog/posts?published_only=false").await;
    assert_eq!(listed["data"].as_array().unwrap().len(), 1);

    let uri = format!("/api/blog/posts/{}", created["data"]["id"].as_str().unwrap());
    let (status, _) = app.request(Method::DELETE, &uri, None, Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = app.request(Method::DELETE, &uri, None, Some(&token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn menu_items_need_an_existing_parent() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let (status, _) = app
        .request(
            Method::POST,
            "/api/menu/items",
            Some(json!({ "title": "Sub", "url": "/sub", "parent_id": uuid::Uuid::new_v4() })),
            Some(&token),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, root) = app
        .request(
            Method::POST,
            "/api/menu/items",
            Some(json!({ "title": "Catalog", "url": "/catalog", "order": 2 })),
            Some(&token),
        )
        .await;
    let (status, _) = app
        .request(
            Method::POST,
            "/api/menu/items",
            Some(json!({ "title": "Home", "url": "/", "order": 1, "parent_id": root["data"]["id"] })),
            Some(&token),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    app.request(
        Method::POST,
        "/api/menu/items",
        Some(json!({ "title": "Hidden", "url": "/hidden", "is_active": false })),
        Some(&token),
    )
    .await;

    let (_, body) = app.get("/api/menu/items").await;
    let titles: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Home", "Catalog"]);
}

#[tokio::test]
async fn concurrent_reads_count_every_view() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    let (status, _) = app
        .request(
            Method::POST,
            "/api/blog/posts",
            Some(json!({ "title": "Pruning guide", "content": "<p>...</p>" })),
            Some(&token),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let uri = "/api/blog/posts/pruning-guide";
    let (a, b, c, d) = tokio::join!(app.get(uri), app.get(uri), app.get(uri), app.get(uri));
    for (status, _) in [&a, &b, &c, &d] {
        assert_eq!(*status, StatusCode::OK);
    }

    let (_, listed) = app.get("/api/blog/posts").await;
    assert_eq!(listed["data"][0]["views"], 4);
}

#[tokio::test]
async fn offset_beyond_i64_returns_empty_list() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    app.request(
        Method::POST,
        "/api/blog/posts",
        Some(json!({ "title": "Pruning guide", "content": "<p>...</p>" })),
        Some(&token),
    )
    .await;

    let (status, body) = app
        .get("/api/blog/posts?offset=18446744073709551615")
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn content_writes_require_admin_token() {
    let app = TestApp::new().await;
    let id = uuid::Uuid::new_v4();
    let page_uri = "/api/cms/pages/delivery".to_string();
    let link_uri = format!("/api/cms/footer-links/{id}");
    let post_uri = format!("/api/blog/posts/{id}");
    let menu_uri = format!("/api/menu/items/{id}");
    let page = json!({ "page_key": "delivery", "title": "Delivery", "content": "x" });
    let link = json!({ "section": "help", "title": "Catalog", "url": "/catalog" });
    let post = json!({ "title": "Draft", "content": "x" });
    let item = json!({ "title": "Catalog", "url": "/catalog" });

    let cases = [
        (Method::POST, "/api/cms/pages".to_string(), Some(page.clone())),
        (Method::PUT, page_uri.clone(), Some(page)),
        (Method::DELETE, page_uri, None),
        (Method::PUT, "/api/cms/hero".to_string(), Some(json!({ "title": "Sale" }))),
        (Method::POST, "/api/cms/footer-links".to_string(), Some(link.clone())),
        (Method::PUT, link_uri.clone(), Some(link)),
        (Method::DELETE, link_uri, None),
        (Method::POST, "/api/blog/posts".to_string(), Some(post.clone())),
        (Method::PUT, post_uri.clone(), Some(post)),
        (Method::DELETE, post_uri, None),
        (Method::POST, "/api/menu/items".to_string(), Some(item.clone())),
        (Method::PUT, menu_uri.clone(), Some(item)),
        (Method::DELETE, menu_uri, None),
    ];
    for (method, uri, body) in cases {
        let (status, _) = app.request(method.clone(), &uri, body, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{method} {uri}");
    }
}
