mod common;

use axum::http::{Method, StatusCode};
use common::{TestApp, product};
use serde_json::{Value, json};

async fn place_order(app: &TestApp, plant: &Value, phone: &str, total: f64) -> String {
    let (status, body) = app
        .post(
            "/api/orders",
            json!({
                "items": [{
                    "productId": plant["id"],
                    "productName": plant["name"],
                    "productImage": plant["image"],
                    "price": plant["price"],
                    "quantity": 1,
                }],
                "totalAmount": total,
                "customerName": "Ivan",
                "customerPhone": phone,
                "deliveryAddress": "Lviv",
                "deliveryMethod": "pickup",
                "paymentMethod": "card",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    body["data"]["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn login_and_verify() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post(
            "/api/admin/login",
            json!({ "username": " admin ", "password": "admin123" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["token_type"], "bearer");
    assert_eq!(body["data"]["username"], "admin");
    let token = body["data"]["access_token"].as_str().unwrap();

    let (status, body) = app
        .request(Method::GET, "/api/admin/verify", None, Some(token))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["username"], "admin");
    assert_eq!(body["data"]["role"], "admin");
}

#[tokio::test]
async fn wrong_password_is_unauthorized() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post(
            "/api/admin/login",
            json!({ "username": "admin", "password": "nope" }),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid username or password");

    let (status, _) = app.get("/api/admin/verify").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let (status, _) = app.get("/api/admin/stats").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn dashboard_and_order_management() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let mut low = product("Yew", "Y-1", 500.0, "Conifers");
    low["stock"] = json!(2);
    let plant = app.create_product(&token, low).await;
    app.create_product(&token, product("Larch", "L-1", 300.0, "Conifers"))
        .await;

    let first = place_order(&app, &plant, "+380001", 500.0).await;
    place_order(&app, &plant, "+380001", 1000.0).await;
    place_order(&app, &plant, "+380002", 250.0).await;

    let uri = format!("/api/admin/orders/{first}/status");
    let (status, body) = app
        .request(
            Method::PUT,
            &uri,
            Some(json!({ "status": "cancelled" })),
            Some(&token),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "cancelled");

    let (status, _) = app
        .request(Method::PUT, &uri, Some(json!({ "status": "  " })), Some(&token))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, stats) = app
        .request(Method::GET, "/api/admin/stats", None, Some(&token))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["data"]["totalProducts"], 2);
    assert_eq!(stats["data"]["totalOrders"], 3);
    assert_eq!(stats["data"]["pendingOrders"], 2);
    assert_eq!(stats["data"]["totalRevenue"], 1250.0);
    assert_eq!(stats["data"]["lowStockProducts"], 1);
    assert_eq!(stats["data"]["recentOrders"].as_array().unwrap().len(), 3);

    let (_, order_stats) = app
        .request(Method::GET, "/api/admin/orders/stats", None, Some(&token))
        .await;
    assert_eq!(order_stats["data"]["pending"], 2);
    assert_eq!(order_stats["data"]["cancelled"], 1);

    let (_, customers) = app
        .request(Method::GET, "/api/admin/orders/top-customers", None, Some(&token))
        .await;
    let customers = customers["data"].as_array().unwrap();
    assert_eq!(customers[0]["phone"], "+380001");
    assert_eq!(customers[0]["totalOrders"], 2);
    assert_eq!(customers[0]["totalSpent"], 1000.0);

    let (_, chart) = app
        .request(
            Method::GET,
            "/api/admin/revenue-chart?days=3",
            None,
            Some(&token),
        )
        .await;
    let chart = chart["data"].as_array().unwrap();
    assert_eq!(chart.len(), 3);
    assert_eq!(chart[2]["revenue"], 1250.0);

    let (_, page) = app
        .request(
            Method::GET,
            "/api/admin/orders?page=1&per_page=2",
            None,
            Some(&token),
        )
        .await;
    assert_eq!(page["data"].as_array().unwrap().len(), 2);
    assert_eq!(page["meta"]["total"], 3);
}

#[tokio::test]
async fn site_settings_round_trip() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let (status, _) = app
        .request(
            Method::POST,
            "/api/admin/site-settings",
            Some(json!({ "settings_data": ["not", "an", "object"] })),
            Some(&token),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let settings = json!({ "phone": "+380636507449", "workHours": "9-18" });
    let (status, _) = app
        .request(
            Method::POST,
            "/api/admin/site-settings",
            Some(json!({ "settings_data": settings.clone() })),
            Some(&token),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, public) = app.get("/api/settings").await;
    assert_eq!(public["data"], settings);
}

#[tokio::test]
async fn huge_page_number_returns_empty_page() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let (status, body) = app
        .request(
            Method::GET,
            "/api/admin/orders?page=9223372036854775807&per_page=100",
            None,
            Some(&token),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"], json!([]));
    assert_eq!(body["meta"]["page"], i64::MAX);
    assert_eq!(body["meta"]["total"], 0);
}
