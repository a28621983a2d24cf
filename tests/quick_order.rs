mod common;

use axum::http::StatusCode;
use common::{TestApp, product};
use serde_json::{Value, json};

async fn app_with_plant(stock: i64) -> (TestApp, Value) {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    let mut body = product("Spruce Glauca", "SG-1", 1800.0, "Conifers");
    body["stock"] = json!(stock);
    let plant = app.create_product(&token, body).await;
    (app, plant)
}

#[tokio::test]
async fn quick_order_snapshots_product() {
    let (app, plant) = app_with_plant(5).await;

    let (status, body) = app
        .post(
            "/api/quick-order",
            json!({
                "productId": plant["id"],
                "quantity": 2,
                "customerName": " Taras ",
                "customerPhone": "+380671234567",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"]["productName"], "Spruce Glauca");
    assert_eq!(body["data"]["price"], 1800.0);
    assert_eq!(body["data"]["customerName"], "Taras");
    assert_eq!(body["data"]["status"], "pending");

    // Stock is checked, not reserved.
    let uri = format!("/api/products/{}", plant["id"].as_str().unwrap());
    let (_, fetched) = app.get(&uri).await;
    assert_eq!(fetched["data"]["stock"], 5);

    let (_, listed) = app.get("/api/quick-orders?phone=%2B380671234567").await;
    assert_eq!(listed["data"].as_array().unwrap().len(), 1);
    let (_, listed) = app.get("/api/quick-orders?phone=000").await;
    assert_eq!(listed["data"], json!([]));

    let uri = format!("/api/quick-orders/{}", body["data"]["id"].as_str().unwrap());
    let (status, _) = app.get(&uri).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn quick_order_over_stock_is_rejected() {
    let (app, plant) = app_with_plant(5).await;

    let (status, body) = app
        .post(
            "/api/quick-order",
            json!({
                "productId": plant["id"],
                "quantity": 10,
                "customerName": "Taras",
                "customerPhone": "+380671234567",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Insufficient stock");
}

#[tokio::test]
async fn quick_order_for_unknown_product_is_404() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post(
            "/api/quick-order",
            json!({
                "productId": uuid::Uuid::new_v4(),
                "customerName": "Taras",
                "customerPhone": "+380671234567",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Product not found");
}

#[tokio::test]
async fn quick_order_requires_contact_details() {
    let (app, plant) = app_with_plant(5).await;

    let (status, _) = app
        .post(
            "/api/quick-order",
            json!({
                "productId": plant["id"],
                "customerName": "  ",
                "customerPhone": "+380671234567",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
