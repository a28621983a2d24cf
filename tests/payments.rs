mod common;

use axum::http::{Method, StatusCode};
use base64::{Engine, engine::general_purpose::STANDARD};
use common::{TestApp, product};
use nursery_storefront_api::{config::LiqPayKeys, liqpay::LiqPayClient};
use serde_json::json;

fn signed_callback(payload: serde_json::Value) -> serde_json::Value {
    let data = STANDARD.encode(payload.to_string());
    let signature = LiqPayClient::new(&LiqPayKeys::default()).sign(&data);
    json!({ "data": data, "signature": signature })
}

async fn placed_order(app: &TestApp) -> String {
    let token = app.admin_token().await;
    let plant = app
        .create_product(&token, product("Magnolia", "MG-1", 2500.0, "Trees"))
        .await;
    let (_, order) = app
        .post(
            "/api/orders",
            json!({
                "items": [{
                    "productId": plant["id"],
                    "productName": "Magnolia",
                    "productImage": "",
                    "price": 2500.0,
                    "quantity": 1,
                }],
                "totalAmount": 2500.0,
                "customerName": "Oksana",
                "customerPhone": "+380931112233",
                "deliveryAddress": "Odesa",
                "deliveryMethod": "courier",
                "paymentMethod": "liqpay",
            }),
        )
        .await;
    order["data"]["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn checkout_returns_signed_form() {
    let app = TestApp::new().await;

    let (status, body) = app
        .request(
            Method::POST,
            "/api/liqpay/create-checkout?order_id=abc&amount=100",
            None,
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let data = body["data"]["data"].as_str().unwrap();
    let client = LiqPayClient::new(&LiqPayKeys::default());
    assert_eq!(body["data"]["signature"], client.sign(data));
    assert_eq!(
        body["data"]["checkout_url"],
        "https://www.liqpay.ua/api/3/checkout"
    );

    let (status, _) = app
        .request(
            Method::POST,
            "/api/liqpay/create-checkout?order_id=abc&amount=0",
            None,
            None,
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn forged_callback_is_rejected() {
    let app = TestApp::new().await;
    let order_id = placed_order(&app).await;

    let mut body = signed_callback(json!({ "order_id": order_id, "status": "success" }));
    body["signature"] = json!("forged");
    let (status, resp) = app.post("/api/liqpay/callback", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(resp["message"], "Invalid signature");

    let (_, status_body) = app.get(&format!("/api/liqpay/status/{order_id}")).await;
    assert_eq!(status_body["data"]["payment_status"], "pending");
}

#[tokio::test]
async fn paid_callback_marks_order_paid() {
    let app = TestApp::new().await;
    let order_id = placed_order(&app).await;

    let (status, resp) = app
        .post(
            "/api/liqpay/callback",
            signed_callback(json!({ "order_id": order_id, "status": "sandbox" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["data"]["status"], "ok");

    let (status, body) = app.get(&format!("/api/liqpay/status/{order_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["payment_status"], "paid");
    assert_eq!(body["data"]["liqpay_status"], "sandbox");
    assert!(body["data"]["paid_at"].is_string());
}

#[tokio::test]
async fn callback_for_unknown_order_is_acknowledged() {
    let app = TestApp::new().await;

    let (status, resp) = app
        .post(
            "/api/liqpay/callback",
            signed_callback(json!({ "order_id": "not-an-order", "status": "success" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["data"]["order_id"], "not-an-order");
}

#[tokio::test]
async fn status_of_unknown_order_is_404() {
    let app = TestApp::new().await;

    let (status, _) = app.get("/api/liqpay/status/not-a-uuid").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = app
        .get(&format!("/api/liqpay/status/{}", uuid::Uuid::new_v4()))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
