use payments_checkout::config::GatewayCredentials;
use payments_checkout::gateways::mock::{MockBehavior, MockGateway};
use payments_checkout::service::payment_service::PaymentService;
use payments_checkout::service::signature::sign_payment;
use payments_checkout::{router, AppState};
use serde_json::{json, Value};
use std::sync::Arc;

async fn spawn_app(behavior: MockBehavior) -> String {
    let payment_service = PaymentService::new(
        GatewayCredentials::new("rzp_test_public", "api_secret"),
        Arc::new(MockGateway::new(behavior)),
    );
    let app = router(AppState { payment_service });
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn create_order_returns_checkout_fields() {
    let base = spawn_app(MockBehavior::AlwaysSuccess).await;
    let resp = reqwest::Client::new()
        .post(format!("{}/payment/create-order", base))
        .json(&json!({"amount": 100.00, "description": "Premium Subscription", "currency": "INR"}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["amount"], 10000);
    assert_eq!(body["currency"], "INR");
    assert_eq!(body["keyId"], "rzp_test_public");
    assert!(body["orderId"].as_str().unwrap().starts_with("order_"));
    assert!(body["receiptId"].as_str().unwrap().starts_with("txn_"));
}

#[tokio::test]
async fn zero_amount_is_bad_request() {
    let base = spawn_app(MockBehavior::AlwaysSuccess).await;
    let resp = reqwest::Client::new()
        .post(format!("{}/payment/create-order", base))
        .json(&json!({"amount": 0, "currency": "INR"}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "INVALID_AMOUNT");
}

#[tokio::test]
async fn gateway_failure_is_bad_gateway() {
    let base = spawn_app(MockBehavior::AlwaysFailure).await;
    let resp = reqwest::Client::new()
        .post(format!("{}/payment/create-order", base))
        .json(&json!({"amount": 10, "currency": "INR"}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 502);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "MOCK_DECLINED");
    assert_eq!(body["error"]["message"], "mock decline");
}

#[tokio::test]
async fn verify_accepts_checkout_callback_fields() {
    let base = spawn_app(MockBehavior::AlwaysSuccess).await;
    let client = reqwest::Client::new();
    let sig = sign_payment("order_1", "pay_1", b"api_secret").unwrap();

    let ok = client
        .post(format!("{}/payment/verify", base))
        .json(&json!({"razorpayOrderId": "order_1", "razorpayPaymentId": "pay_1", "razorpaySignature": sig}))
        .send()
        .await
        .unwrap();
    assert_eq!(ok.status().as_u16(), 200);
    let body: Value = ok.json().await.unwrap();
    assert_eq!(body["verified"], true);

    let forged = client
        .post(format!("{}/payment/verify", base))
        .json(&json!({"razorpayOrderId": "order_1", "razorpayPaymentId": "pay_2", "razorpaySignature": sig}))
        .send()
        .await
        .unwrap();
    assert_eq!(forged.status().as_u16(), 400);
    let body: Value = forged.json().await.unwrap();
    assert_eq!(body["error"]["code"], "SIGNATURE_MISMATCH");
}

#[tokio::test]
async fn liveness_reports_gateway() {
    let base = spawn_app(MockBehavior::AlwaysSuccess).await;
    let body: Value = reqwest::get(format!("{}/ops/liveness", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["alive"], true);
    assert_eq!(body["gateway"], "mock");
}

#[tokio::test]
async fn verify_with_missing_signature_is_validation_error() {
    let base = spawn_app(MockBehavior::AlwaysSuccess).await;
    let resp = reqwest::Client::new()
        .post(format!("{}/payment/verify", base))
        .json(&json!({"razorpayOrderId": "order_1", "razorpayPaymentId": "pay_1"}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn create_order_without_amount_is_validation_error() {
    let base = spawn_app(MockBehavior::AlwaysSuccess).await;
    let resp = reqwest::Client::new()
        .post(format!("{}/payment/create-order", base))
        .json(&json!({"currency": "INR"}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}
