use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInitRequest {
    pub amount: Decimal,
    pub currency: String,
    #[serde(default)]
    pub receipt_id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInitResponse {
    pub order_id: String,
    pub currency: String,
    pub amount: i64,
    pub key_id: String,
    pub receipt_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentVerifyRequest {
    // Missing fields arrive empty and are rejected by `verify_payment`.
    #[serde(default, alias = "razorpayOrderId", alias = "razorpay_order_id")]
    pub order_id: String,
    #[serde(default, alias = "razorpayPaymentId", alias = "razorpay_payment_id")]
    pub payment_id: String,
    #[serde(default, alias = "razorpaySignature", alias = "razorpay_signature")]
    pub signature: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PaymentVerifyResponse {
    pub verified: bool,
}

#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub error: ErrorPayload,
}

#[derive(Debug, Serialize)]
pub struct ErrorPayload {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
}
