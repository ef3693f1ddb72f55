use crate::error::GatewayError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub mod mock;
pub mod razorpay;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderPayload {
    pub amount: i64,
    pub currency: String,
    pub receipt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<BTreeMap<String, String>>,
}

/// Order record as returned by the gateway. Never mutated here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GatewayOrder {
    pub id: String,
    pub currency: String,
    pub amount: i64,
    #[serde(default)]
    pub receipt: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[async_trait::async_trait]
pub trait OrderGateway: Send + Sync {
    fn name(&self) -> &'static str;

    async fn create_order(&self, payload: &OrderPayload) -> Result<GatewayOrder, GatewayError>;
}
