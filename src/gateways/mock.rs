use crate::error::GatewayError;
use crate::gateways::{GatewayOrder, OrderGateway, OrderPayload};
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockBehavior {
    AlwaysSuccess,
    AlwaysFailure,
    AlwaysTimeout,
}

/// In-memory gateway. Orders are keyed by receipt, so a repeated receipt
/// returns the order created the first time.
pub struct MockGateway {
    pub behavior: MockBehavior,
    orders: Mutex<HashMap<String, GatewayOrder>>,
    calls: Mutex<Vec<OrderPayload>>,
}

impl MockGateway {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            orders: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<OrderPayload> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn order_count(&self) -> usize {
        self.orders.lock().map(|o| o.len()).unwrap_or_default()
    }
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new(MockBehavior::AlwaysSuccess)
    }
}

#[async_trait::async_trait]
impl OrderGateway for MockGateway {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn create_order(&self, payload: &OrderPayload) -> Result<GatewayOrder, GatewayError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(payload.clone());
        }

        match self.behavior {
            MockBehavior::AlwaysFailure => {
                return Err(GatewayError::new("MOCK_DECLINED", "mock decline").with_status(400))
            }
            MockBehavior::AlwaysTimeout => return Err(GatewayError::new("TIMEOUT", "mock timeout")),
            MockBehavior::AlwaysSuccess => {}
        }

        let mut orders = self
            .orders
            .lock()
            .map_err(|_| GatewayError::new("MOCK_POISONED", "mock order store poisoned"))?;
        let order = orders
            .entry(payload.receipt.clone())
            .or_insert_with(|| GatewayOrder {
                id: format!("order_{}", uuid::Uuid::new_v4().simple()),
                currency: payload.currency.clone(),
                amount: payload.amount,
                receipt: Some(payload.receipt.clone()),
                status: Some("created".to_string()),
            });
        Ok(order.clone())
    }
}
