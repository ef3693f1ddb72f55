use crate::error::GatewayError;
use crate::gateways::{GatewayOrder, OrderGateway, OrderPayload};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

pub struct RazorpayGateway {
    pub base_url: String,
    pub key_id: String,
    pub key_secret: SecretString,
    pub timeout_ms: u64,
    pub client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    code: Option<String>,
    description: Option<String>,
}

#[async_trait::async_trait]
impl OrderGateway for RazorpayGateway {
    fn name(&self) -> &'static str {
        "razorpay"
    }

    async fn create_order(&self, payload: &OrderPayload) -> Result<GatewayOrder, GatewayError> {
        let order_url = format!("{}/v1/orders", self.base_url.trim_end_matches('/'));

        let resp = self
            .client
            .post(order_url)
            .basic_auth(&self.key_id, Some(self.key_secret.expose_secret()))
            .json(payload)
            .timeout(std::time::Duration::from_millis(self.timeout_ms))
            .send()
            .await;

        match resp {
            Ok(r) if r.status().is_success() => r.json::<GatewayOrder>().await.map_err(|e| {
                GatewayError::new("INVALID_RESPONSE", format!("undecodable order response: {}", e))
            }),
            Ok(r) => {
                let status = r.status();
                let body = r.text().await.unwrap_or_default();
                Err(error_from_body(status.as_u16(), &body))
            }
            Err(e) if e.is_timeout() => Err(GatewayError::new("TIMEOUT", "gateway timeout")),
            Err(e) => Err(GatewayError::new("NETWORK_ERROR", e.without_url().to_string())),
        }
    }
}

fn error_from_body(status: u16, body: &str) -> GatewayError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => GatewayError::new(
            parsed
                .error
                .code
                .unwrap_or_else(|| format!("HTTP_{}", status)),
            parsed.error.description.unwrap_or_default(),
        )
        .with_status(status),
        Err(_) => GatewayError::new(format!("HTTP_{}", status), body.chars().take(200).collect::<String>())
            .with_status(status),
    }
}
