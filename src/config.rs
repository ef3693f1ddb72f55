use crate::service::order_builder::MinorUnitRounding;
use secrecy::SecretString;

#[derive(Clone)]
pub struct GatewayCredentials {
    pub key_id: String,
    pub key_secret: SecretString,
}

impl GatewayCredentials {
    pub fn new(key_id: impl Into<String>, key_secret: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
            key_secret: SecretString::new(key_secret.into()),
        }
    }
}

impl std::fmt::Debug for GatewayCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayCredentials")
            .field("key_id", &self.key_id)
            .field("key_secret", &"[REDACTED]")
            .finish()
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: String,
    pub razorpay_base_url: String,
    pub razorpay_key_id: String,
    pub razorpay_key_secret: SecretString,
    pub gateway_timeout_ms: u64,
    pub amount_rounding: MinorUnitRounding,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            razorpay_base_url: std::env::var("RAZORPAY_BASE_URL")
                .unwrap_or_else(|_| "https://api.razorpay.com".to_string()),
            razorpay_key_id: std::env::var("RAZORPAY_KEY_ID").unwrap_or_default(),
            razorpay_key_secret: SecretString::new(
                std::env::var("RAZORPAY_KEY_SECRET").unwrap_or_default(),
            ),
            gateway_timeout_ms: std::env::var("GATEWAY_TIMEOUT_MS")
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(2500),
            amount_rounding: std::env::var("AMOUNT_ROUNDING")
                .ok()
                .and_then(|s| MinorUnitRounding::parse(&s))
                .unwrap_or_default(),
        }
    }

    pub fn credentials(&self) -> GatewayCredentials {
        GatewayCredentials {
            key_id: self.razorpay_key_id.clone(),
            key_secret: self.razorpay_key_secret.clone(),
        }
    }
}
