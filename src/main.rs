use payments_checkout::config::AppConfig;
use payments_checkout::gateways::razorpay::RazorpayGateway;
use payments_checkout::service::payment_service::PaymentService;
use payments_checkout::AppState;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env();
    if cfg.razorpay_key_id.is_empty() {
        tracing::warn!("RAZORPAY_KEY_ID is not set; checkout clients will receive an empty key id");
    }

    let razorpay = Arc::new(RazorpayGateway {
        base_url: cfg.razorpay_base_url.clone(),
        key_id: cfg.razorpay_key_id.clone(),
        key_secret: cfg.razorpay_key_secret.clone(),
        timeout_ms: cfg.gateway_timeout_ms,
        client: reqwest::Client::new(),
    });

    let payment_service =
        PaymentService::new(cfg.credentials(), razorpay).with_rounding(cfg.amount_rounding);

    let app = payments_checkout::router(AppState { payment_service });

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!(rounding = ?cfg.amount_rounding, "listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
