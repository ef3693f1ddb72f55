use axum::routing::{get, post};
use axum::Router;

pub mod config;
pub mod domain {
    pub mod payment;
}
pub mod error;
pub mod gateways;
pub mod http {
    pub mod handlers {
        pub mod ops;
        pub mod payments;
    }
}
pub mod service {
    pub mod order_builder;
    pub mod payment_service;
    pub mod signature;
}

#[derive(Clone)]
pub struct AppState {
    pub payment_service: service::payment_service::PaymentService,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(http::handlers::payments::health))
        .route("/ops/liveness", get(http::handlers::ops::liveness))
        .route("/payment/create-order", post(http::handlers::payments::create_order))
        .route("/payment/verify", post(http::handlers::payments::verify_payment))
        .with_state(state)
}
