use crate::domain::payment::{
    ErrorEnvelope, ErrorPayload, PaymentInitRequest, PaymentVerifyRequest, PaymentVerifyResponse,
};
use crate::error::PaymentError;
use crate::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

pub async fn create_order(
    State(state): State<AppState>,
    body: Result<Json<PaymentInitRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return rejection_response(rejection),
    };
    match state.payment_service.create_order(req).await {
        Ok(resp) => (StatusCode::OK, Json(resp)).into_response(),
        Err(e) => error_response(&e),
    }
}

pub async fn verify_payment(
    State(state): State<AppState>,
    body: Result<Json<PaymentVerifyRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return rejection_response(rejection),
    };
    match state.payment_service.verify_payment(&req) {
        Ok(true) => (StatusCode::OK, Json(PaymentVerifyResponse { verified: true })).into_response(),
        Ok(false) => (
            StatusCode::BAD_REQUEST,
            Json(err("SIGNATURE_MISMATCH", "payment signature could not be verified")),
        )
            .into_response(),
        Err(e) => error_response(&e),
    }
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

fn error_response(e: &PaymentError) -> Response {
    let status = match e {
        PaymentError::InvalidAmount(_) | PaymentError::Validation(_) => StatusCode::BAD_REQUEST,
        PaymentError::Gateway(g) if g.code == "TIMEOUT" => StatusCode::GATEWAY_TIMEOUT,
        PaymentError::Gateway(_) => StatusCode::BAD_GATEWAY,
        PaymentError::Verification(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let message = match e {
        PaymentError::Gateway(g) => g.message.clone(),
        other => other.to_string(),
    };
    (status, Json(err(e.code(), &message))).into_response()
}

fn rejection_response(rejection: JsonRejection) -> Response {
    error_response(&PaymentError::Validation(rejection.body_text()))
}

fn err(code: &str, message: &str) -> ErrorEnvelope {
    ErrorEnvelope {
        error: ErrorPayload {
            code: code.to_string(),
            message: message.to_string(),
            details: None,
        },
    }
}
