use crate::AppState;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

pub async fn liveness(State(state): State<AppState>) -> impl IntoResponse {
    (
        axum::http::StatusCode::OK,
        Json(serde_json::json!({
            "alive": true,
            "gateway": state.payment_service.gateway.name(),
            "key_configured": !state.payment_service.credentials.key_id.is_empty(),
        })),
    )
        .into_response()
}
