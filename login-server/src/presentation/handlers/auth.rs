use axum::{
    Json,
    body::Bytes,
    extract::State,
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::domain::http::{HttpRequest, HttpResponse, LoginBody};
use crate::presentation::AppState;

impl IntoResponse for HttpResponse {
    fn into_response(self) -> Response {
        (self.status_code, Json(self.body)).into_response()
    }
}

/// Empty or undecodable payloads become a request without a body.
fn decode_body(raw: &[u8]) -> Option<LoginBody> {
    if raw.iter().all(u8::is_ascii_whitespace) {
        return None;
    }
    serde_json::from_slice(raw)
        .map_err(|err| debug!(error = %err, "login body is not valid json"))
        .ok()
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginBody,
    responses(
        (status = 200, description = "Login successful", body = crate::domain::http::AccessTokenBody),
        (status = 400, description = "Missing email or password", body = crate::domain::error::ErrorBody),
        (status = 401, description = "Invalid credentials", body = crate::domain::error::ErrorBody),
        (status = 500, description = "Internal error", body = crate::domain::error::ErrorBody)
    )
)]
pub(crate) async fn login(State(state): State<AppState>, body: Bytes) -> HttpResponse {
    let request = HttpRequest {
        body: decode_body(&body),
    };
    state.login_router.route(Some(&request)).await
}
