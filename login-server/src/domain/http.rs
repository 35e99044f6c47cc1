//! In-memory request/response shapes the login router works with.
//!
//! Nothing here knows about axum; the presentation layer decodes into
//! [`HttpRequest`] and renders [`HttpResponse`].

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::error::{MissingParamError, ServerError, UnauthorizedError};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct HttpRequest {
    pub(crate) body: Option<LoginBody>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub(crate) struct LoginBody {
    #[serde(default)]
    pub(crate) email: Option<String>,
    #[serde(default)]
    pub(crate) password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AccessTokenBody {
    pub(crate) access_token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub(crate) enum ResponseBody {
    AccessToken(AccessTokenBody),
    MissingParam(MissingParamError),
    Unauthorized(UnauthorizedError),
    Server(ServerError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HttpResponse {
    pub(crate) status_code: StatusCode,
    pub(crate) body: ResponseBody,
}

impl HttpResponse {
    pub(crate) fn ok(access_token: String) -> Self {
        Self {
            status_code: StatusCode::OK,
            body: ResponseBody::AccessToken(AccessTokenBody { access_token }),
        }
    }

    pub(crate) fn bad_request(err: MissingParamError) -> Self {
        Self {
            status_code: StatusCode::BAD_REQUEST,
            body: ResponseBody::MissingParam(err),
        }
    }

    pub(crate) fn unauthorized() -> Self {
        Self {
            status_code: StatusCode::UNAUTHORIZED,
            body: ResponseBody::Unauthorized(UnauthorizedError),
        }
    }

    pub(crate) fn server_error() -> Self {
        Self {
            status_code: StatusCode::INTERNAL_SERVER_ERROR,
            body: ResponseBody::Server(ServerError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{HttpResponse, LoginBody};

    #[test]
    fn login_body_tolerates_missing_fields() {
        let body: LoginBody = serde_json::from_str(r#"{"email":"a@b.c"}"#).expect("must decode");
        assert_eq!(body.email.as_deref(), Some("a@b.c"));
        assert!(body.password.is_none());

        let body: LoginBody = serde_json::from_str("{}").expect("must decode");
        assert_eq!(body, LoginBody::default());
    }

    #[test]
    fn ok_body_uses_camel_case_token_field() {
        let response = HttpResponse::ok("token-1".to_string());
        let value = serde_json::to_value(&response.body).expect("serialize");
        assert_eq!(value, serde_json::json!({ "accessToken": "token-1" }));
    }
}
