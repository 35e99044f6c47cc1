use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Wire shape shared by every error payload.
#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct ErrorBody {
    pub(crate) error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(into = "ErrorBody")]
#[error("Missing param: {param_name}")]
pub(crate) struct MissingParamError {
    pub(crate) param_name: String,
}

impl MissingParamError {
    pub(crate) fn new(param_name: impl Into<String>) -> Self {
        Self {
            param_name: param_name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(into = "ErrorBody")]
#[error("Unauthorized")]
pub(crate) struct UnauthorizedError;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(into = "ErrorBody")]
#[error("Internal error")]
pub(crate) struct ServerError;

impl From<MissingParamError> for ErrorBody {
    fn from(err: MissingParamError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

impl From<UnauthorizedError> for ErrorBody {
    fn from(err: UnauthorizedError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

impl From<ServerError> for ErrorBody {
    fn from(err: ServerError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

/// Failure reported by an authentication collaborator.
#[derive(Debug, Error)]
pub(crate) enum AuthError {
    #[error("auth service transport failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("auth service answered with unexpected status {0}")]
    UnexpectedStatus(u16),
}
