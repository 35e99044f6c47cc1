use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::application::authenticator::Authenticator;
use crate::domain::error::MissingParamError;
use crate::domain::http::{HttpRequest, HttpResponse};

/// Validates a login request, hands the credentials to the authenticator and
/// maps the outcome to a response. Never fails: every problem becomes a
/// response.
#[derive(Default)]
pub(crate) struct LoginRouter {
    authenticator: Option<Arc<dyn Authenticator>>,
}

impl LoginRouter {
    pub(crate) fn new(authenticator: Option<Arc<dyn Authenticator>>) -> Self {
        if authenticator.is_none() {
            warn!("login router has no authenticator, every login will fail with 500");
        }
        Self { authenticator }
    }

    pub(crate) async fn route(&self, request: Option<&HttpRequest>) -> HttpResponse {
        let Some(body) = request.and_then(|req| req.body.as_ref()) else {
            debug!("login request without body");
            return HttpResponse::server_error();
        };

        let Some(email) = non_empty(body.email.as_deref()) else {
            debug!("login request without email");
            return HttpResponse::bad_request(MissingParamError::new("email"));
        };
        let Some(password) = non_empty(body.password.as_deref()) else {
            debug!("login request without password");
            return HttpResponse::bad_request(MissingParamError::new("password"));
        };

        let Some(authenticator) = self.authenticator.as_ref() else {
            return HttpResponse::server_error();
        };

        match authenticator.auth(email, password).await {
            Ok(Some(access_token)) if !access_token.is_empty() => HttpResponse::ok(access_token),
            Ok(_) => {
                debug!("credentials rejected");
                HttpResponse::unauthorized()
            }
            Err(err) => {
                error!(error = %err, "authenticator failed");
                HttpResponse::server_error()
            }
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}
