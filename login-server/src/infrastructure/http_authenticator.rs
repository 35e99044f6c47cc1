use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::authenticator::Authenticator;
use crate::domain::error::AuthError;

#[derive(Debug, Serialize)]
struct CredentialsPayload<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenPayload {
    #[serde(default)]
    access_token: Option<String>,
}

/// Forwards credentials to a remote auth service.
pub(crate) struct HttpAuthenticator {
    client: reqwest::Client,
    url: String,
}

impl HttpAuthenticator {
    pub(crate) fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, AuthError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl Authenticator for HttpAuthenticator {
    async fn auth(&self, email: &str, password: &str) -> Result<Option<String>, AuthError> {
        let response = self
            .client
            .post(&self.url)
            .json(&CredentialsPayload { email, password })
            .send()
            .await?;

        let status = response.status();
        debug!(%status, "auth service answered");

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Ok(None),
            status if status.is_success() => {
                let payload: TokenPayload = response.json().await?;
                Ok(payload.access_token)
            }
            status => Err(AuthError::UnexpectedStatus(status.as_u16())),
        }
    }
}
