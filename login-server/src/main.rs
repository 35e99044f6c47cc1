use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::info;

mod application;
mod domain;
mod infrastructure;
mod presentation;
mod server;

use application::authenticator::Authenticator;
use application::login_router::LoginRouter;
use infrastructure::http_authenticator::HttpAuthenticator;
use infrastructure::logging::init_logging;
use infrastructure::settings::Settings;
use presentation::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let settings = Settings::from_env()?;

    init_logging(&settings)?;

    let authenticator = match &settings.auth_service_url {
        Some(url) => {
            let timeout = Duration::from_secs(settings.auth_service_timeout_secs);
            let auth = HttpAuthenticator::new(url.as_str(), timeout)
                .context("failed to build auth service client")?;
            info!(auth_service_url = %url, "using remote auth service");
            Some(Arc::new(auth) as Arc<dyn Authenticator>)
        }
        None => None,
    };

    let state = AppState::new(Arc::new(LoginRouter::new(authenticator)));
    server::run_http(&settings, state).await
}
