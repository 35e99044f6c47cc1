use anyhow::{Result, anyhow};
use axum::Router;
use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::infrastructure::settings::Settings;

fn allowed_origins(settings: &Settings) -> Result<AllowOrigin> {
    if settings.cors_origins.iter().any(|origin| origin == "*") {
        return Ok(AllowOrigin::any());
    }

    let origins = settings
        .cors_origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| anyhow!("invalid CORS origin: {err}"))?;
    Ok(AllowOrigin::list(origins))
}

/// Login is the only cross-origin call the service expects.
pub(crate) fn apply_cors(router: Router, settings: &Settings) -> Result<Router> {
    let cors = CorsLayer::new()
        .allow_origin(allowed_origins(settings)?)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);
    Ok(router.layer(cors))
}
