use anyhow::{Context, Result, anyhow};

#[derive(Debug, Clone)]
pub struct Settings {
    pub http_addr: String,
    pub auth_service_url: Option<String>,
    pub auth_service_timeout_secs: u64,
    pub cors_origins: Vec<String>,
    pub log_level: String,
    pub http_request_body_limit_bytes: usize,
    pub http_concurrency_limit: usize,
    pub http_request_timeout_secs: u64,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let http_addr = lookup("HTTP_ADDR").unwrap_or_else(|| "0.0.0.0:8080".to_string());
        let auth_service_url = lookup("AUTH_SERVICE_URL")
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());
        let auth_service_timeout_secs =
            parse_positive(&lookup, "AUTH_SERVICE_TIMEOUT_SECS", 5u64)?;
        let cors_origins = parse_cors_origins(
            lookup("CORS_ORIGINS")
                .unwrap_or_else(|| "http://localhost:8000,http://127.0.0.1:8000".to_string()),
        );
        let log_level = lookup("LOG_LEVEL")
            .or_else(|| lookup("RUST_LOG"))
            .unwrap_or_else(|| "info".to_string());
        let http_request_body_limit_bytes =
            parse_positive(&lookup, "HTTP_REQUEST_BODY_LIMIT_BYTES", 64 * 1024usize)?;
        let http_concurrency_limit = parse_positive(&lookup, "HTTP_CONCURRENCY_LIMIT", 256usize)?;
        let http_request_timeout_secs =
            parse_positive(&lookup, "HTTP_REQUEST_TIMEOUT_SECS", 10u64)?;

        Ok(Self {
            http_addr,
            auth_service_url,
            auth_service_timeout_secs,
            cors_origins,
            log_level,
            http_request_body_limit_bytes,
            http_concurrency_limit,
            http_request_timeout_secs,
        })
    }
}

fn parse_cors_origins(raw: String) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_positive<T>(lookup: impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr + PartialEq + Default + ToString,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value = lookup(key)
        .unwrap_or_else(|| default.to_string())
        .trim()
        .parse::<T>()
        .with_context(|| format!("Failed to parse {key}, expecting positive integer"))?;

    if value == T::default() {
        return Err(anyhow!("{key} must be > 0"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::{Settings, parse_cors_origins};

    fn settings_from(vars: &[(&str, &str)]) -> anyhow::Result<Settings> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_env_is_empty() {
        let settings = settings_from(&[]).expect("defaults must be valid");

        assert_eq!(settings.http_addr, "0.0.0.0:8080");
        assert!(settings.auth_service_url.is_none());
        assert_eq!(settings.auth_service_timeout_secs, 5);
        assert_eq!(settings.log_level, "info");
        assert_eq!(settings.http_request_body_limit_bytes, 64 * 1024);
        assert_eq!(settings.http_concurrency_limit, 256);
        assert_eq!(settings.http_request_timeout_secs, 10);
        assert_eq!(settings.cors_origins.len(), 2);
    }

    #[test]
    fn blank_auth_service_url_is_ignored() {
        let settings = settings_from(&[("AUTH_SERVICE_URL", "   ")]).expect("must be valid");
        assert!(settings.auth_service_url.is_none());

        let settings = settings_from(&[("AUTH_SERVICE_URL", " http://auth:9000/login ")])
            .expect("must be valid");
        assert_eq!(
            settings.auth_service_url.as_deref(),
            Some("http://auth:9000/login")
        );
    }

    #[test]
    fn log_level_falls_back_to_rust_log() {
        let settings = settings_from(&[("RUST_LOG", "debug")]).expect("must be valid");
        assert_eq!(settings.log_level, "debug");

        let settings =
            settings_from(&[("RUST_LOG", "debug"), ("LOG_LEVEL", "warn")]).expect("must be valid");
        assert_eq!(settings.log_level, "warn");
    }

    #[test]
    fn zero_and_garbage_limits_are_rejected() {
        assert!(settings_from(&[("HTTP_CONCURRENCY_LIMIT", "0")]).is_err());
        assert!(settings_from(&[("HTTP_REQUEST_TIMEOUT_SECS", "soon")]).is_err());
        assert!(settings_from(&[("AUTH_SERVICE_TIMEOUT_SECS", "-1")]).is_err());
    }

    #[test]
    fn cors_origins_are_trimmed() {
        let origins = parse_cors_origins(" http://a.test , ,http://b.test".to_string());
        assert_eq!(origins, vec!["http://a.test", "http://b.test"]);
    }
}
