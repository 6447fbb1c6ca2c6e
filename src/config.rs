use std::env;
use anyhow::{Context, Result};
use chrono::{TimeDelta, Utc};
use zeroize::Zeroizing;

/// Fallback Vortex API key used when `VORTEX_API_KEY` is not set.
pub const DEMO_API_KEY: &str = "demo-api-key";
/// Fallback signing secret for session tokens.
pub const DEMO_SESSION_SECRET: &str = "demo-secret-key";
/// The default Vortex API endpoint.
pub const DEFAULT_VORTEX_BASE_URL: &str = "https://api.vortexsoftware.com";

/// The application's configuration.
#[derive(Clone)]
pub struct Config {
    /// The API key handed to the Vortex client.
    pub vortex_api_key: Zeroizing<String>,
    /// The base URL of the Vortex API.
    pub vortex_base_url: String,
    /// The TCP port the server listens on.
    pub port: u16,
    /// The symmetric secret used to sign session tokens.
    pub session_secret: Zeroizing<String>,
    /// The lifetime of a session token (and its cookie) in hours.
    pub session_duration_hours: i64,
    /// Directory served as the static frontend.
    pub static_dir: String,
    /// Whether cookies should carry the `Secure` attribute.
    pub secure_cookies: bool,
}

impl Config {
    /// Creates a new `Config` from environment variables.
    ///
    /// Every variable has a demo-friendly default; only malformed values
    /// are rejected.
    pub fn from_env() -> Result<Self> {
        let port = parse_port(env::var("PORT").ok())?;
        let session_duration_hours =
            parse_session_hours(env::var("SESSION_DURATION_HOURS").ok())?;

        Ok(Self {
            vortex_api_key: Zeroizing::new(non_empty_var("VORTEX_API_KEY", DEMO_API_KEY)),
            vortex_base_url: non_empty_var("VORTEX_API_BASE_URL", DEFAULT_VORTEX_BASE_URL),
            port,
            session_secret: Zeroizing::new(non_empty_var("SESSION_SECRET", DEMO_SESSION_SECRET)),
            session_duration_hours,
            static_dir: non_empty_var("STATIC_DIR", "public"),
            secure_cookies: env::var("APP_ENV")
                .unwrap_or_else(|_| "development".to_string())
                == "production",
        })
    }

    /// A configuration with every default applied, independent of the
    /// process environment.
    pub fn demo() -> Self {
        Self {
            vortex_api_key: Zeroizing::new(DEMO_API_KEY.to_string()),
            vortex_base_url: DEFAULT_VORTEX_BASE_URL.to_string(),
            port: 3000,
            session_secret: Zeroizing::new(DEMO_SESSION_SECRET.to_string()),
            session_duration_hours: 24,
            static_dir: "public".to_string(),
            secure_cookies: false,
        }
    }

    /// Prefix of the API key that is safe to print in logs.
    pub fn api_key_preview(&self) -> &str {
        let key = self.vortex_api_key.as_str();
        let end = key
            .char_indices()
            .nth(10)
            .map(|(idx, _)| idx)
            .unwrap_or(key.len());
        &key[..end]
    }
}

/// Parses the listening port; unset or empty means 3000.
pub fn parse_port(raw: Option<String>) -> Result<u16> {
    match raw {
        Some(raw) if !raw.is_empty() => raw
            .parse::<u16>()
            .context("Invalid PORT environment variable"),
        _ => Ok(3000),
    }
}

/// Parses the session lifetime in hours; unset means 24.
///
/// The value must be positive and small enough that `now + hours` is a
/// representable timestamp.
pub fn parse_session_hours(raw: Option<String>) -> Result<i64> {
    let hours: i64 = raw
        .unwrap_or_else(|| "24".to_string())
        .parse()
        .context("Invalid SESSION_DURATION_HOURS")?;

    if hours <= 0 {
        anyhow::bail!("SESSION_DURATION_HOURS must be positive");
    }

    TimeDelta::try_hours(hours)
        .and_then(|ttl| Utc::now().checked_add_signed(ttl))
        .context("SESSION_DURATION_HOURS is too large")?;

    Ok(hours)
}

fn non_empty_var(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_config_uses_defaults() {
        let config = Config::demo();
        assert_eq!(config.port, 3000);
        assert_eq!(config.session_duration_hours, 24);
        assert_eq!(config.vortex_api_key.as_str(), DEMO_API_KEY);
        assert!(!config.secure_cookies);
    }

    #[test]
    fn port_defaults_to_3000() {
        assert_eq!(parse_port(None).unwrap(), 3000);
        assert_eq!(parse_port(Some(String::new())).unwrap(), 3000);
        assert_eq!(parse_port(Some("8080".to_string())).unwrap(), 8080);
    }

    #[test]
    fn non_numeric_port_is_fatal() {
        let err = parse_port(Some("abc".to_string())).unwrap_err();
        assert_eq!(err.to_string(), "Invalid PORT environment variable");

        assert!(parse_port(Some("70000".to_string())).is_err());
    }

    #[test]
    fn session_hours_are_bounded() {
        assert_eq!(parse_session_hours(None).unwrap(), 24);
        assert_eq!(parse_session_hours(Some("48".to_string())).unwrap(), 48);

        assert!(parse_session_hours(Some("0".to_string())).is_err());
        assert!(parse_session_hours(Some("-1".to_string())).is_err());
        assert!(parse_session_hours(Some("soon".to_string())).is_err());
        assert!(parse_session_hours(Some("3000000000".to_string())).is_err());
        assert!(parse_session_hours(Some(i64::MAX.to_string())).is_err());
    }

    #[test]
    fn api_key_preview_is_truncated() {
        let mut config = Config::demo();
        assert_eq!(config.api_key_preview(), "demo-api-k");

        config.vortex_api_key = Zeroizing::new("short".to_string());
        assert_eq!(config.api_key_preview(), "short");
    }
}
