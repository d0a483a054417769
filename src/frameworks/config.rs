// Process configuration: BaaS settings and the memoized clients built from
// them, plus the server knobs.

use crate::interface_adapters::clients::SupabaseClient;
use once_cell::sync::OnceCell;
use std::{env, net::IpAddr, path::PathBuf, sync::Arc, time::Duration};
use thiserror::Error;
use url::Url;

const DEFAULT_CORS_ORIGINS: [&str; 4] = [
    "http://localhost",
    "http://127.0.0.1",
    "http://localhost:5500",
    "http://127.0.0.1:5500",
];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("SUPABASE_URL is not a valid http(s) URL: {0}")]
    InvalidUrl(String),
    #[error("failed to build supabase client: {0}")]
    Client(String),
}

// BaaS connection settings.
#[derive(Clone, Debug)]
pub struct Settings {
    pub supabase_url: Url,
    // Public key for restricted clients; None when unset or empty.
    pub supabase_anon_key: Option<String>,
    pub supabase_service_role_key: String,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Names are matched case-insensitively so lower-case .env files work too.
        Self::from_lookup(|key| {
            env::var(key)
                .or_else(|_| env::var(key.to_ascii_lowercase()))
                .ok()
        })
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let raw_url = non_empty("SUPABASE_URL").ok_or(ConfigError::Missing("SUPABASE_URL"))?;
        let supabase_url = parse_http_url(raw_url.trim())?;

        let supabase_service_role_key = non_empty("SUPABASE_SERVICE_ROLE_KEY")
            .ok_or(ConfigError::Missing("SUPABASE_SERVICE_ROLE_KEY"))?;

        Ok(Self {
            supabase_url,
            supabase_anon_key: non_empty("SUPABASE_ANON_KEY"),
            supabase_service_role_key,
        })
    }
}

fn parse_http_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|err| ConfigError::InvalidUrl(format!("{raw}: {err}")))?;
    if !matches!(url.scheme(), "http" | "https") || !url.has_host() {
        return Err(ConfigError::InvalidUrl(raw.to_string()));
    }
    Ok(url)
}

static SETTINGS: OnceCell<Settings> = OnceCell::new();
static SERVICE_CLIENT: OnceCell<Arc<SupabaseClient>> = OnceCell::new();
static ANON_CLIENT: OnceCell<Option<Arc<SupabaseClient>>> = OnceCell::new();

// Loaded once per process; later calls return the same instance.
pub fn settings() -> Result<&'static Settings, ConfigError> {
    SETTINGS.get_or_try_init(Settings::from_env)
}

// Client bound to the service-role key (full privileges).
pub fn service_client() -> Result<Arc<SupabaseClient>, ConfigError> {
    SERVICE_CLIENT
        .get_or_try_init(|| build_service_client(settings()?))
        .cloned()
}

// Client bound to the public key, or None when no public key is configured.
pub fn anon_client() -> Result<Option<Arc<SupabaseClient>>, ConfigError> {
    ANON_CLIENT
        .get_or_try_init(|| build_anon_client(settings()?))
        .cloned()
}

pub fn build_service_client(settings: &Settings) -> Result<Arc<SupabaseClient>, ConfigError> {
    build_client(settings, &settings.supabase_service_role_key)
}

pub fn build_anon_client(settings: &Settings) -> Result<Option<Arc<SupabaseClient>>, ConfigError> {
    settings
        .supabase_anon_key
        .as_deref()
        .map(|key| build_client(settings, key))
        .transpose()
}

fn build_client(settings: &Settings, key: &str) -> Result<Arc<SupabaseClient>, ConfigError> {
    SupabaseClient::new(settings.supabase_url.clone(), key, supabase_timeout())
        .map(Arc::new)
        .map_err(|err| ConfigError::Client(err.to_string()))
}

// Runtime/server knobs.

pub fn http_host() -> IpAddr {
    env::var("HOST")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(IpAddr::from([0, 0, 0, 0]))
}

pub fn http_port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(8000)
}

pub fn frontend_dir() -> PathBuf {
    env::var("FRONTEND_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("frontend"))
}

pub fn cors_allowed_origins() -> Vec<String> {
    match env::var("CORS_ALLOWED_ORIGINS") {
        Ok(value) => parse_origins(&value),
        Err(_) => DEFAULT_CORS_ORIGINS.iter().map(|o| o.to_string()).collect(),
    }
}

fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

// Unset means no client-side timeout; latency is left to the provider.
pub fn supabase_timeout() -> Option<Duration> {
    env::var("SUPABASE_TIMEOUT_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .map(Duration::from_millis)
}
