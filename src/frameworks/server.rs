// Framework bootstrap for the API server runtime.

use crate::frameworks::config;
use crate::interface_adapters::routes;
use crate::interface_adapters::state::AppState;
use axum::http::HeaderValue;
use std::{io::Result, net::SocketAddr, sync::Arc};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

// Log output selected by LOG_FORMAT; anything but "json" is compact.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LogFormat {
    Compact,
    Json,
}

impl LogFormat {
    fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(format) if format.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Compact,
        }
    }
}

const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

fn init_runtime() {
    // Loaded before tracing so LOG_FORMAT and RUST_LOG can come from .env.
    let dotenv = dotenvy::dotenv();

    init_tracing(LogFormat::parse(std::env::var("LOG_FORMAT").ok().as_deref()));

    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(err) if err.not_found() => {}
        Err(err) => tracing::warn!(error = %err, "ignoring unreadable .env"),
    }

    std::panic::set_hook(Box::new(|info| {
        let location = info.location().map(ToString::to_string);
        tracing::error!(
            location = location.as_deref().unwrap_or("unknown"),
            backtrace = %std::backtrace::Backtrace::capture(),
            "panic: {info}"
        );
    }));
}

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match format {
        LogFormat::Json => builder.json().with_current_span(true).init(),
        LogFormat::Compact => builder.compact().init(),
    }
}

pub async fn run(listener: tokio::net::TcpListener, state: Arc<AppState>) -> Result<()> {
    let address = listener.local_addr()?;
    let app = routes::app(state).layer(cors_layer(&config::cors_allowed_origins()));

    tracing::info!(%address, "listening");

    // Serve app and report errors rather than panicking
    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let state = build_state().inspect_err(|e| {
        tracing::error!(error = %e, "invalid configuration");
    })?;

    let address = SocketAddr::new(config::http_host(), config::http_port());

    // Bind TCP listener with error handling
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener, state).await
}

fn build_state() -> Result<Arc<AppState>> {
    let settings = config::settings().map_err(std::io::Error::other)?;
    let service = config::service_client().map_err(std::io::Error::other)?;
    let anon = config::anon_client().map_err(std::io::Error::other)?;
    tracing::debug!(
        supabase_url = %settings.supabase_url,
        restricted_client = anon.is_some(),
        "supabase clients configured"
    );

    Ok(Arc::new(AppState {
        identity: service.clone(),
        catalog: service,
        frontend_dir: config::frontend_dir(),
    }))
}

// Credentials are allowed, so methods and headers mirror the request instead of using "*".
fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        // A wildcard cannot be combined with credentials.
        .filter(|origin| origin.as_str() != "*")
        .filter_map(|origin| {
            HeaderValue::from_str(origin)
                .inspect_err(|_| tracing::warn!(%origin, "ignoring invalid CORS origin"))
                .ok()
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
