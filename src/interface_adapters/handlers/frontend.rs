use crate::interface_adapters::handlers::{ApiError, error_response};
use crate::interface_adapters::state::AppState;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode, Uri, header::HOST, uri::Authority},
    response::Html,
};
use std::sync::Arc;

const INDEX_FILE: &str = "index.html";
const BASE_URL_PLACEHOLDER: &str = "{{ api_base_url }}";
const FORWARDED_PROTO: &str = "x-forwarded-proto";

// Renders the single page with the API base URL filled in.
pub async fn serve_frontend(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    headers: HeaderMap,
) -> Result<Html<String>, ApiError> {
    let api_base_url = api_base_url(&uri, &headers)?;

    let path = state.frontend_dir.join(INDEX_FILE);
    let page = tokio::fs::read_to_string(&path).await.map_err(|err| {
        tracing::warn!(path = %path.display(), error = %err, "frontend page unavailable.");
        error_response(StatusCode::NOT_FOUND, "Not Found")
    })?;

    Ok(Html(render(&page, &api_base_url)))
}

fn api_base_url(uri: &Uri, headers: &HeaderMap) -> Result<String, ApiError> {
    let authority = match headers.get(HOST) {
        Some(value) => value
            .to_str()
            .ok()
            .and_then(|host| host.parse::<Authority>().ok())
            .filter(|authority| !authority.as_str().contains('@'))
            .ok_or_else(|| {
                tracing::warn!(host = ?value, "rejected malformed host header.");
                error_response(StatusCode::BAD_REQUEST, "Invalid host header")
            })?,
        None => uri
            .authority()
            .cloned()
            .unwrap_or_else(|| Authority::from_static("localhost")),
    };

    Ok(format!("{}://{authority}", request_scheme(uri, headers)))
}

// First hop of X-Forwarded-Proto wins over the request line; anything but https is http.
fn request_scheme(uri: &Uri, headers: &HeaderMap) -> &'static str {
    let forwarded = headers
        .get(FORWARDED_PROTO)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim);

    match forwarded.or(uri.scheme_str()) {
        Some(scheme) if scheme.eq_ignore_ascii_case("https") => "https",
        _ => "http",
    }
}

// The placeholder sits in a <script> block, so the value goes in as a JSON
// string literal that cannot close the tag.
fn render(page: &str, api_base_url: &str) -> String {
    page.replace(BASE_URL_PLACEHOLDER, &script_literal(api_base_url))
}

fn script_literal(value: &str) -> String {
    serde_json::Value::from(value)
        .to_string()
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
}
