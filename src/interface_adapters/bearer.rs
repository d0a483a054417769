//! `Authorization: Bearer <token>` parsing.

use axum::{
    Json,
    extract::FromRequestParts,
    http::{StatusCode, header::AUTHORIZATION, request::Parts},
};
use thiserror::Error;

use crate::interface_adapters::protocol::ErrorResponse;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum BearerError {
    #[error("Missing authorization header")]
    Missing,
    #[error("Invalid authorization header")]
    Malformed,
    #[error("Invalid authorization scheme")]
    InvalidScheme,
}

/// Extracts the token from a raw `Authorization` header value.
///
/// The header must be `<scheme> <token>` with a case-insensitive `bearer`
/// scheme and a non-empty token. The token is everything after the first
/// space, trimmed.
pub fn extract_bearer_token(header: Option<&str>) -> Result<String, BearerError> {
    let header = match header {
        Some(value) if !value.is_empty() => value,
        _ => return Err(BearerError::Missing),
    };

    let (scheme, token) = header.split_once(' ').ok_or(BearerError::Malformed)?;

    let token = token.trim();
    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return Err(BearerError::InvalidScheme);
    }

    Ok(token.to_string())
}

/// Extractor wrapping [`extract_bearer_token`]; rejects with `401`.
#[derive(Debug)]
pub struct BearerToken(pub String);

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ErrorResponse>);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = match parts.headers.get(AUTHORIZATION) {
            None => None,
            // Non-visible-ASCII header values cannot carry a usable token.
            Some(value) => Some(value.to_str().map_err(|_| unauthorized(BearerError::Malformed))?),
        };

        extract_bearer_token(header)
            .map(BearerToken)
            .map_err(unauthorized)
    }
}

fn unauthorized(err: BearerError) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorResponse {
            detail: err.to_string(),
        }),
    )
}
