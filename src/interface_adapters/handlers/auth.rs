use crate::domain::errors::AuthError;
use crate::interface_adapters::bearer::BearerToken;
use crate::interface_adapters::handlers::{ApiError, ApiJson, error_response};
use crate::interface_adapters::protocol::{
    AuthResponse, LoginRequest, LogoutRequest, SignupRequest, StatusResponse, TokenPayload,
    UserResponse,
};
use crate::interface_adapters::state::AppState;
use crate::use_cases::{
    AuthenticatedIdentity, CurrentUserUseCase, LoginUseCase, LogoutUseCase, SignupUseCase,
};
use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;
use validator::{Validate, ValidationErrors};

#[tracing::instrument(name = "signup", skip_all, fields(email = %payload.email))]
pub async fn signup(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<SignupRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    payload.validate().map_err(validation_error)?;

    let use_case = SignupUseCase {
        provider: state.identity.as_ref(),
    };
    let identity = use_case
        .execute(payload.into())
        .await
        .map_err(|err| map_auth_error(err, AuthErrorContext::Signup))?;

    tracing::info!(user_id = %identity.user_id, "user signed up.");
    Ok(Json(auth_response(identity)))
}

#[tracing::instrument(name = "login", skip_all, fields(email = %payload.email))]
pub async fn login(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    payload.validate().map_err(validation_error)?;

    let use_case = LoginUseCase {
        provider: state.identity.as_ref(),
    };
    let identity = use_case
        .execute(payload.into())
        .await
        .map_err(|err| map_auth_error(err, AuthErrorContext::Login))?;

    tracing::info!(user_id = %identity.user_id, "user logged in.");
    Ok(Json(auth_response(identity)))
}

#[tracing::instrument(name = "logout", skip_all)]
pub async fn logout(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<LogoutRequest>,
) -> Result<Json<StatusResponse>, ApiError> {
    let use_case = LogoutUseCase {
        provider: state.identity.as_ref(),
    };
    use_case
        .execute(payload.refresh_token)
        .await
        .map_err(|err| map_auth_error(err, AuthErrorContext::Logout))?;

    Ok(Json(StatusResponse::ok()))
}

#[tracing::instrument(name = "current_user", skip_all)]
pub async fn current_user(
    State(state): State<Arc<AppState>>,
    BearerToken(token): BearerToken,
) -> Result<Json<UserResponse>, ApiError> {
    let use_case = CurrentUserUseCase {
        provider: state.identity.as_ref(),
    };
    let user = use_case
        .execute(token)
        .await
        .map_err(|err| map_auth_error(err, AuthErrorContext::CurrentUser))?;

    Ok(Json(UserResponse {
        user_id: user.user_id,
        email: user.email,
    }))
}

fn auth_response(identity: AuthenticatedIdentity) -> AuthResponse {
    AuthResponse {
        user_id: identity.user_id,
        email: identity.email,
        token: identity.session.map(TokenPayload::from),
    }
}

// Field-level detail, e.g. "email: invalid email".
fn validation_error(errors: ValidationErrors) -> ApiError {
    let mut fields: Vec<String> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errors)| {
            let codes: Vec<String> = errors
                .iter()
                .map(|error| format!("invalid {}", error.code))
                .collect();
            format!("{field}: {}", codes.join(", "))
        })
        .collect();
    fields.sort();

    error_response(StatusCode::UNPROCESSABLE_ENTITY, fields.join("; "))
}

// Maps domain errors to HTTP responses by endpoint context.
#[derive(Clone, Copy)]
enum AuthErrorContext {
    Signup,
    Login,
    Logout,
    CurrentUser,
}

impl AuthErrorContext {
    // Status used for rejections and for failures the provider never answered.
    fn failure_status(self) -> StatusCode {
        match self {
            AuthErrorContext::Signup | AuthErrorContext::Logout => StatusCode::BAD_REQUEST,
            AuthErrorContext::Login | AuthErrorContext::CurrentUser => StatusCode::UNAUTHORIZED,
        }
    }
}

fn map_auth_error(err: AuthError, context: AuthErrorContext) -> ApiError {
    let status = match &err {
        AuthError::UserNotCreated => StatusCode::INTERNAL_SERVER_ERROR,
        AuthError::UserNotFound => StatusCode::NOT_FOUND,
        AuthError::Rejected(_) | AuthError::InvalidCredentials | AuthError::Unavailable(_) => {
            context.failure_status()
        }
    };

    match &err {
        AuthError::Unavailable(_) => {
            tracing::error!(error = %err, %status, "identity provider unavailable.");
        }
        AuthError::UserNotCreated => {
            tracing::error!(error = %err, "identity provider returned incomplete data.");
        }
        _ => tracing::warn!(error = %err, %status, "identity provider refused request."),
    }
    error_response(status, err.to_string())
}
