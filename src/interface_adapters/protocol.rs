use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Credentials, ProviderSession};

pub use crate::domain::entities::Product;

// Request payload for signup.
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(email)]
    pub email: String,
    pub password: String,
}

// Request payload for password login.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    pub password: String,
}

impl From<SignupRequest> for Credentials {
    fn from(payload: SignupRequest) -> Self {
        Credentials {
            email: payload.email,
            password: payload.password,
        }
    }
}

impl From<LoginRequest> for Credentials {
    fn from(payload: LoginRequest) -> Self {
        Credentials {
            email: payload.email,
            password: payload.password,
        }
    }
}

// Session tokens handed back to the client.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenPayload {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: Option<i64>,
}

impl From<ProviderSession> for TokenPayload {
    fn from(session: ProviderSession) -> Self {
        TokenPayload {
            access_token: session.access_token,
            refresh_token: session.refresh_token,
            token_type: "bearer".to_string(),
            expires_in: session.expires_in,
        }
    }
}

// Response payload for signup and login.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user_id: String,
    pub email: String,
    pub token: Option<TokenPayload>,
}

// Request payload for logout.
#[derive(Debug, Deserialize)]
pub struct LogoutRequest {
    pub refresh_token: String,
}

// Response payload for the current user lookup.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub user_id: String,
    pub email: String,
}

// Fixed acknowledgement for logout.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

// Simple error envelope for JSON responses.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}
