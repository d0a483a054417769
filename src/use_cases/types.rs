use crate::domain::entities::ProviderSession;

// Identity returned by signup and login.
#[derive(Debug)]
pub struct AuthenticatedIdentity {
    pub user_id: String,
    pub email: String,
    // Absent when the provider does not issue a session right away.
    pub session: Option<ProviderSession>,
}

// Identity resolved from an access token.
#[derive(Debug)]
pub struct CurrentUser {
    pub user_id: String,
    pub email: String,
}
