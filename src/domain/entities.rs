use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// Email/password pair forwarded to the identity provider.
#[derive(Clone, Debug, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

// Identity record as reported by the provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdentityUser {
    pub id: String,
    pub email: Option<String>,
}

// Access/refresh token pair issued by the provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProviderSession {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: Option<i64>,
}

// Result of a sign-up or sign-in call. Either half may be missing, e.g. a
// sign-up that still waits for email confirmation carries no session.
#[derive(Clone, Debug, Default)]
pub struct AuthOutcome {
    pub user: Option<IdentityUser>,
    pub session: Option<ProviderSession>,
}

// Raw row returned by the product table query.
pub type ProductRow = Map<String, Value>;

// Read-only projection of a product row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub headline: Option<String>,
    pub description: Option<String>,
    pub price_cents: Option<i64>,
    pub image_url: Option<String>,
}
