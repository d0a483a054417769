use async_trait::async_trait;

use crate::domain::entities::{AuthOutcome, Credentials, IdentityUser, ProductRow};
use crate::domain::errors::ProviderError;

// Identity operations the use cases depend on; the Supabase client is one
// implementation, test fakes are another.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_up(&self, credentials: &Credentials) -> Result<AuthOutcome, ProviderError>;
    async fn sign_in_with_password(
        &self,
        credentials: &Credentials,
    ) -> Result<AuthOutcome, ProviderError>;
    // Administrative revocation of the session the token belongs to.
    async fn sign_out(&self, token: &str) -> Result<(), ProviderError>;
    async fn get_user(&self, access_token: &str) -> Result<Option<IdentityUser>, ProviderError>;
}

// Port for the hosted product table.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    // Rows ordered by creation time, oldest first.
    async fn list_products(&self) -> Result<Vec<ProductRow>, ProviderError>;
}
