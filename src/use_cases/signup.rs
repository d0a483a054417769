use crate::domain::entities::Credentials;
use crate::domain::errors::AuthError;
use crate::domain::ports::IdentityProvider;
use crate::use_cases::types::AuthenticatedIdentity;

// Signup use case with an injected identity provider.
pub struct SignupUseCase<'a, P: ?Sized> {
    pub provider: &'a P,
}

impl<P> SignupUseCase<'_, P>
where
    P: IdentityProvider + ?Sized,
{
    pub async fn execute(&self, credentials: Credentials) -> Result<AuthenticatedIdentity, AuthError> {
        let outcome = self.provider.sign_up(&credentials).await?;

        // A success without a user object is a provider contract violation.
        let user = outcome.user.ok_or(AuthError::UserNotCreated)?;

        Ok(AuthenticatedIdentity {
            user_id: user.id,
            email: user.email.unwrap_or(credentials.email),
            session: outcome.session,
        })
    }
}
