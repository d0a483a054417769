use crate::domain::errors::AuthError;
use crate::domain::ports::IdentityProvider;
use crate::use_cases::types::CurrentUser;

// Resolves the identity behind an access token.
pub struct CurrentUserUseCase<'a, P: ?Sized> {
    pub provider: &'a P,
}

impl<P> CurrentUserUseCase<'_, P>
where
    P: IdentityProvider + ?Sized,
{
    pub async fn execute(&self, access_token: String) -> Result<CurrentUser, AuthError> {
        let user = self
            .provider
            .get_user(&access_token)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        Ok(CurrentUser {
            user_id: user.id,
            email: user.email.unwrap_or_default(),
        })
    }
}
