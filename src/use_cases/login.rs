use crate::domain::entities::Credentials;
use crate::domain::errors::AuthError;
use crate::domain::ports::IdentityProvider;
use crate::use_cases::types::AuthenticatedIdentity;

// Password login use case with an injected identity provider.
pub struct LoginUseCase<'a, P: ?Sized> {
    pub provider: &'a P,
}

impl<P> LoginUseCase<'_, P>
where
    P: IdentityProvider + ?Sized,
{
    pub async fn execute(&self, credentials: Credentials) -> Result<AuthenticatedIdentity, AuthError> {
        let outcome = self.provider.sign_in_with_password(&credentials).await?;

        // A login must yield both a user and a session.
        let (Some(user), Some(session)) = (outcome.user, outcome.session) else {
            return Err(AuthError::InvalidCredentials);
        };

        Ok(AuthenticatedIdentity {
            user_id: user.id,
            email: user.email.unwrap_or(credentials.email),
            session: Some(session),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{AuthOutcome, IdentityUser, ProviderSession};
    use crate::domain::errors::ProviderError;
    use crate::use_cases::test_support::{FakeIdentity, credentials};

    fn user() -> IdentityUser {
        IdentityUser {
            id: "user-1".to_string(),
            email: Some("pilot@example.com".to_string()),
        }
    }

    fn session() -> ProviderSession {
        ProviderSession {
            access_token: "access".to_string(),
            refresh_token: "refresh".to_string(),
            expires_in: Some(3600),
        }
    }

    #[tokio::test]
    async fn when_credentials_are_valid_then_identity_and_session_are_returned() {
        let provider = FakeIdentity::new().with_sign_in(Ok(AuthOutcome {
            user: Some(user()),
            session: Some(session()),
        }));
        let use_case = LoginUseCase {
            provider: &provider,
        };

        let result = use_case
            .execute(credentials("pilot@example.com", "hunter22"))
            .await
            .expect("expected login to succeed");

        assert_eq!(result.user_id, "user-1");
        assert_eq!(result.session, Some(session()));
    }

    #[tokio::test]
    async fn when_provider_rejects_then_message_is_passed_through() {
        let provider = FakeIdentity::new().with_sign_in(Err(ProviderError::Rejected {
            status: 400,
            message: "Invalid login credentials".to_string(),
        }));
        let use_case = LoginUseCase {
            provider: &provider,
        };

        let result = use_case
            .execute(credentials("pilot@example.com", "wrong"))
            .await;

        match result {
            Err(AuthError::Rejected(message)) => assert_eq!(message, "Invalid login credentials"),
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn when_session_is_missing_then_returns_invalid_credentials() {
        let provider = FakeIdentity::new().with_sign_in(Ok(AuthOutcome {
            user: Some(user()),
            session: None,
        }));
        let use_case = LoginUseCase {
            provider: &provider,
        };

        let result = use_case
            .execute(credentials("pilot@example.com", "hunter22"))
            .await;

        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn when_user_is_missing_then_returns_invalid_credentials() {
        let provider = FakeIdentity::new().with_sign_in(Ok(AuthOutcome {
            user: None,
            session: Some(session()),
        }));
        let use_case = LoginUseCase {
            provider: &provider,
        };

        let result = use_case
            .execute(credentials("pilot@example.com", "hunter22"))
            .await;

        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }
}
