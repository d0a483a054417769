use crate::domain::errors::AuthError;
use crate::domain::ports::IdentityProvider;

// Logout use case; revocation semantics are entirely up to the provider.
pub struct LogoutUseCase<'a, P: ?Sized> {
    pub provider: &'a P,
}

impl<P> LogoutUseCase<'_, P>
where
    P: IdentityProvider + ?Sized,
{
    pub async fn execute(&self, refresh_token: String) -> Result<(), AuthError> {
        self.provider.sign_out(&refresh_token).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::ProviderError;
    use crate::use_cases::test_support::FakeIdentity;

    #[tokio::test]
    async fn when_provider_accepts_then_logout_succeeds_and_token_is_forwarded() {
        let provider = FakeIdentity::new();
        let use_case = LogoutUseCase {
            provider: &provider,
        };

        use_case
            .execute("refresh-1".to_string())
            .await
            .expect("expected logout to succeed");

        assert_eq!(provider.sign_out_calls(), vec!["refresh-1".to_string()]);
    }

    #[tokio::test]
    async fn when_token_has_whitespace_then_it_is_forwarded_untrimmed() {
        let provider = FakeIdentity::new();
        let use_case = LogoutUseCase {
            provider: &provider,
        };

        use_case
            .execute(" refresh-1 ".to_string())
            .await
            .expect("expected logout to succeed");

        assert_eq!(provider.sign_out_calls(), vec![" refresh-1 ".to_string()]);
    }

    #[tokio::test]
    async fn when_provider_rejects_then_returns_rejected() {
        let provider = FakeIdentity::new().with_sign_out(Err(ProviderError::Rejected {
            status: 401,
            message: "invalid JWT".to_string(),
        }));
        let use_case = LogoutUseCase {
            provider: &provider,
        };

        let result = use_case.execute("garbage".to_string()).await;

        match result {
            Err(AuthError::Rejected(message)) => assert_eq!(message, "invalid JWT"),
            other => panic!("expected rejection, got {other:?}"),
        }
    }
}
