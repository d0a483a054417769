use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use url::Url;

use crate::domain::entities::{AuthOutcome, Credentials, IdentityUser, ProductRow, ProviderSession};
use crate::domain::errors::ProviderError;
use crate::domain::ports::{IdentityProvider, ProductCatalog};

const PRODUCTS_TABLE: &str = "products";

// Thin reqwest wrapper around the Supabase auth (GoTrue) and table (PostgREST) APIs.
// One instance is bound to one API key.
#[derive(Clone)]
pub struct SupabaseClient {
    http: Client,
    base_url: Url,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct WireUser {
    id: String,
    #[serde(default)]
    email: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireSession {
    access_token: String,
    refresh_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    user: Option<WireUser>,
}

impl From<WireUser> for IdentityUser {
    fn from(user: WireUser) -> Self {
        IdentityUser {
            id: user.id,
            // Phone-only accounts come back with an empty email.
            email: user.email.filter(|email| !email.is_empty()),
        }
    }
}

impl From<WireSession> for AuthOutcome {
    fn from(session: WireSession) -> Self {
        AuthOutcome {
            user: session.user.map(IdentityUser::from),
            session: Some(ProviderSession {
                access_token: session.access_token,
                refresh_token: session.refresh_token,
                expires_in: session.expires_in,
            }),
        }
    }
}

impl SupabaseClient {
    pub fn new(
        base_url: Url,
        api_key: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url,
            api_key: api_key.into(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // Appends `path` to the project URL, keeping any path prefix it already has.
    fn endpoint(&self, path: &str, query: &[(&str, &str)]) -> Url {
        let mut url = self.base_url.clone();
        let prefix = self.base_url.path().trim_end_matches('/');
        url.set_path(&format!("{prefix}/{path}"));
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        url
    }

    // Every call carries the API key; the bearer is the key itself unless a
    // user token is presented.
    fn request(&self, method: Method, url: Url, bearer: Option<&str>) -> RequestBuilder {
        self.http
            .request(method, url)
            .header("apikey", &self.api_key)
            .bearer_auth(bearer.unwrap_or(&self.api_key))
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ProviderError> {
        let response = request
            .send()
            .await
            .map_err(|err| ProviderError::Unavailable(err.to_string()))?;

        // Keep upstream status/message so handlers can surface the reason.
        if !response.status().is_success() {
            return Err(rejection(response).await);
        }

        Ok(response)
    }

    async fn decode(response: Response) -> Result<Value, ProviderError> {
        response
            .json::<Value>()
            .await
            .map_err(|err| ProviderError::Unavailable(format!("undecodable response: {err}")))
    }
}

async fn rejection(response: Response) -> ProviderError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    ProviderError::Rejected {
        status: status.as_u16(),
        message: error_message(status, &body),
    }
}

// GoTrue and PostgREST disagree on where the human-readable message lives.
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(Value::Object(fields)) = serde_json::from_str::<Value>(body) {
        for key in ["msg", "message", "error_description", "error"] {
            if let Some(Value::String(message)) = fields.get(key) {
                if !message.is_empty() {
                    return message.clone();
                }
            }
        }
    }

    let body = body.trim();
    if !body.is_empty() {
        return body.to_string();
    }

    status
        .canonical_reason()
        .unwrap_or("provider request failed")
        .to_string()
}

// A user object is anything carrying an `id`; everything else means "no user".
fn parse_user(value: Value) -> Option<IdentityUser> {
    serde_json::from_value::<WireUser>(value)
        .ok()
        .map(IdentityUser::from)
}

fn parse_session(value: Value) -> Result<AuthOutcome, ProviderError> {
    serde_json::from_value::<WireSession>(value)
        .map(AuthOutcome::from)
        .map_err(|err| ProviderError::Unavailable(format!("undecodable session: {err}")))
}

#[async_trait]
impl IdentityProvider for SupabaseClient {
    async fn sign_up(&self, credentials: &Credentials) -> Result<AuthOutcome, ProviderError> {
        let url = self.endpoint("auth/v1/signup", &[]);
        let response = self
            .send(self.request(Method::POST, url, None).json(credentials))
            .await?;
        let body = Self::decode(response).await?;

        // With email confirmation enabled the provider answers with the bare
        // user and no session.
        if body.get("access_token").is_some() {
            return parse_session(body);
        }

        Ok(AuthOutcome {
            user: parse_user(body),
            session: None,
        })
    }

    async fn sign_in_with_password(
        &self,
        credentials: &Credentials,
    ) -> Result<AuthOutcome, ProviderError> {
        let url = self.endpoint("auth/v1/token", &[("grant_type", "password")]);
        let response = self
            .send(self.request(Method::POST, url, None).json(credentials))
            .await?;

        parse_session(Self::decode(response).await?)
    }

    async fn sign_out(&self, token: &str) -> Result<(), ProviderError> {
        let url = self.endpoint("auth/v1/logout", &[("scope", "global")]);
        self.send(self.request(Method::POST, url, Some(token)))
            .await?;

        Ok(())
    }

    async fn get_user(&self, access_token: &str) -> Result<Option<IdentityUser>, ProviderError> {
        let url = self.endpoint("auth/v1/user", &[]);
        let response = self
            .send(self.request(Method::GET, url, Some(access_token)))
            .await?;

        Ok(parse_user(Self::decode(response).await?))
    }
}

#[async_trait]
impl ProductCatalog for SupabaseClient {
    async fn list_products(&self) -> Result<Vec<ProductRow>, ProviderError> {
        let url = self.endpoint(
            &format!("rest/v1/{PRODUCTS_TABLE}"),
            &[("select", "*"), ("order", "created_at.asc")],
        );
        let response = self.send(self.request(Method::GET, url, None)).await?;

        response
            .json::<Vec<ProductRow>>()
            .await
            .map_err(|err| ProviderError::Unavailable(format!("undecodable rows: {err}")))
    }
}
