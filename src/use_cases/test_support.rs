use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::entities::{AuthOutcome, Credentials, IdentityUser, ProductRow};
use crate::domain::errors::ProviderError;
use crate::domain::ports::{IdentityProvider, ProductCatalog};

pub(crate) fn credentials(email: &str, password: &str) -> Credentials {
    Credentials {
        email: email.to_string(),
        password: password.to_string(),
    }
}

// Builds a product row from a JSON object literal.
pub(crate) fn row(value: Value) -> ProductRow {
    match value {
        Value::Object(map) => map,
        other => panic!("product rows must be JSON objects, got {other}"),
    }
}

#[derive(Default)]
struct Calls {
    sign_up: Vec<Credentials>,
    sign_in: Vec<Credentials>,
    sign_out: Vec<String>,
    get_user: Vec<String>,
}

// Scripted identity provider that records every call it receives.
#[derive(Clone)]
pub(crate) struct FakeIdentity {
    sign_up: Result<AuthOutcome, ProviderError>,
    sign_in: Result<AuthOutcome, ProviderError>,
    sign_out: Result<(), ProviderError>,
    user: Result<Option<IdentityUser>, ProviderError>,
    calls: Arc<Mutex<Calls>>,
}

impl FakeIdentity {
    pub(crate) fn new() -> Self {
        Self {
            sign_up: Ok(AuthOutcome::default()),
            sign_in: Ok(AuthOutcome::default()),
            sign_out: Ok(()),
            user: Ok(None),
            calls: Arc::new(Mutex::new(Calls::default())),
        }
    }

    pub(crate) fn with_sign_up(mut self, result: Result<AuthOutcome, ProviderError>) -> Self {
        self.sign_up = result;
        self
    }

    pub(crate) fn with_sign_in(mut self, result: Result<AuthOutcome, ProviderError>) -> Self {
        self.sign_in = result;
        self
    }

    pub(crate) fn with_sign_out(mut self, result: Result<(), ProviderError>) -> Self {
        self.sign_out = result;
        self
    }

    pub(crate) fn with_user(mut self, result: Result<Option<IdentityUser>, ProviderError>) -> Self {
        self.user = result;
        self
    }

    pub(crate) fn sign_up_calls(&self) -> Vec<Credentials> {
        self.calls.lock().expect("calls mutex poisoned").sign_up.clone()
    }

    pub(crate) fn sign_out_calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls mutex poisoned").sign_out.clone()
    }

    pub(crate) fn get_user_calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls mutex poisoned").get_user.clone()
    }
}

#[async_trait]
impl IdentityProvider for FakeIdentity {
    async fn sign_up(&self, credentials: &Credentials) -> Result<AuthOutcome, ProviderError> {
        let mut calls = self.calls.lock().expect("calls mutex poisoned");
        calls.sign_up.push(credentials.clone());
        self.sign_up.clone()
    }

    async fn sign_in_with_password(
        &self,
        credentials: &Credentials,
    ) -> Result<AuthOutcome, ProviderError> {
        let mut calls = self.calls.lock().expect("calls mutex poisoned");
        calls.sign_in.push(credentials.clone());
        self.sign_in.clone()
    }

    async fn sign_out(&self, token: &str) -> Result<(), ProviderError> {
        let mut calls = self.calls.lock().expect("calls mutex poisoned");
        calls.sign_out.push(token.to_string());
        self.sign_out.clone()
    }

    async fn get_user(&self, access_token: &str) -> Result<Option<IdentityUser>, ProviderError> {
        let mut calls = self.calls.lock().expect("calls mutex poisoned");
        calls.get_user.push(access_token.to_string());
        self.user.clone()
    }
}

// Catalog returning a fixed query result.
#[derive(Clone)]
pub(crate) struct FakeCatalog {
    rows: Result<Vec<ProductRow>, ProviderError>,
}

impl FakeCatalog {
    pub(crate) fn new(rows: Result<Vec<ProductRow>, ProviderError>) -> Self {
        Self { rows }
    }
}

#[async_trait]
impl ProductCatalog for FakeCatalog {
    async fn list_products(&self) -> Result<Vec<ProductRow>, ProviderError> {
        self.rows.clone()
    }
}
