use std::rc::Rc;

use reqwest::{Client, StatusCode};
use serde::Serialize;

use crate::error::ApiError;
use crate::models::{AuthResponse, ErrorBody, LoginRequest, RegisterRequest, User};
use crate::services::storage::SessionStore;

pub const KEY_TOKEN: &str = "token";
pub const KEY_USER: &str = "user";

#[derive(Clone, Copy, Debug)]
enum AuthOp {
    Register,
    Login,
}

impl AuthOp {
    fn path(self) -> &'static str {
        match self {
            AuthOp::Register => "/auth/register",
            AuthOp::Login => "/auth/login",
        }
    }

    fn error(self, message: String, source: Option<reqwest::Error>) -> ApiError {
        match self {
            AuthOp::Register => ApiError::Registration { message, source },
            AuthOp::Login => ApiError::Login { message, source },
        }
    }
}

/// Registration, login and the persisted session.
///
/// Built once at startup and shared as `Rc<AuthService>`; the session itself
/// lives in the injected [`SessionStore`].
pub struct AuthService {
    client: Client,
    base_url: Option<String>,
    store: Rc<dyn SessionStore>,
}

impl AuthService {
    pub fn new(client: Client, base_url: Option<String>, store: Rc<dyn SessionStore>) -> Self {
        Self { client, base_url, store }
    }

    pub async fn register(&self, data: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.post(AuthOp::Register, data).await
    }

    pub async fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.post(AuthOp::Login, credentials).await
    }

    async fn post<B: Serialize + ?Sized>(&self, op: AuthOp, body: &B) -> Result<AuthResponse, ApiError> {
        let base = self.base_url.as_deref().ok_or(ApiError::Configuration)?;
        let url = format!("{}{}", base, op.path());
        log::debug!("POST {}", url);

        let resp = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| op.error(e.to_string(), Some(e)))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            let message = server_message(status, &text);
            log::warn!("{} rejected ({}): {}", op.path(), status.as_u16(), message);
            return Err(op.error(message, None));
        }

        resp.json::<AuthResponse>()
            .await
            .map_err(|e| op.error(e.to_string(), Some(e)))
    }

    /// Writes `user` then `token`. If either write fails both entries are
    /// cleared, so a failed save never leaves a usable session behind.
    pub fn save_session(&self, auth: &AuthResponse) -> Result<(), ApiError> {
        let written = self
            .store
            .set_json(KEY_USER, &auth.user)
            .and_then(|()| self.store.set(KEY_TOKEN, &auth.token));
        if let Err(err) = written {
            log::warn!("could not save session: {}", err);
            self.logout();
            return Err(err.into());
        }
        log::info!("session saved for user {}", auth.user.id);
        Ok(())
    }

    /// Stored bearer token. An empty value counts as no token.
    pub fn token(&self) -> Option<String> {
        self.store.get(KEY_TOKEN).filter(|t| !t.is_empty())
    }

    pub fn current_user(&self) -> Option<User> {
        self.store.get_json(KEY_USER)
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn logout(&self) {
        self.store.remove(KEY_TOKEN);
        self.store.remove(KEY_USER);
        log::info!("session cleared");
    }
}

/// `message` from a `{"message": "..."}` body, or a generic description when
/// the body has some other shape.
fn server_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("server responded with status {}", status.as_u16()))
}
