use std::rc::Rc;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;

use crate::error::ApiError;
use crate::models::{ChatMessage, ChatOptions, ChatRequest, ChatResponse};
use crate::services::auth::AuthService;

pub const DEFAULT_MAX_TOKENS: u32 = 1000;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Client for the AI completion endpoint.
pub struct ChatService {
    client: Client,
    base_url: Option<String>,
    auth: Rc<AuthService>,
}

impl ChatService {
    pub fn new(client: Client, base_url: Option<String>, auth: Rc<AuthService>) -> Self {
        Self { client, base_url, auth }
    }

    pub fn is_configured(&self) -> bool {
        self.base_url.is_some()
    }

    /// A single user turn with the default sampling parameters, overridden
    /// field by field by `options`.
    pub fn build_simple_request(message: &str, options: ChatOptions) -> ChatRequest {
        Self::build_request(vec![ChatMessage::user(message)], options)
    }

    /// Same defaults as [`Self::build_simple_request`] for a whole transcript.
    pub fn build_request(messages: Vec<ChatMessage>, options: ChatOptions) -> ChatRequest {
        ChatRequest {
            messages,
            max_tokens: Some(DEFAULT_MAX_TOKENS),
            temperature: Some(DEFAULT_TEMPERATURE),
            ..Default::default()
        }
        .with_options(options)
    }

    /// Sends `request` to `/ai/chat`.
    ///
    /// The bearer token is attached when a session exists. Without one the
    /// request still goes out, just without an `Authorization` header.
    pub async fn send_chat_message(&self, request: &ChatRequest) -> Result<ChatResponse, ApiError> {
        let base = self.base_url.as_deref().ok_or(ApiError::Configuration)?;
        let url = format!("{}/ai/chat", base);

        let mut builder = self.client.post(&url).json(request);
        match self.auth.token() {
            Some(token) => builder = builder.bearer_auth(token),
            None => log::debug!("no session token, sending chat request anonymously"),
        }
        log::debug!("POST {} ({} messages)", url, request.messages.len());

        let resp = builder.send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            log::warn!("chat request failed with status {}", status.as_u16());
            return Err(ApiError::Http { status: status.as_u16(), body });
        }

        Ok(resp.json::<ChatResponse>().await?)
    }

    /// JSON content type plus `Authorization: Bearer <token>`, with an empty
    /// token when there is no session.
    pub fn auth_headers(&self) -> HeaderMap {
        let token = self.auth.token().unwrap_or_default();
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let bearer = HeaderValue::from_str(&format!("Bearer {}", token)).unwrap_or_else(|_| {
            log::warn!("stored token is not a valid header value, sending an empty bearer");
            HeaderValue::from_static("Bearer ")
        });
        headers.insert(AUTHORIZATION, bearer);
        headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AuthResponse, Role, User};
    use crate::services::storage::MemoryStore;

    fn services(ai_url: Option<&str>) -> (Rc<AuthService>, ChatService) {
        let auth = Rc::new(AuthService::new(Client::new(), None, Rc::new(MemoryStore::new())));
        let chat = ChatService::new(Client::new(), ai_url.map(String::from), auth.clone());
        (auth, chat)
    }

    #[test]
    fn simple_request_uses_defaults() {
        let req = ChatService::build_simple_request("hi", ChatOptions::default());
        assert_eq!(req.messages.len(), 1);
        assert_eq!(req.messages[0].role, Role::User);
        assert_eq!(req.messages[0].content, "hi");
        assert_eq!(req.max_tokens, Some(1000));
        assert_eq!(req.temperature, Some(0.7));
        assert!(req.top_p.is_none());
        assert!(req.stream.is_none());
    }

    #[test]
    fn simple_request_override_touches_only_that_field() {
        let options = ChatOptions { temperature: Some(0.2), ..Default::default() };
        let req = ChatService::build_simple_request("hi", options);
        assert_eq!(req.temperature, Some(0.2));
        assert_eq!(req.max_tokens, Some(1000));
    }

    #[test]
    fn configured_only_with_ai_url() {
        assert!(!services(None).1.is_configured());
        assert!(services(Some("http://ai")).1.is_configured());
    }

    #[test]
    fn auth_headers_without_session_use_empty_bearer() {
        let (_, chat) = services(None);
        let headers = chat.auth_headers();
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert_eq!(headers[AUTHORIZATION], "Bearer ");
    }

    #[test]
    fn auth_headers_carry_stored_token() {
        let (auth, chat) = services(None);
        auth.save_session(&AuthResponse {
            message: "ok".into(),
            user: User { id: 2, username: "bo".into(), email: "bo@example.com".into() },
            token: "abc".into(),
        })
        .unwrap();
        assert_eq!(chat.auth_headers()[AUTHORIZATION], "Bearer abc");

        auth.logout();
        assert_eq!(chat.auth_headers()[AUTHORIZATION], "Bearer ");
    }

    #[test]
    fn auth_headers_fall_back_to_empty_bearer_for_unusable_token() {
        let (auth, chat) = services(None);
        auth.save_session(&AuthResponse {
            message: "ok".into(),
            user: User { id: 3, username: "cy".into(), email: "cy@example.com".into() },
            token: "bad\ntoken".into(),
        })
        .unwrap();
        assert!(auth.is_authenticated());
        assert_eq!(chat.auth_headers()[AUTHORIZATION], "Bearer ");
    }
}
