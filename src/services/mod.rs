pub mod auth;
pub mod chat;
pub mod storage;

use std::rc::Rc;

use reqwest::Client;

use crate::config::AppConfig;
use auth::AuthService;
use chat::ChatService;
use storage::SessionStore;

/// The service instances shared by every view.
#[derive(Clone)]
pub struct Services {
    pub auth: Rc<AuthService>,
    pub chat: Rc<ChatService>,
}

impl Services {
    pub fn new(config: &AppConfig, store: Rc<dyn SessionStore>) -> Self {
        let client = Client::new();
        let auth = Rc::new(AuthService::new(client.clone(), config.api_base_url.clone(), store));
        let chat = Rc::new(ChatService::new(client, config.ai_base_url.clone(), auth.clone()));
        Self { auth, chat }
    }
}

impl PartialEq for Services {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.auth, &other.auth) && Rc::ptr_eq(&self.chat, &other.chat)
    }
}
