use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::app::use_app;
use crate::components::chat_area::{ChatArea, ChatEntry};
use crate::components::form::FormError;
use crate::models::{ChatMessage, ChatOptions, Role};
use crate::services::chat::ChatService;

#[function_component(ChatPage)]
pub fn chat_page() -> Html {
    let ctx = use_app();
    let entries = use_state(Vec::<ChatEntry>::new);
    let is_loading = use_state(|| false);
    let error = use_state(|| None::<String>);
    let chat = ctx.services.chat.clone();

    let on_send = {
        let entries = entries.clone();
        let loading = is_loading.clone();
        let error = error.clone();
        let chat = chat.clone();

        Callback::from(move |text: String| {
            let mut history = (*entries).clone();
            history.push(ChatEntry::new(ChatMessage::user(text)));
            entries.set(history.clone());
            loading.set(true);
            error.set(None);

            let messages: Vec<ChatMessage> = history.iter().map(|e| e.message.clone()).collect();
            let request = ChatService::build_request(messages, ChatOptions::default());

            let entries = entries.clone();
            let loading = loading.clone();
            let error = error.clone();
            let chat = chat.clone();
            spawn_local(async move {
                match chat.send_chat_message(&request).await {
                    Ok(resp) => match resp.reply() {
                        Some(reply) => {
                            history.push(ChatEntry::new(ChatMessage {
                                role: Role::Assistant,
                                content: reply.to_string(),
                            }));
                            entries.set(history);
                        }
                        None => {
                            log::warn!("completion {} returned no choices", resp.id);
                            error.set(Some("The assistant returned an empty reply.".to_string()));
                        }
                    },
                    Err(err) => {
                        log::warn!("chat request failed: {}", err);
                        error.set(Some(err.to_string()));
                    }
                }
                loading.set(false);
            });
        })
    };

    html! {
        <>
            if !chat.is_configured() {
                <div class="page">
                    <FormError error={Some("The AI service URL is not configured.".to_string())} />
                </div>
            }
            if let Some(msg) = (*error).clone() {
                <div style="padding: 0 20px;">
                    <FormError error={Some(msg)} />
                </div>
            }
            <ChatArea
                entries={(*entries).clone()}
                is_loading={*is_loading}
                {on_send}
            />
        </>
    }
}
