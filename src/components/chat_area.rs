use uuid::Uuid;
use web_sys::{HtmlElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::models::{ChatMessage, Role};
use crate::utils::render_markdown;

/// One rendered transcript line. The id keys the list so Yew keeps DOM nodes
/// stable as replies arrive.
#[derive(Clone, PartialEq, Debug)]
pub struct ChatEntry {
    pub id: String,
    pub message: ChatMessage,
}

impl ChatEntry {
    pub fn new(message: ChatMessage) -> Self {
        Self { id: Uuid::new_v4().to_string(), message }
    }
}

#[derive(Properties, PartialEq)]
pub struct ChatAreaProps {
    pub entries: Vec<ChatEntry>,
    pub is_loading: bool,
    pub on_send: Callback<String>,
}

#[function_component(ChatArea)]
pub fn chat_area(props: &ChatAreaProps) -> Html {
    let input_text = use_state(String::new);
    let scroll_ref = use_node_ref();

    // Keep the newest message in view.
    {
        let div_ref = scroll_ref.clone();
        let len = props.entries.len();
        let loading = props.is_loading;
        use_effect_with((len, loading), move |_| {
            if let Some(div) = div_ref.cast::<HtmlElement>() {
                div.set_scroll_top(div.scroll_height());
            }
        });
    }

    let send = {
        let text = input_text.clone();
        let on_send = props.on_send.clone();
        move || {
            let trimmed = text.trim().to_string();
            if !trimmed.is_empty() {
                on_send.emit(trimmed);
                text.set(String::new());
            }
        }
    };

    let on_submit = {
        let send = send.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            send();
        })
    };

    let on_keydown = Callback::from(move |e: KeyboardEvent| {
        if e.key() == "Enter" && !e.shift_key() {
            e.prevent_default();
            send();
        }
    });

    let on_input = {
        let text = input_text.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            text.set(area.value());
        })
    };

    let css = r#"
        .messages-container { flex-grow: 1; overflow-y: auto; padding: 20px; display: flex; flex-direction: column; gap: 15px; scroll-behavior: smooth; }

        .message-row { display: flex; width: 100%; }
        .message-row.user { justify-content: flex-end; }
        .message-row.assistant { justify-content: flex-start; }
        .message-row.system { justify-content: center; margin: 10px 0; }

        .msg-bubble { padding: 10px 15px; border-radius: 12px; font-size: 0.95rem; line-height: 1.5; max-width: 85%; overflow-wrap: anywhere; }
        .message-row.user .msg-bubble { background-color: #e3f2fd; color: #1565c0; border-bottom-right-radius: 2px; }
        .message-row.assistant .msg-bubble { background-color: #f5f5f5; color: #333; border-bottom-left-radius: 2px; }
        .system-bubble { background-color: #fff3cd; color: #666; padding: 8px 16px; border-radius: 20px; font-size: 0.85em; border: 1px dashed #ccc; }

        .input-wrapper { border-top: 1px solid var(--border-color); padding: 20px; display: flex; justify-content: center; background: white; }
        .input-container { width: 100%; max-width: 900px; position: relative; display: flex; flex-direction: column; }
        .chat-input { width: 100%; height: 50px; padding: 12px; padding-right: 70px; border: 1px solid var(--border-color); border-radius: 8px; resize: none; font-family: inherit; outline: none; }
        .chat-input:focus { border-color: var(--accent-color); }
        .send-btn { position: absolute; right: 8px; bottom: 8px; background: var(--accent-color); color: white; border: none; border-radius: 4px; padding: 6px 10px; cursor: pointer; }
        .send-btn:disabled { background: #ccc; cursor: default; }
    "#;

    html! {
        <>
            <style>{ css }</style>

            <div class="messages-container" ref={scroll_ref}>
                { for props.entries.iter().map(|entry| {
                    let msg = &entry.message;
                    match msg.role {
                        Role::System => html! {
                            <div key={entry.id.clone()} class="message-row system">
                                <div class="system-bubble">{ &msg.content }</div>
                            </div>
                        },
                        Role::User => html! {
                            <div key={entry.id.clone()} class="message-row user">
                                <div class="msg-bubble">{ &msg.content }</div>
                            </div>
                        },
                        Role::Assistant => html! {
                            <div key={entry.id.clone()} class="message-row assistant">
                                <div class="msg-bubble">{ render_markdown(&msg.content) }</div>
                            </div>
                        },
                    }
                })}

                if props.is_loading {
                    <div class="message-row assistant">
                        <div class="msg-bubble" style="color: #888; font-style: italic;">
                            { "Thinking..." }
                        </div>
                    </div>
                }
            </div>

            <div class="input-wrapper">
                <form class="input-container" onsubmit={on_submit}>
                    <textarea
                        class="chat-input"
                        rows="1"
                        placeholder="Send a message..."
                        value={(*input_text).clone()}
                        oninput={on_input}
                        onkeydown={on_keydown}
                        disabled={props.is_loading}
                    />
                    <button
                        type="submit"
                        class="send-btn"
                        disabled={props.is_loading || input_text.trim().is_empty()}
                    >
                        { "Send" }
                    </button>
                </form>
            </div>
        </>
    }
}
